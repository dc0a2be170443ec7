//! Usage text rendering.

use std::io::{self, Write};

use crate::options::Slot;
use crate::registry::{Field, FieldTable};

/// Column widths for usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStyle {
    /// Width the long name is padded to, not counting the leading `--`.
    pub name_width: usize,
    /// Width the type tag is padded to.
    pub tag_width: usize,
}

impl Default for UsageStyle {
    fn default() -> Self {
        UsageStyle {
            name_width: 20,
            tag_width: 10,
        }
    }
}

pub fn write_usage<W: Write>(
    out: &mut W,
    program: &str,
    table: &FieldTable,
    style: &UsageStyle,
) -> io::Result<()> {
    write!(out, "Usage: {} [OPTION]...\n", program)?;
    for field in table.fields() {
        write!(out, "{}\n", format_line(field, style))?;
    }
    Ok(())
}

fn format_line(field: &Field, style: &UsageStyle) -> String {
    let short = match field.short {
        Some(c) => format!("-{}, ", c),
        None => "    ".to_string(),
    };
    let mut line = format!(
        "  {}--{:<nw$} {:<tw$}",
        short,
        field.name,
        field.tag(),
        nw = style.name_width,
        tw = style.tag_width,
    );

    if let Some(ref desc) = field.description {
        line.push(' ');
        line.push_str(desc);
    }
    if field.show_default {
        if let Slot::Scalar(ref v) = field.default {
            line.push_str(&format!(" (default: {})", v));
        }
    }

    line.truncate(line.trim_end().len());
    line
}
