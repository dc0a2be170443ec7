//! Option declarations and the validated field table built from them.

use std::collections::HashMap;

use log::debug;

use crate::error::ConfigError;
use crate::options::Slot;
use crate::value::{IntoValue, Kind, OptionType, Value};

/// Longest accepted option name, in bytes.
pub const MAX_NAME_LEN: usize = 64;

// ============================================================================
// Opt — option descriptor builder
// ============================================================================

#[derive(Debug, Clone)]
pub struct Opt {
    name: String,
    short: Option<char>,
    kind: Kind,
    array: bool,
    default_value: Option<Value>,
    description: Option<String>,
    show_default: bool,
}

impl Opt {
    /// A boolean flag named `name`; use `.kind()` for anything else.
    pub fn new(name: &str) -> Self {
        Opt {
            name: name.to_string(),
            short: None,
            kind: Kind::Bool,
            array: false,
            default_value: None,
            description: None,
            show_default: false,
        }
    }

    /// An option whose kind follows the Rust type `T`.
    pub fn typed<T: OptionType>(name: &str) -> Self {
        Opt::new(name).kind(T::kind())
    }

    pub fn short(mut self, c: char) -> Self {
        self.short = Some(c);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Repeated occurrences accumulate instead of overwriting.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn default_val<T: IntoValue>(mut self, v: T) -> Self {
        self.default_value = Some(v.into_value());
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Append the default value to the description in usage text.
    pub fn show_default(mut self) -> Self {
        self.show_default = true;
        self
    }
}

// ============================================================================
// OptionTable — ordered list of declarations
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OptionTable {
    entries: Vec<Opt>,
}

impl OptionTable {
    pub fn new() -> Self {
        OptionTable {
            entries: Vec::new(),
        }
    }

    pub fn option(mut self, opt: Opt) -> Self {
        self.entries.push(opt);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Field / FieldTable — validated layout shared by parsing and usage
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub short: Option<char>,
    pub kind: Kind,
    pub array: bool,
    pub default: Slot,
    pub description: Option<String>,
    pub show_default: bool,
}

impl Field {
    /// Type tag as printed in usage text, bracketed for arrays.
    pub fn tag(&self) -> String {
        if self.array {
            format!("[{}]", self.kind.tag())
        } else {
            self.kind.tag()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldTable {
    fields: Vec<Field>,
}

impl FieldTable {
    /// Validate `table` and materialize defaults, preserving declaration order.
    pub fn build(table: OptionTable) -> Result<FieldTable, ConfigError> {
        let mut fields: Vec<Field> = Vec::with_capacity(table.entries.len());
        let mut names: HashMap<String, usize> = HashMap::new();
        let mut shorts: HashMap<char, usize> = HashMap::new();

        for (index, opt) in table.entries.into_iter().enumerate() {
            check_name(index, &opt.name)?;

            if let Some(&original) = names.get(&opt.name) {
                return Err(ConfigError::DuplicateName {
                    name: opt.name,
                    index,
                    original,
                });
            }

            if let Some(c) = opt.short {
                if c == '-' || c == '=' || c.is_whitespace() || c.is_control() {
                    return Err(ConfigError::InvalidShort {
                        name: opt.name,
                        short: c,
                    });
                }
                if let Some(&original) = shorts.get(&c) {
                    return Err(ConfigError::DuplicateShort {
                        name: opt.name,
                        short: c,
                        original: fields[original].name.clone(),
                    });
                }
            }

            check_kind(&opt)?;
            let default = materialize_default(&opt)?;

            names.insert(opt.name.clone(), index);
            if let Some(c) = opt.short {
                shorts.insert(c, index);
            }
            fields.push(Field {
                name: opt.name,
                short: opt.short,
                kind: opt.kind,
                array: opt.array,
                default,
                description: opt.description,
                show_default: opt.show_default,
            });
        }

        debug!("built option registry with {} option(s)", fields.len());
        Ok(FieldTable { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn position_short(&self, c: char) -> Option<usize> {
        self.fields.iter().position(|f| f.short == Some(c))
    }
}

fn check_name(index: usize, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName { index });
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ConfigError::NameTooLong {
            name: name.to_string(),
            max: MAX_NAME_LEN,
        });
    }
    if name.starts_with('-') || name.contains('=') || name.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn check_kind(opt: &Opt) -> Result<(), ConfigError> {
    let unsupported = |reason: &str| ConfigError::UnsupportedKind {
        name: opt.name.clone(),
        reason: reason.to_string(),
    };

    match &opt.kind {
        Kind::Bool if opt.array => Err(unsupported("boolean options cannot be arrays")),
        Kind::Enum(values) => {
            if values.names().is_empty() {
                return Err(unsupported("enumeration has no values"));
            }
            for (i, v) in values.names().iter().enumerate() {
                if v.is_empty() {
                    return Err(unsupported("enumeration has an empty value"));
                }
                if values.names()[..i].contains(v) {
                    return Err(unsupported(&format!("enumeration repeats value '{}'", v)));
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn materialize_default(opt: &Opt) -> Result<Slot, ConfigError> {
    let mismatch = |expected: String, found: String| ConfigError::DefaultMismatch {
        name: opt.name.clone(),
        expected,
        found,
    };

    if opt.array {
        return match &opt.default_value {
            None => Ok(Slot::Array(Vec::new())),
            Some(v) => Err(mismatch(
                format!("[{}] (arrays start empty)", opt.kind.tag()),
                v.to_string(),
            )),
        };
    }

    let value = match &opt.default_value {
        Some(v) => v
            .clone()
            .conform(&opt.kind)
            .ok_or_else(|| mismatch(opt.kind.tag(), format!("{} {}", v.type_name(), v)))?,
        None => opt
            .kind
            .zero()
            .ok_or_else(|| mismatch(opt.kind.tag(), "nothing".to_string()))?,
    };
    Ok(Slot::Scalar(value))
}
