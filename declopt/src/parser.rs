//! Matching arguments against the registry and coercing their values.

use std::io::{self, Write};

use log::{debug, trace};

use crate::error::{ConfigError, OptionRef, ParseError, Result};
use crate::options::{FromOptions, Options, Slot};
use crate::registry::{FieldTable, OptionTable};
use crate::tokenizer::Tokenizer;
use crate::usage::{self, UsageStyle};
use crate::value::{FloatWidth, Kind, Value};

// ============================================================================
// ParserBuilder
// ============================================================================

pub struct ParserBuilder {
    name: String,
    options: OptionTable,
    style: UsageStyle,
}

impl ParserBuilder {
    pub fn new(name: &str) -> Self {
        ParserBuilder {
            name: name.to_string(),
            options: OptionTable::new(),
            style: UsageStyle::default(),
        }
    }

    pub fn options(mut self, opts: OptionTable) -> Self {
        self.options = opts;
        self
    }

    pub fn usage_style(mut self, style: UsageStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the declarations. A failure here is a bug in the program,
    /// not in its input.
    pub fn build(self) -> std::result::Result<Parser, ConfigError> {
        let table = FieldTable::build(self.options)?;
        Ok(Parser {
            name: self.name,
            table,
            style: self.style,
        })
    }
}

// ============================================================================
// Parser
// ============================================================================

/// A validated option registry, reusable across any number of parses.
#[derive(Debug, Clone)]
pub struct Parser {
    name: String,
    table: FieldTable,
    style: UsageStyle,
}

impl Parser {
    pub fn builder(name: &str) -> ParserBuilder {
        ParserBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &FieldTable {
        &self.table
    }

    /// The table every parse starts from.
    pub fn defaults(&self) -> Options {
        Options::from_defaults(&self.table)
    }

    /// Parse the process arguments.
    pub fn parse(&self) -> std::result::Result<Options, ParseError> {
        self.parse_from(std::env::args())
    }

    /// Parse an argument list whose first element is the program path.
    pub fn parse_from<I, S>(&self, args: I) -> std::result::Result<Options, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Matcher {
            table: &self.table,
            tokens: Tokenizer::new(args),
            opts: self.defaults(),
            matched: 0,
        };
        while !matcher.tokens.eof() {
            matcher.match_one()?;
        }
        debug!(
            "{}: matched {} option occurrence(s)",
            self.name, matcher.matched
        );
        Ok(matcher.opts)
    }

    pub fn parse_into<T: FromOptions>(&self) -> Result<T> {
        self.parse_into_from(std::env::args())
    }

    pub fn parse_into_from<T, I, S>(&self, args: I) -> Result<T>
    where
        T: FromOptions,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let opts = self.parse_from(args)?;
        T::from_options(&opts)
    }

    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        usage::write_usage(out, &self.name, &self.table, &self.style)
    }

    pub fn usage(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_usage(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

// ============================================================================
// Matcher — one parse in progress
// ============================================================================

struct Matcher<'t, I> {
    table: &'t FieldTable,
    tokens: Tokenizer<I>,
    opts: Options,
    matched: usize,
}

impl<I, S> Matcher<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Consume one option occurrence (and its value) from the tokens.
    fn match_one(&mut self) -> std::result::Result<(), ParseError> {
        let token = self.tokens.current().to_string();

        let (idx, option, text) = if let Some(rest) = token.strip_prefix("--") {
            self.match_long(&token, rest)?
        } else if let Some(rest) = token.strip_prefix('-') {
            self.match_short(&token, rest)?
        } else {
            return Err(ParseError::InvalidOption(token.clone()));
        };

        let Some(field) = self.table.get(idx) else {
            return Err(ParseError::InvalidOption(token));
        };
        let value = match text {
            Some(text) => coerce(&field.kind, &option, text)?,
            None => match &field.default {
                Slot::Scalar(Value::Bool(b)) => Value::Bool(!b),
                _ => return Err(ParseError::MissingValue(option)),
            },
        };

        trace!("{} = {}", option, value);
        self.opts.store(idx, value);
        self.matched += 1;
        Ok(())
    }

    /// `--name=value`, or `--name` alone for booleans.
    fn match_long(
        &mut self,
        token: &str,
        rest: &str,
    ) -> std::result::Result<(usize, OptionRef, Option<String>), ParseError> {
        let name = rest.split('=').next().unwrap_or(rest);
        let idx = self
            .table
            .position(name)
            .ok_or_else(|| ParseError::InvalidOption(token.to_string()))?;
        let is_bool = self.table.fields()[idx].kind.is_bool();
        let has_separator = rest.len() > name.len();

        self.tokens.eat("--");
        self.tokens.eat(name);

        let text = if has_separator {
            let raw = self.tokens.next_token();
            Some(raw[1..].to_string())
        } else if is_bool {
            self.implicit_bool()
        } else if self.tokens.eof() {
            return Err(ParseError::MissingValue(OptionRef::Long(name.to_string())));
        } else {
            return Err(ParseError::ExpectedSeparator(name.to_string()));
        };
        Ok((idx, OptionRef::Long(name.to_string()), text))
    }

    /// `-cvalue`, `-c=value`, `-c value`, or `-c` alone for booleans.
    fn match_short(
        &mut self,
        token: &str,
        rest: &str,
    ) -> std::result::Result<(usize, OptionRef, Option<String>), ParseError> {
        let Some(c) = rest.chars().next() else {
            return Err(ParseError::InvalidOption(token.to_string()));
        };
        let idx = self
            .table
            .position_short(c)
            .ok_or(ParseError::InvalidShortOption(c))?;
        let is_bool = self.table.fields()[idx].kind.is_bool();
        let attached = &rest[c.len_utf8()..];
        let option = OptionRef::Short(c);

        let mut buf = [0u8; 4];
        self.tokens.eat("-");
        self.tokens.eat(c.encode_utf8(&mut buf));

        let text = if !attached.is_empty() {
            let raw = self.tokens.next_token();
            match raw.strip_prefix('=') {
                Some(v) => Some(v.to_string()),
                None => Some(raw),
            }
        } else if is_bool {
            self.implicit_bool()
        } else if self.tokens.eof() {
            return Err(ParseError::MissingValue(option));
        } else {
            Some(self.tokens.next_token())
        };
        Ok((idx, option, text))
    }

    /// A boolean given without `=`: take the next token as its literal
    /// unless there is none or it looks like another option.
    fn implicit_bool(&mut self) -> Option<String> {
        if self.tokens.eof() || self.tokens.current().starts_with('-') {
            None
        } else {
            Some(self.tokens.next_token())
        }
    }
}

// ============================================================================
// Coercion
// ============================================================================

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Convert raw text to a value of `kind`.
pub(crate) fn coerce(
    kind: &Kind,
    option: &OptionRef,
    text: String,
) -> std::result::Result<Value, ParseError> {
    match kind {
        Kind::Bool => match parse_bool(&text) {
            Some(b) => Ok(Value::Bool(b)),
            None => Err(ParseError::InvalidBoolValue {
                option: option.clone(),
                value: text,
            }),
        },
        Kind::Int(width) => {
            let (lo, hi) = width.signed_range();
            match text.parse::<i64>() {
                Ok(n) if n >= lo && n <= hi => Ok(Value::Int(n)),
                _ => Err(ParseError::InvalidIntValue {
                    option: option.clone(),
                    value: text,
                }),
            }
        }
        Kind::Uint(width) => match text.parse::<u64>() {
            Ok(n) if n <= width.unsigned_max() => Ok(Value::Uint(n)),
            _ => Err(ParseError::InvalidIntValue {
                option: option.clone(),
                value: text,
            }),
        },
        Kind::Float(width) => {
            let parsed = match width {
                FloatWidth::F32 => text.parse::<f32>().map(Value::Float32),
                FloatWidth::F64 => text.parse::<f64>().map(Value::Float),
            };
            parsed.map_err(|_| ParseError::InvalidFloatValue {
                option: option.clone(),
                value: text,
            })
        }
        Kind::Str => Ok(Value::Str(text)),
        Kind::Enum(values) => {
            if values.contains(&text) {
                Ok(Value::Enum(text))
            } else {
                Err(ParseError::InvalidEnumValue {
                    option: option.clone(),
                    value: text,
                    expected: values.joined(),
                })
            }
        }
    }
}
