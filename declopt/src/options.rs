//! The result table produced by one parse.

use std::fmt;

use crate::error::{Error, Result};
use crate::registry::FieldTable;
use crate::value::{FromValue, OptionEnum, Value};

/// Storage for one option: a single value, or every occurrence in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Scalar(Value),
    Array(Vec<Value>),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Scalar(v) => write!(f, "{}", v),
            Slot::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    slot: Slot,
    present: bool,
}

/// Parsed option values, one slot per declared option, in declaration order.
///
/// Every slot starts at its option's default. String values are owned by
/// the table and never borrow from the argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    entries: Vec<Entry>,
}

impl Options {
    pub(crate) fn from_defaults(table: &FieldTable) -> Self {
        Options {
            entries: table
                .fields()
                .iter()
                .map(|f| Entry {
                    name: f.name.clone(),
                    slot: f.default.clone(),
                    present: false,
                })
                .collect(),
        }
    }

    /// Overwrite a scalar slot or append to an array slot.
    pub(crate) fn store(&mut self, idx: usize, value: Value) {
        if let Some(entry) = self.entries.get_mut(idx) {
            match &mut entry.slot {
                Slot::Scalar(v) => *v = value,
                Slot::Array(values) => values.push(value),
            }
            entry.present = true;
        }
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.slot)
    }

    /// The raw value of a scalar option.
    pub fn value(&self, name: &str) -> Option<&Value> {
        match self.slot(name) {
            Some(Slot::Scalar(v)) => Some(v),
            _ => None,
        }
    }

    /// Get a typed scalar value by option name.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T> {
        let entry = self.entry(name)?;
        let mismatch = || Error::TypeMismatch {
            name: name.to_string(),
            expected: T::EXPECTED,
        };
        match &entry.slot {
            Slot::Scalar(v) => T::from_value(v).ok_or_else(mismatch),
            Slot::Array(_) => Err(mismatch()),
        }
    }

    /// Get every value of an array option, in the order given.
    pub fn get_all<T: FromValue>(&self, name: &str) -> Result<Vec<T>> {
        let entry = self.entry(name)?;
        let mismatch = || Error::TypeMismatch {
            name: name.to_string(),
            expected: T::EXPECTED,
        };
        match &entry.slot {
            Slot::Array(values) => values
                .iter()
                .map(|v| T::from_value(v).ok_or_else(mismatch))
                .collect(),
            Slot::Scalar(_) => Err(mismatch()),
        }
    }

    pub fn get_enum<E: OptionEnum>(&self, name: &str) -> Result<E> {
        let entry = self.entry(name)?;
        let found = match &entry.slot {
            Slot::Scalar(Value::Enum(s)) => E::from_name(s),
            _ => None,
        };
        found.ok_or_else(|| Error::TypeMismatch {
            name: name.to_string(),
            expected: "enum",
        })
    }

    /// Check if an option was given on the command line at least once.
    pub fn is_present(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name && e.present)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.slot))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Free every owned string and the storage of every array slot.
    ///
    /// Dropping the table does the same; this spells it out for callers
    /// that want the release to be visible at the call site.
    pub fn release(self) {
        for entry in self.entries {
            match entry.slot {
                Slot::Scalar(v) => drop(v),
                Slot::Array(values) => drop(values),
            }
        }
    }
}

/// Conversion from a parsed table into an application's own struct.
pub trait FromOptions: Sized {
    fn from_options(opts: &Options) -> Result<Self>;
}
