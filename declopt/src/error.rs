use std::fmt;

/// Errors raised while building the option registry.
///
/// These describe mistakes in the option declarations themselves, not in
/// user input. A program that hits one of them has a bug.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("option #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("option --{name}: name is longer than {max} bytes")]
    NameTooLong { name: String, max: usize },

    #[error("option --{name}: name may not start with '-' or contain '=' or whitespace")]
    InvalidName { name: String },

    #[error("option --{name}: '{short}' cannot be used as a short flag")]
    InvalidShort { name: String, short: char },

    #[error("option --{name} (#{index}) repeats the name of option #{original}")]
    DuplicateName {
        name: String,
        index: usize,
        original: usize,
    },

    #[error("option --{name} reuses short flag -{short} of option --{original}")]
    DuplicateShort {
        name: String,
        short: char,
        original: String,
    },

    #[error("option --{name}: unsupported type: {reason}")]
    UnsupportedKind { name: String, reason: String },

    #[error("option --{name}: default value {found} does not fit type {expected}")]
    DefaultMismatch {
        name: String,
        expected: String,
        found: String,
    },
}

/// Errors raised while matching the command line against the registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid short option: -{0}")]
    InvalidShortOption(char),

    #[error("expected separator '=' after --{0}")]
    ExpectedSeparator(String),

    #[error("missing value for option {0}")]
    MissingValue(OptionRef),

    #[error("invalid boolean value for {option}: '{value}'")]
    InvalidBoolValue { option: OptionRef, value: String },

    #[error("invalid int value for {option}: '{value}'")]
    InvalidIntValue { option: OptionRef, value: String },

    #[error("invalid float value for {option}: '{value}'")]
    InvalidFloatValue { option: OptionRef, value: String },

    #[error("invalid enum value for {option}: '{value}' (expected one of {expected})")]
    InvalidEnumValue {
        option: OptionRef,
        value: String,
        expected: String,
    },
}

/// How an option was spelled on the command line, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionRef {
    Long(String),
    Short(char),
}

impl fmt::Display for OptionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRef::Long(name) => write!(f, "--{}", name),
            OptionRef::Short(c) => write!(f, "-{}", c),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("option not found: {0}")]
    NotFound(String),

    #[error("option --{name}: type mismatch, expected {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
