//! Option kinds and the tagged values stored for them.

use std::fmt;

// ============================================================================
// Kind — what an option's value looks like
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    pub(crate) fn signed_range(self) -> (i64, i64) {
        match self {
            IntWidth::W8 => (i8::MIN as i64, i8::MAX as i64),
            IntWidth::W16 => (i16::MIN as i64, i16::MAX as i64),
            IntWidth::W32 => (i32::MIN as i64, i32::MAX as i64),
            IntWidth::W64 => (i64::MIN, i64::MAX),
        }
    }

    pub(crate) fn unsigned_max(self) -> u64 {
        match self {
            IntWidth::W8 => u8::MAX as u64,
            IntWidth::W16 => u16::MAX as u64,
            IntWidth::W32 => u32::MAX as u64,
            IntWidth::W64 => u64::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

/// The named values of an enumeration option, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValues(Vec<String>);

impl EnumValues {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumValues(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|v| v == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Values joined with `|`, as shown in usage text and error messages.
    pub fn joined(&self) -> String {
        self.0.join("|")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Bool,
    Int(IntWidth),
    Uint(IntWidth),
    Float(FloatWidth),
    Str,
    Enum(EnumValues),
}

impl Kind {
    pub fn of<T: OptionType>() -> Kind {
        T::kind()
    }

    pub fn enumeration<E: OptionEnum>() -> Kind {
        Kind::Enum(EnumValues::new(E::VALUES.iter().copied()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Kind::Bool)
    }

    /// Short type tag used by usage rendering.
    pub fn tag(&self) -> String {
        match self {
            Kind::Bool => "bool".to_string(),
            Kind::Int(w) => format!("i{}", w.bits()),
            Kind::Uint(w) => format!("u{}", w.bits()),
            Kind::Float(FloatWidth::F32) => "f32".to_string(),
            Kind::Float(FloatWidth::F64) => "f64".to_string(),
            Kind::Str => "string".to_string(),
            Kind::Enum(values) => values.joined(),
        }
    }

    /// The value a scalar option starts from when no default is declared.
    pub(crate) fn zero(&self) -> Option<Value> {
        match self {
            Kind::Bool => Some(Value::Bool(false)),
            Kind::Int(_) => Some(Value::Int(0)),
            Kind::Uint(_) => Some(Value::Uint(0)),
            Kind::Float(FloatWidth::F32) => Some(Value::Float32(0.0)),
            Kind::Float(FloatWidth::F64) => Some(Value::Float(0.0)),
            Kind::Str => Some(Value::Str(String::new())),
            Kind::Enum(values) => values.first().map(|v| Value::Enum(v.to_string())),
        }
    }
}

// ============================================================================
// Value — tagged storage for one parsed or default value
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Kept narrow so it prints the way it was written.
    Float32(f32),
    Str(String),
    Enum(String),
}

impl Value {
    pub fn enumeration<E: OptionEnum>(e: &E) -> Value {
        Value::Enum(e.name().to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) | Value::Float32(_) => "float",
            Value::Str(_) => "string",
            Value::Enum(_) => "enum",
        }
    }

    /// Re-tag a value so it matches `kind`, or `None` if it cannot.
    ///
    /// Integer literals are accepted for either signedness as long as they
    /// fit the declared width, and plain strings are accepted for enums when
    /// they name one of the values.
    pub(crate) fn conform(self, kind: &Kind) -> Option<Value> {
        match (kind, self) {
            (Kind::Bool, v @ Value::Bool(_)) => Some(v),
            (Kind::Int(w), Value::Int(n)) => {
                let (lo, hi) = w.signed_range();
                (n >= lo && n <= hi).then_some(Value::Int(n))
            }
            (Kind::Int(w), Value::Uint(n)) => {
                let (_, hi) = w.signed_range();
                (n <= hi as u64).then_some(Value::Int(n as i64))
            }
            (Kind::Uint(w), Value::Uint(n)) => (n <= w.unsigned_max()).then_some(Value::Uint(n)),
            (Kind::Uint(w), Value::Int(n)) => {
                (n >= 0 && n as u64 <= w.unsigned_max()).then_some(Value::Uint(n as u64))
            }
            (Kind::Float(FloatWidth::F32), v @ Value::Float32(_)) => Some(v),
            (Kind::Float(FloatWidth::F32), Value::Float(f)) => Some(Value::Float32(f as f32)),
            (Kind::Float(FloatWidth::F64), v @ Value::Float(_)) => Some(v),
            (Kind::Float(FloatWidth::F64), Value::Float32(f)) => Some(Value::Float(f64::from(f))),
            (Kind::Str, v @ Value::Str(_)) => Some(v),
            (Kind::Enum(values), Value::Enum(s)) | (Kind::Enum(values), Value::Str(s)) => {
                values.contains(&s).then_some(Value::Enum(s))
            }
            _ => None,
        }
    }
}

/// Formats a value so that parsing the text again yields the same value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Float32(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Enum(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Conversion traits
// ============================================================================

/// Rust types that map directly onto an option kind.
pub trait OptionType {
    fn kind() -> Kind;
}

/// A Rust enum usable as an enumeration option.
///
/// `VALUES` lists the names accepted on the command line, matched
/// case-sensitively.
pub trait OptionEnum: Sized {
    const VALUES: &'static [&'static str];

    fn from_name(name: &str) -> Option<Self>;

    fn name(&self) -> &'static str;
}

/// Trait for converting Rust values into a `Value` (used for defaults).
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Trait for typed retrieval from an `Options` table.
pub trait FromValue: Sized {
    const EXPECTED: &'static str;

    fn from_value(v: &Value) -> Option<Self>;
}

impl OptionType for bool {
    fn kind() -> Kind {
        Kind::Bool
    }
}

impl OptionType for String {
    fn kind() -> Kind {
        Kind::Str
    }
}

impl OptionType for f32 {
    fn kind() -> Kind {
        Kind::Float(FloatWidth::F32)
    }
}

impl OptionType for f64 {
    fn kind() -> Kind {
        Kind::Float(FloatWidth::F64)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float32(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Float(x) => Some(*x),
            Value::Float32(x) => Some(f64::from(*x)),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Float32(x) => Some(*x),
            Value::Float(x) => Some(*x as f32),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Str(s) | Value::Enum(s) => Some(s.clone()),
            _ => None,
        }
    }
}

macro_rules! int_conversions {
    ($($t:ty => $variant:ident, $width:ident;)*) => {
        $(
            impl OptionType for $t {
                fn kind() -> Kind {
                    Kind::$variant(IntWidth::$width)
                }
            }

            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    Value::$variant(self.into())
                }
            }

            impl FromValue for $t {
                const EXPECTED: &'static str = stringify!($t);

                fn from_value(v: &Value) -> Option<Self> {
                    match v {
                        Value::Int(n) => <$t>::try_from(*n).ok(),
                        Value::Uint(n) => <$t>::try_from(*n).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

int_conversions! {
    i8 => Int, W8;
    i16 => Int, W16;
    i32 => Int, W32;
    i64 => Int, W64;
    u8 => Uint, W8;
    u16 => Uint, W16;
    u32 => Uint, W32;
    u64 => Uint, W64;
}
