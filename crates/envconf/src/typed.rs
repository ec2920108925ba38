//! Typed literal-or-variable values
//!
//! [`EnvValue<T>`] holds an optional literal and an optional variable name.
//! Both may be present: the variable wins when it resolves to a non-empty
//! value, and the literal is the fallback.
//!
//! ```rust
//! use envconf::{EnvIntSlice, MapSource};
//!
//! let source = MapSource::from_pairs([("PORTS", "8080, 8081")]);
//! let ports = EnvIntSlice::new("PORTS", vec![80]);
//!
//! assert_eq!(ports.get_with(&source).unwrap(), vec![8080, 8081]);
//! assert_eq!(ports.get_with(&MapSource::new()).unwrap(), vec![80]);
//! ```
//!
//! In documents the value binds to two optional fields, `value` and `env`:
//!
//! ```yaml
//! port:
//!   env: APP_PORT
//!   value: 8080
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::convert::Primitive;
use crate::error::{Error, Result};
use crate::parse::{parse_map, parse_slice};
use crate::resolver::{or_default, resolve};
use crate::source::{ProcessEnv, VariableSource};

/// A value shape that can be resolved from a raw variable string
pub trait EnvParse: Clone + PartialEq {
    /// Whether a document must provide `value` or `env` for this shape
    const REQUIRED_ON_DECODE: bool;

    /// Parse a non-empty raw variable value
    fn parse_env(raw: &str) -> Result<Self>;

    /// Compare two optional literals
    fn literal_eq(a: Option<&Self>, b: Option<&Self>) -> bool {
        a == b
    }

    /// The literal an explicit `null` in a document stands for.
    ///
    /// `None` treats it like an absent field.
    fn null_literal() -> Option<Self> {
        None
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl EnvParse for $ty {
            const REQUIRED_ON_DECODE: bool = true;

            fn parse_env(raw: &str) -> Result<Self> {
                <$ty as Primitive>::parse_primitive(raw)
            }
        }
    )*};
}

impl_scalar!(String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Primitive> EnvParse for Vec<T> {
    const REQUIRED_ON_DECODE: bool = false;

    fn parse_env(raw: &str) -> Result<Self> {
        parse_slice(raw)
    }

    // An absent slice equals an empty one
    fn literal_eq(a: Option<&Self>, b: Option<&Self>) -> bool {
        a.map_or(&[][..], Vec::as_slice) == b.map_or(&[][..], Vec::as_slice)
    }
}

// Unlike slices, an absent map is not equal to an empty one
impl<T: Primitive> EnvParse for IndexMap<String, T> {
    const REQUIRED_ON_DECODE: bool = false;

    fn parse_env(raw: &str) -> Result<Self> {
        parse_map(raw)
    }
}

/// Either a literal value, an environment reference, or both
#[derive(Debug, Clone, Serialize)]
pub struct EnvValue<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(rename = "env", skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
}

/// A string literal or environment reference
pub type EnvString = EnvValue<String>;
/// A boolean literal or environment reference
pub type EnvBool = EnvValue<bool>;
/// An integer literal or environment reference
pub type EnvInt = EnvValue<i64>;
/// A floating-point literal or environment reference
pub type EnvFloat = EnvValue<f64>;
/// A string slice literal or comma-separated environment reference
pub type EnvStringSlice = EnvValue<Vec<String>>;
/// An integer slice literal or comma-separated environment reference
pub type EnvIntSlice = EnvValue<Vec<i64>>;
/// A float slice literal or comma-separated environment reference
pub type EnvFloatSlice = EnvValue<Vec<f64>>;
/// A boolean slice literal or comma-separated environment reference
pub type EnvBoolSlice = EnvValue<Vec<bool>>;
/// A string map literal or `key=value;...` environment reference
pub type EnvMapString = EnvValue<IndexMap<String, String>>;
/// An integer map literal or `key=value;...` environment reference
pub type EnvMapInt = EnvValue<IndexMap<String, i64>>;
/// A float map literal or `key=value;...` environment reference
pub type EnvMapFloat = EnvValue<IndexMap<String, f64>>;
/// A boolean map literal or `key=value;...` environment reference
pub type EnvMapBool = EnvValue<IndexMap<String, bool>>;

impl<T> Default for EnvValue<T> {
    fn default() -> Self {
        Self {
            value: None,
            variable: None,
        }
    }
}

impl<T> EnvValue<T> {
    /// Create a value from a variable name with a literal fallback
    pub fn new(variable: impl Into<String>, value: T) -> Self {
        Self {
            value: Some(value),
            variable: Some(variable.into()),
        }
    }

    /// Create a value from a literal only
    pub fn from_value(value: T) -> Self {
        Self {
            value: Some(value),
            variable: None,
        }
    }

    /// Create a value from a variable name only
    pub fn from_variable(variable: impl Into<String>) -> Self {
        Self {
            value: None,
            variable: Some(variable.into()),
        }
    }

    /// The literal value, if any
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The variable name, if any
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Check if neither a literal nor a non-empty variable name is set
    pub fn is_zero(&self) -> bool {
        self.variable.as_deref().is_none_or(str::is_empty) && self.value.is_none()
    }
}

impl<T: EnvParse> EnvValue<T> {
    /// Resolve from the process environment, falling back to the literal
    pub fn get(&self) -> Result<T> {
        self.get_with(&ProcessEnv)
    }

    /// Resolve from a custom variable source, falling back to the literal
    pub fn get_with<S: VariableSource + ?Sized>(&self, source: &S) -> Result<T> {
        resolve(
            self.value.as_ref(),
            self.variable.as_deref(),
            source,
            T::parse_env,
        )
    }

    /// Like [`get`](Self::get), returning `default` when the variable
    /// yields no value and there is no literal
    pub fn get_or_default(&self, default: T) -> Result<T> {
        or_default(self.get(), default)
    }

    /// Like [`get_with`](Self::get_with), returning `default` when the
    /// variable yields no value and there is no literal
    pub fn get_or_default_with<S: VariableSource + ?Sized>(
        &self,
        source: &S,
        default: T,
    ) -> Result<T> {
        or_default(self.get_with(source), default)
    }
}

impl<T: EnvParse> PartialEq for EnvValue<T> {
    fn eq(&self, other: &Self) -> bool {
        T::literal_eq(self.value.as_ref(), other.value.as_ref()) && self.variable == other.variable
    }
}

impl<T: EnvParse + Eq> Eq for EnvValue<T> {}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: EnvParse + Deserialize<'de>"))]
struct RawEnvValue<T> {
    #[serde(default, deserialize_with = "present_literal")]
    value: Option<T>,
    env: Option<String>,
}

// Only called when the field is present, so `null` can map to a literal
fn present_literal<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: EnvParse + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.or_else(T::null_literal))
}

impl<'de, T> Deserialize<'de> for EnvValue<T>
where
    T: EnvParse + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEnvValue::<T>::deserialize(deserializer)?;
        let decoded = EnvValue {
            value: raw.value,
            variable: raw.env,
        };

        if T::REQUIRED_ON_DECODE && decoded.is_zero() {
            return Err(serde::de::Error::custom(Error::value_required()));
        }

        Ok(decoded)
    }
}
