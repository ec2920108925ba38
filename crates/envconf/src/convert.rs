//! Primitive conversion
//!
//! Converts a raw string into one member of the closed primitive family:
//! `String`, `bool`, every integer width and both float widths. Numeric and
//! boolean input is trimmed first. Values outside the range of the requested
//! width are rejected rather than truncated.

use crate::error::{Error, Result};

/// A type that can be converted from a raw variable string.
///
/// Implemented for a fixed set of types only; slices and maps of these are
/// handled by the composite-string parser.
pub trait Primitive: Sized + Clone + PartialEq {
    /// Human-readable name of the expected kind, used in error messages
    const KIND: &'static str;

    /// Convert a raw string into this type
    fn parse_primitive(raw: &str) -> Result<Self>;
}

impl Primitive for String {
    const KIND: &'static str = "string";

    fn parse_primitive(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl Primitive for bool {
    const KIND: &'static str = "boolean";

    fn parse_primitive(raw: &str) -> Result<Self> {
        parse_bool(raw)
    }
}

/// Parse a boolean.
///
/// Accepts `true`/`false`, `t`/`f` and `1`/`0`, case-insensitively.
pub fn parse_bool(raw: &str) -> Result<bool> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(invalid(trimmed, bool::KIND)),
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: &'static str = concat!("integer (", stringify!($ty), ")");

            fn parse_primitive(raw: &str) -> Result<Self> {
                let trimmed = raw.trim();
                trimmed
                    .parse::<$ty>()
                    .map_err(|e| invalid(trimmed, Self::KIND).with_cause(e))
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            const KIND: &'static str = concat!("floating-point number (", stringify!($ty), ")");

            fn parse_primitive(raw: &str) -> Result<Self> {
                let trimmed = raw.trim();
                let parsed = trimmed
                    .parse::<$ty>()
                    .map_err(|e| invalid(trimmed, Self::KIND).with_cause(e))?;

                // Rust saturates overflow to infinity
                if parsed.is_infinite() && !names_infinity(trimmed) {
                    return Err(invalid(trimmed, Self::KIND).with_cause("value out of range"));
                }

                Ok(parsed)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float!(f32, f64);

fn names_infinity(s: &str) -> bool {
    let unsigned = s.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn invalid(raw: &str, kind: &str) -> Error {
    Error::parse_failed(format!("invalid {}", kind), format!("{:?}", raw))
}
