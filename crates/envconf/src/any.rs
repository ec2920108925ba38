//! Untyped literal-or-variable values
//!
//! [`EnvAny`] resolves to a [`Value`]. A variable's raw string is decoded as
//! JSON, so `true` is a boolean, `123.45` a float, `{"a":1}` a mapping and
//! `"text"` (quoted) a string. Malformed input is an error, never a reason
//! to fall back to the literal.
//!
//! Empty and undefined variables follow the same fallback policy as every
//! typed shape.

use crate::error::Result;
use crate::typed::{EnvParse, EnvValue};
use crate::value::Value;

impl EnvParse for Value {
    const REQUIRED_ON_DECODE: bool = true;

    fn parse_env(raw: &str) -> Result<Self> {
        Value::from_json(raw)
    }

    fn null_literal() -> Option<Self> {
        Some(Value::Null)
    }
}

/// A value of any structure, or an environment reference holding JSON
pub type EnvAny = EnvValue<Value>;
