//! Literal-or-variable resolution
//!
//! One precedence policy shared by every value shape:
//!
//! 1. Neither a literal nor a non-empty variable name: `ValueRequired`.
//! 2. A variable name is present: look it up.
//!    - A non-empty raw value is parsed and returned; parse errors propagate.
//!    - Defined-but-empty and undefined both fall through to the literal.
//!    - Any other source error propagates unchanged.
//! 3. A literal is present (even an empty one): return it.
//! 4. Otherwise `VariableValueRequired`, naming the variable.
//!
//! An empty variable name is treated as absent.

use crate::error::{Error, Result};
use crate::source::VariableSource;

/// Resolve a value from its literal and variable name
pub(crate) fn resolve<T, S, P>(
    literal: Option<&T>,
    variable: Option<&str>,
    source: &S,
    parse: P,
) -> Result<T>
where
    T: Clone,
    S: VariableSource + ?Sized,
    P: FnOnce(&str) -> Result<T>,
{
    let variable = variable.filter(|name| !name.is_empty());

    if variable.is_none() && literal.is_none() {
        return Err(Error::value_required());
    }

    if let Some(name) = variable {
        log::trace!("Looking up variable {}", name);

        match source.lookup(name) {
            Ok(raw) if !raw.is_empty() => {
                return parse(&raw).map_err(|e| e.with_variable(name));
            }
            Ok(_) => log::debug!("Variable {} is defined but empty", name),
            Err(e) if e.is_variable_undefined() => log::debug!("Variable {} is not defined", name),
            Err(e) => {
                log::warn!("Variable source failed while reading {}", name);
                return Err(e);
            }
        }
    }

    match literal {
        Some(value) => {
            if let Some(name) = variable {
                log::trace!("Falling back to literal value for {}", name);
            }
            Ok(value.clone())
        }
        None => Err(Error::variable_value_required(variable)),
    }
}

/// Replace a `VariableValueRequired` outcome with a default
pub(crate) fn or_default<T>(result: Result<T>, default: T) -> Result<T> {
    match result {
        Err(e) if e.is_variable_value_required() => Ok(default),
        other => other,
    }
}
