//! Variable sources
//!
//! A variable source maps a variable name to its raw string value. The
//! process environment is the default source; callers can plug in secret
//! stores, pre-fetched bundles or test doubles.
//!
//! # Encoding of definedness
//!
//! The resolver distinguishes three outcomes of a lookup:
//!
//! - `Ok(String::new())`: the variable is defined but empty.
//! - `Err(e)` with [`Error::is_variable_undefined`]: the variable is not defined.
//!   Build it with [`Error::variable_undefined`].
//! - Any other `Err`: the source itself failed. The resolver propagates it as-is.
//!
//! Sources are called synchronously, once per resolution. Timeouts and
//! retries for remote sources belong inside the source implementation.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Trait for variable source implementations
pub trait VariableSource: Send + Sync {
    /// Look up the raw value of a variable
    fn lookup(&self, name: &str) -> Result<String>;
}

impl<S: VariableSource + ?Sized> VariableSource for &S {
    fn lookup(&self, name: &str) -> Result<String> {
        (**self).lookup(name)
    }
}

impl<S: VariableSource + ?Sized> VariableSource for Box<S> {
    fn lookup(&self, name: &str) -> Result<String> {
        (**self).lookup(name)
    }
}

impl<S: VariableSource + ?Sized> VariableSource for Arc<S> {
    fn lookup(&self, name: &str) -> Result<String> {
        (**self).lookup(name)
    }
}

/// Source that reads the host process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VariableSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Result<String> {
        match std::env::var(name) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => Err(Error::variable_undefined(name)),
            Err(e @ std::env::VarError::NotUnicode(_)) => {
                Err(Error::source_failed(name, e.to_string()))
            }
        }
    }
}

/// Source backed by an in-memory map.
///
/// Missing keys are reported as undefined. Useful for tests and for values
/// fetched in bulk from a secret store ahead of resolution.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    vars: IndexMap<String, String>,
}

impl MapSource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from an iterator of name-value pairs
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Define a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable, making it undefined
    pub fn remove(&mut self, name: &str) {
        self.vars.shift_remove(name);
    }

    /// Check if a variable is defined
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}

impl VariableSource for MapSource {
    fn lookup(&self, name: &str) -> Result<String> {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| Error::variable_undefined(name))
    }
}

/// A simple function-based source
pub struct FnSource<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    func: F,
}

impl<F> FnSource<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    /// Create a new function-based source
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> VariableSource for FnSource<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Result<String> {
        (self.func)(name)
    }
}

impl<F> std::fmt::Debug for FnSource<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}
