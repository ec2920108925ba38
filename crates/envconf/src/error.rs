//! Error types for envconf
//!
//! Errors are structured: a kind that callers branch on to decide fallback
//! behavior, the variable being resolved, a diagnostic hint naming the
//! offending fragment, and an actionable help message.

use std::fmt;

/// Result type alias for envconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for envconf operations
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The kind of error that occurred
    pub kind: ErrorKind,
    /// Name of the variable being resolved, if any
    pub variable: Option<String>,
    /// Offending fragment (map key, slice index, raw substring)
    pub hint: Option<String>,
    /// Actionable help message
    pub help: Option<String>,
    /// Underlying cause (as string for Clone compatibility)
    pub cause: Option<String>,
}

/// Categories of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Neither a literal nor a variable name is present
    #[error("require either value or env")]
    ValueRequired,
    /// A variable was named but produced no value and there is no literal
    #[error("the environment variable value is empty")]
    VariableValueRequired,
    /// The variable source does not define the variable.
    ///
    /// Consumed by the resolver; callers normally see
    /// [`ErrorKind::VariableValueRequired`] instead.
    #[error("the environment variable is not defined")]
    VariableUndefined,
    /// Primitive conversion or composite-string grammar failed
    #[error("{expected}")]
    ParseFailed { expected: String },
    /// The variable source failed for a reason unrelated to definedness
    #[error("failed to read the variable source")]
    SourceFailed,
    /// The raw string of an untyped value was not valid structured text
    #[error("invalid structured value, expected JSON")]
    DecodeFailed,
}

impl Error {
    fn from_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            variable: None,
            hint: None,
            help: None,
            cause: None,
        }
    }

    /// Create a value required error (both literal and variable are absent)
    pub fn value_required() -> Self {
        Self::from_kind(ErrorKind::ValueRequired)
            .with_help("Provide a literal `value`, an `env` variable name, or both")
    }

    /// Create a variable value required error
    pub fn variable_value_required(variable: Option<&str>) -> Self {
        let mut err = Self::from_kind(ErrorKind::VariableValueRequired);
        if let Some(name) = variable {
            err.variable = Some(name.to_string());
            err.help = Some(format!(
                "Set the {} environment variable or provide a literal `value` as fallback",
                name
            ));
        }
        err
    }

    /// Create a variable undefined signal, returned by variable sources
    pub fn variable_undefined(variable: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::VariableUndefined).with_variable(variable)
    }

    /// Create a parse error describing the expected grammar or kind
    pub fn parse_failed(expected: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::from_kind(ErrorKind::ParseFailed {
            expected: expected.into(),
        })
        .with_hint(hint)
    }

    /// Create a source failure error
    pub fn source_failed(variable: impl Into<String>, cause: impl Into<String>) -> Self {
        let mut err = Self::from_kind(ErrorKind::SourceFailed).with_variable(variable);
        err.cause = Some(cause.into());
        err
    }

    /// Create a structured-text decode error
    pub fn decode_failed(cause: impl Into<String>, preview: impl Into<String>) -> Self {
        let mut err = Self::from_kind(ErrorKind::DecodeFailed).with_hint(preview);
        err.cause = Some(cause.into());
        err
    }

    /// Add variable context to the error
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    /// Add a diagnostic hint to the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add help message to the error
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach the underlying cause
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::ValueRequired => "EmptyEnv",
            ErrorKind::VariableValueRequired | ErrorKind::VariableUndefined => "EmptyVar",
            ErrorKind::ParseFailed { .. } | ErrorKind::DecodeFailed => "ParseEnvFailed",
            ErrorKind::SourceFailed => "SourceFailed",
        }
    }

    /// Check if neither a literal nor a variable was given
    pub fn is_value_required(&self) -> bool {
        self.kind == ErrorKind::ValueRequired
    }

    /// Check if a named variable produced no value and there was no literal
    pub fn is_variable_value_required(&self) -> bool {
        self.kind == ErrorKind::VariableValueRequired
    }

    /// Check if a variable source reported the variable as undefined
    pub fn is_variable_undefined(&self) -> bool {
        self.kind == ErrorKind::VariableUndefined
    }

    /// Check if a raw value failed conversion or grammar
    pub fn is_parse_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseFailed { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.kind)?;

        if let Some(variable) = &self.variable {
            write!(f, "\n  Variable: {}", variable)?;
        }

        if let Some(hint) = &self.hint {
            write!(f, "\n  Hint: {}", hint)?;
        }

        if let Some(cause) = &self.cause {
            write!(f, "\n  {}", cause)?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}
