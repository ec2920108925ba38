//! envconf: Configuration values backed by literals or environment variables
//!
//! Each configuration field may carry a literal value, the name of a
//! variable to read at load time, or both. Resolution prefers a non-empty
//! variable, falls back to the literal, and reports a classified error when
//! neither yields a value.
//!
//! # Example
//!
//! ```rust
//! use envconf::{EnvInt, EnvString, MapSource};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Database {
//!     host: EnvString,
//!     port: EnvInt,
//! }
//!
//! let json = r#"{
//!     "host": {"env": "DB_HOST", "value": "localhost"},
//!     "port": {"value": 5432}
//! }"#;
//!
//! let db: Database = serde_json::from_str(json).unwrap();
//! let source = MapSource::from_pairs([("DB_HOST", "db.internal")]);
//!
//! assert_eq!(db.host.get_with(&source).unwrap(), "db.internal");
//! assert_eq!(db.port.get_with(&source).unwrap(), 5432);
//! ```

pub mod any;
pub mod convert;
pub mod error;
pub mod parse;
pub mod source;
pub mod typed;
pub mod value;

mod resolver;

pub use any::EnvAny;
pub use convert::Primitive;
pub use error::{Error, ErrorKind, Result};
pub use parse::{parse_map, parse_slice, parse_string_map, parse_string_slice};
pub use source::{FnSource, MapSource, ProcessEnv, VariableSource};
pub use typed::{
    EnvBool, EnvBoolSlice, EnvFloat, EnvFloatSlice, EnvInt, EnvIntSlice, EnvMapBool, EnvMapFloat,
    EnvMapInt, EnvMapString, EnvParse, EnvString, EnvStringSlice, EnvValue,
};
pub use value::Value;
