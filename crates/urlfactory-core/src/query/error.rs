//! Errors for parsing `key=value` parameter pairs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// No `=` between key and value.
    #[error("expected key=value, got {0:?}")]
    MissingSeparator(String),
    #[error("query parameter key is empty in {0:?}")]
    EmptyKey(String),
}
