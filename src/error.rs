//! Errors raised by the fallible outer surfaces of the crate.
//!
//! The toolbar pipeline itself never fails: malformed input degrades to an
//! empty toolbar. Only name lookups, settings loading and output encoding can
//! go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolbarError {
    #[error("unknown toolbar preset '{0}' (expected one of BASIC, STANDARD, FULL, MINIMAL)")]
    UnknownPreset(String),

    #[error("unknown normalization strategy '{0}' (expected structural or textual)")]
    UnknownStrategy(String),

    #[error("unknown image tool '{0}'")]
    UnknownImageTool(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ToolbarError {
    fn from(err: serde_json::Error) -> Self {
        ToolbarError::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for ToolbarError {
    fn from(err: serde_yaml::Error) -> Self {
        ToolbarError::Serialize(err.to_string())
    }
}
