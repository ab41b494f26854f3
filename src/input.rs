//! Request parsing for the `shellwords` binary.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty request")]
    Empty,
}

/// One request read from stdin, tagged by `op`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Split a command line into words.
    Split {
        line: String,
        /// Also report the raw text behind each word.
        #[serde(default)]
        raw: bool,
    },
    /// Escape a single value.
    Escape { value: String },
    /// Escape and join several values.
    Join { values: Vec<String> },
}

impl Request {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        if json.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Operation name, for logging.
    pub fn op(&self) -> &'static str {
        match self {
            Request::Split { .. } => "split",
            Request::Escape { .. } => "escape",
            Request::Join { .. } => "join",
        }
    }
}
