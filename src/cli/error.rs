// src/cli/error.rs

use thiserror::Error;

/// Reasons a command line is rejected. Every variant carries the token or
/// option spelling the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{option}' requires a value")]
    MissingValue { option: String },

    #[error("invalid value '{value}' for '{option}': expected a positive integer")]
    InvalidValue { option: String, value: String },
}
