//! Error types for primer-core.

use miette::{Diagnostic, SourceSpan};
use std::num::ParseIntError;
use thiserror::Error;

/// Result type for lesson execution.
pub type Result<T> = std::result::Result<T, PrimerError>;

/// Fatal errors raised while running lessons. None of them is recovered.
#[derive(Error, Diagnostic, Debug)]
pub enum PrimerError {
    /// Text that was expected to hold an integer did not.
    #[error("invalid numeric literal `{text}`")]
    #[diagnostic(
        code(primer::invalid_numeric_literal),
        help("only an optional sign followed by decimal digits can be converted to an integer")
    )]
    InvalidNumericLiteral {
        #[source_code]
        text: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
        #[source]
        source: ParseIntError,
    },

    /// A checked arithmetic operation left the range of its type.
    #[error("arithmetic overflow while computing {operation}")]
    #[diagnostic(
        code(primer::arithmetic_overflow),
        help("use smaller values in the configuration file")
    )]
    ArithmeticOverflow { operation: &'static str },

    /// Writing to the console failed.
    #[error("failed to write output: {0}")]
    #[diagnostic(code(primer::output))]
    Output(#[from] std::io::Error),
}

impl PrimerError {
    pub fn overflow(operation: &'static str) -> Self {
        PrimerError::ArithmeticOverflow { operation }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    #[diagnostic(code(primer::config::read))]
    Read(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("failed to parse TOML config: {0}")]
    #[diagnostic(code(primer::config::parse))]
    Parse(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("config validation error: {0}")]
    #[diagnostic(code(primer::config::validation))]
    Validation(String),
}
