//! Error types for TOON serialization and deserialization.
//!
//! This module provides comprehensive error reporting with contextual information
//! to help diagnose and fix TOON format issues.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Invalid TOON syntax with line/column information
//! - **Type Mismatches**: Attempted to deserialize to incompatible type
//! - **Indentation Errors**: Incorrect nesting/indentation, only raised in strict decode mode
//! - **Count Mismatches**: A declared array length disagrees with the number of rows parsed
//! - **I/O Errors**: File reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_toon::{from_str, Error};
//!
//! let result: Result<serde_toon::Value, Error> = from_str("invalid: [malformed");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during TOON serialization/deserialization.
///
/// Each error variant includes contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Syntax error with detailed context
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// Type mismatch during deserialization
    #[error("Type mismatch at line {line}, column {col}: expected {expected}, found {found}")]
    TypeMismatch {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// Indentation error in nested structures. Only raised when `DecodeOptions::strict` is set;
    /// lenient decoding tolerates tab indents (weighted as 4 columns) and non-multiple indents.
    #[error("Indentation error at line {line}, column {col}:\n{context}\nExpected a multiple of {expected} spaces, found {found} spaces\nHelp: enable lenient decoding to tolerate irregular indentation")]
    IndentationError {
        line: usize,
        col: usize,
        expected: usize,
        found: usize,
        context: String,
    },

    /// An array/table header declared a length that the parsed row count does not match.
    /// Only raised in strict mode.
    #[error("Count mismatch at line {line}: header declared {declared} row(s), found {found}")]
    CountMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Invalid TOON format
    #[error("Invalid TOON format at line {line}, column {col}: {msg}")]
    InvalidFormat {
        line: usize,
        col: usize,
        msg: String,
    },

    /// Unexpected end of input
    #[error(
        "Unexpected end of input at line {line}, column {col}\n{context}\nExpected: {expected}"
    )]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
        context: String,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error with full context and helpful suggestion.
    pub fn syntax_with_context(
        line: usize,
        col: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates a type mismatch error when deserialization fails due to incompatible types.
    pub fn type_mismatch(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an indentation error (strict mode only).
    pub fn indentation_error(
        line: usize,
        col: usize,
        expected: usize,
        found: usize,
        context: &str,
    ) -> Self {
        Error::IndentationError {
            line,
            col,
            expected,
            found,
            context: context.to_string(),
        }
    }

    /// Creates a count-mismatch error (strict mode only).
    pub fn count_mismatch(line: usize, declared: usize, found: usize) -> Self {
        Error::CountMismatch {
            line,
            declared,
            found,
        }
    }

    /// Creates an invalid format error for malformed TOON syntax.
    pub fn invalid_format(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidFormat {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-file error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str, context: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
            context: context.to_string(),
        }
    }

    /// Creates an unsupported type error for types that cannot be serialized to TOON.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
