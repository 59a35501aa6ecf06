//! Error types for the strict parsing paths.
//!
//! [`crate::parse`] never fails: anything it cannot interpret comes back as
//! text. The errors in this module are only produced by the opt-in strict
//! functions in [`crate::scalar`] and by the `TryFrom<Value>` conversions.
//!
//! ## Error Categories
//!
//! - **Scalar errors**: text that does not match a timestamp, duration,
//!   number or boolean form
//! - **Type Mismatches**: extracting a Rust type from a [`crate::Value`] of
//!   another kind
//!
//! ## Examples
//!
//! ```rust
//! use reprlit::scalar::parse_duration;
//!
//! let err = parse_duration("45 minutes").unwrap_err();
//! assert!(err.to_string().contains("45 minutes"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every error a strict scalar parse or a value conversion can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text is not an ISO-8601 date or date/time
    #[error("invalid timestamp {text:?}: {msg}")]
    InvalidTimestamp { text: String, msg: String },

    /// Text does not match `[<days> days, ]H:MM:SS`
    #[error("invalid duration {text:?}: {msg}")]
    InvalidDuration { text: String, msg: String },

    /// Text is not an integer, float or complex literal
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// Text is neither `True` nor `False`
    #[error("invalid boolean {0:?}: expected True or False")]
    InvalidBool(String),

    /// Value has a different kind than the one requested
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a timestamp error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::Error;
    ///
    /// let err = Error::invalid_timestamp("2018-13-01", "month out of range");
    /// assert!(err.to_string().contains("month out of range"));
    /// ```
    pub fn invalid_timestamp(text: &str, msg: &str) -> Self {
        Error::InvalidTimestamp {
            text: text.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a duration error.
    pub fn invalid_duration(text: &str, msg: &str) -> Self {
        Error::InvalidDuration {
            text: text.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn invalid_number(text: &str) -> Self {
        Error::InvalidNumber(text.to_string())
    }

    pub fn invalid_bool(text: &str) -> Self {
        Error::InvalidBool(text.to_string())
    }

    /// Creates a type mismatch error for a failed value extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reprlit::Error;
    ///
    /// let err = Error::type_mismatch("integer", "text");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
