//! Error model for rotation requests.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which argument of a rotation request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Sequence,
    Shift,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Sequence => f.write_str("sequence"),
            Argument::Shift => f.write_str("shift"),
        }
    }
}

/// Coarse classification of a [`RotateError`].
///
/// Serialized in snake case so scenario files can name the kind they expect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgumentType,
    InvalidArgumentValue,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgumentType => f.write_str("InvalidArgumentType"),
            ErrorKind::InvalidArgumentValue => f.write_str("InvalidArgumentValue"),
        }
    }
}

/// A rejected rotation request. No partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotateError {
    /// The argument is not of the accepted shape (not an array, not a true integer).
    #[error("{argument} must be {expected}, got {found}")]
    InvalidArgumentType {
        argument: Argument,
        expected: &'static str,
        found: String,
    },
    /// The argument has the right shape but its value is out of bounds
    /// (a negative shift, a sequence element wider than 64 bits).
    #[error("{argument} must be {expected}, got {found}")]
    InvalidArgumentValue {
        argument: Argument,
        expected: &'static str,
        found: String,
    },
}

impl RotateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotateError::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            RotateError::InvalidArgumentValue { .. } => ErrorKind::InvalidArgumentValue,
        }
    }

    pub(crate) fn not_an_integer_shift(found: impl Into<String>) -> Self {
        RotateError::InvalidArgumentType {
            argument: Argument::Shift,
            expected: "an integer",
            found: found.into(),
        }
    }

    pub(crate) fn negative_shift(found: impl Into<String>) -> Self {
        RotateError::InvalidArgumentValue {
            argument: Argument::Shift,
            expected: "non-negative",
            found: found.into(),
        }
    }

    pub(crate) fn element_out_of_range(found: impl Into<String>) -> Self {
        RotateError::InvalidArgumentValue {
            argument: Argument::Sequence,
            expected: "made of 64-bit integers",
            found: found.into(),
        }
    }

    pub(crate) fn not_a_sequence(found: impl Into<String>) -> Self {
        RotateError::InvalidArgumentType {
            argument: Argument::Sequence,
            expected: "an array of integers",
            found: found.into(),
        }
    }
}
