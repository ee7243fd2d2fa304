//! Left rotation of integer sequences.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: the pure rotation itself. No I/O, no logging.
//! - **[`input`]**: decoding of untyped arguments (command-line text, JSON or
//!   TOML values) into the typed inputs `core` accepts.
//!
//! [`exit_codes`] and [`logging`] are shared by the `rotator` binary and the
//! scenario harness.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::rotation::{effective_shift, rotate_left};
pub use crate::error::{Argument, ErrorKind, RotateError};
