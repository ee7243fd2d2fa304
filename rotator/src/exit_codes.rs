//! Stable exit codes for the `rotator` binary.

use crate::error::{ErrorKind, RotateError};

/// Rotation succeeded.
pub const OK: i32 = 0;
/// Usage, I/O or document parse failure.
pub const INVALID: i32 = 1;
/// An argument had the wrong type (non-array sequence, non-integer shift).
pub const INVALID_ARGUMENT_TYPE: i32 = 2;
/// The shift was an integer but negative.
pub const INVALID_ARGUMENT_VALUE: i32 = 3;

/// Map a failure to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RotateError>().map(RotateError::kind) {
        Some(ErrorKind::InvalidArgumentType) => INVALID_ARGUMENT_TYPE,
        Some(ErrorKind::InvalidArgumentValue) => INVALID_ARGUMENT_VALUE,
        None => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn rotate_errors_map_by_kind() {
        let err = anyhow::Error::new(RotateError::negative_shift("-1"));
        assert_eq!(for_error(&err), INVALID_ARGUMENT_VALUE);
    }

    #[test]
    fn context_does_not_hide_kind() {
        let result: Result<(), RotateError> =
            Err(RotateError::not_an_integer_shift("boolean"));
        let err = result.context("rotate").expect_err("error");
        assert_eq!(for_error(&err), INVALID_ARGUMENT_TYPE);
    }

    #[test]
    fn other_errors_are_invalid() {
        assert_eq!(for_error(&anyhow::anyhow!("read stdin")), INVALID);
    }
}
