//! Stable exit codes for the harness.

/// Every scenario passed (or `list` succeeded).
pub const OK: i32 = 0;
/// Config or suite files could not be loaded.
pub const INVALID: i32 = 1;
/// At least one scenario failed.
pub const FAILED: i32 = 2;
