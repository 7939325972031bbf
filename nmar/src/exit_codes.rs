//! Stable exit codes for nmar CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config or snapshot, or an I/O error.
pub const INVALID: i32 = 1;
