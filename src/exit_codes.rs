//! Exit code constants for the prodgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid product file)
//! - 2: Configuration failure
//! - 3: Generation backend failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input or invalid product data.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: unreadable config file or invalid values.
pub const CONFIG_FAILURE: i32 = 2;

/// Generation failure: backend command failed, timed out or returned nothing.
pub const GENERATION_FAILURE: i32 = 3;
