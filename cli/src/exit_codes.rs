//! # Exit Codes
//!
//! Standard exit codes for the Strata CLI.
//!
//! These codes follow common Unix conventions and provide meaningful
//! feedback to scripts and CI pipelines.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error (unspecified)
pub const EXIT_ERROR: i32 = 1;

/// Scan error (root path unreadable or not a directory)
pub const EXIT_SCAN_ERROR: i32 = 2;

/// Invalid input (bad arguments)
pub const EXIT_INVALID_INPUT: i32 = 3;
