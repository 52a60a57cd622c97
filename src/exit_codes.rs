//! Exit code constants for the snag CLI.
//!
//! - 0: Success (including operator cancellation of the picker)
//! - 1: User error (bad args, invalid config, empty tree)
//! - 2: Template failure (load/parse/render)
//! - 3: Scan failure (filesystem walk error)
//! - 4: Picker failure (terminal error other than cancellation)

/// Successful execution. Also used when the operator cancels the picker.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or nothing to pick from.
pub const USER_ERROR: i32 = 1;

/// Template failure: resource unreadable, parse error, or render error.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Scan failure: a filesystem walk error other than per-entry permission denial.
pub const SCAN_FAILURE: i32 = 3;

/// Picker failure: terminal I/O error during interactive selection.
pub const PICKER_FAILURE: i32 = 4;
