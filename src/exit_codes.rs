//! Exit code constants for the ccux CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown theme/framework, missing file, interrupt)
//! - 2: Validation failure (generated HTML rejected)
//! - 3: Generator failure (external command failed, timed out, or produced nothing usable)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing files, or a cancelled run.
pub const USER_ERROR: i32 = 1;

/// Validation failure: generated output did not look like a usable page.
pub const VALIDATION_FAILURE: i32 = 2;

/// Generator failure: non-zero exit, timeout, or spawn failure of the LLM CLI.
pub const GENERATOR_FAILURE: i32 = 3;
