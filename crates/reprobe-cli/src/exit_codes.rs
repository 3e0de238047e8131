//! Exit codes are part of the CLI contract. A FAIL or ERROR verdict on a
//! case is a valid analysis outcome, not a tooling error, and never
//! changes the process exit code.

pub const SUCCESS: i32 = 0;
pub const SETUP_ERROR: i32 = 2; // missing/malformed plan, unusable output dir
