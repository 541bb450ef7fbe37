//! Support code for the `labyrinth` command-line tool.
//!
//! This is a library only so that the parts of the tool which do not depend on the
//! command-line options can be tested separately.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

pub mod logging;
