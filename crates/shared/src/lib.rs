#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Shared output and utilities for the mclp crates

/// Output and logging of messages to the user
pub mod output;
/// Small general utilities
pub mod util;
