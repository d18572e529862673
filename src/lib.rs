#![warn(missing_docs)]
#![deny(unsafe_code)]

//! mclp reads, checks and edits the launcher_profiles.json document of the vanilla
//! Minecraft launcher. The document model itself lives in the `mclp_profiles` crate;
//! this crate finds the file, loads tool configuration and handles reading and
//! writing the document.

pub use mclp_profiles as profiles;
pub use mclp_shared as shared;

/// Configuration of mclp itself
pub mod config;
/// File input / output and system paths
pub mod io;

/// The version of the mclp library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
