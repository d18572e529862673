use std::path::PathBuf;

use anyhow::anyhow;
use directories::{BaseDirs, ProjectDirs};

/// Store for all of the paths that are used throughout the application
#[derive(Debug, Clone)]
pub struct Paths {
	/// System-wide directories
	pub base: BaseDirs,
	/// Project-specific directories
	pub project: ProjectDirs,
	/// The default game directory for this platform
	pub minecraft: PathBuf,
	/// Holds the mclp config file
	pub config: PathBuf,
	/// Holds data
	pub data: PathBuf,
	/// Holds log files
	pub logs: PathBuf,
}

impl Paths {
	/// Create a new Paths object. This will create the mclp directories
	/// if they do not already exist. The game directory is never created
	pub fn new() -> anyhow::Result<Paths> {
		let base = BaseDirs::new().ok_or(anyhow!("Failed to create base directories"))?;
		let project = ProjectDirs::from("", "mclp", "mclp")
			.ok_or(anyhow!("Failed to create project directories"))?;

		let minecraft = default_minecraft_dir(&base);
		let config = project.config_dir().to_owned();
		let data = project.data_dir().to_owned();
		let logs = data.join("logs");

		std::fs::create_dir_all(&config)?;
		std::fs::create_dir_all(&data)?;
		std::fs::create_dir_all(&logs)?;

		Ok(Paths {
			base,
			project,
			minecraft,
			config,
			data,
			logs,
		})
	}
}

/// Get the directory the vanilla launcher uses by default on this platform
pub fn default_minecraft_dir(base: &BaseDirs) -> PathBuf {
	if cfg!(target_os = "windows") {
		// %APPDATA%
		base.data_dir().join(".minecraft")
	} else if cfg!(target_os = "macos") {
		// ~/Library/Application Support
		base.data_dir().join("minecraft")
	} else {
		base.home_dir().join(".minecraft")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_minecraft_dir() {
		let Some(base) = BaseDirs::new() else {
			return;
		};
		let dir = default_minecraft_dir(&base);
		let name = dir.file_name().unwrap().to_string_lossy().to_string();
		if cfg!(target_os = "macos") {
			assert_eq!(name, "minecraft");
		} else {
			assert_eq!(name, ".minecraft");
		}
	}
}
