use std::path::{Path, PathBuf};

use anyhow::Context;
use mclp_shared::output::{MCLPOutput, MessageContents, MessageLevel};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::io::json_from_file;
use crate::io::paths::Paths;
use crate::io::profile_file::ProfileFile;

/// The configuration that mclp will use, with defaults filled in
#[derive(Debug, Clone)]
pub struct Config {
	/// The game directory
	pub minecraft_dir: PathBuf,
	/// The launcher profile document to operate on
	pub profiles_file: PathBuf,
	/// Whether to back up the document before writing it
	pub backup: bool,
}

/// Deserialization struct for the mclp config file
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct ConfigDeser {
	/// Override for the game directory
	#[serde(skip_serializing_if = "Option::is_none")]
	pub minecraft_dir: Option<PathBuf>,
	/// Override for the full path to the launcher profile document
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profiles_file: Option<PathBuf>,
	/// Whether to back up the document before writing it
	pub backup: bool,
}

impl Default for ConfigDeser {
	fn default() -> Self {
		Self {
			minecraft_dir: None,
			profiles_file: None,
			backup: true,
		}
	}
}

impl Config {
	/// Get the config path
	pub fn get_path(paths: &Paths) -> PathBuf {
		paths.config.join("mclp.json")
	}

	/// Open the config from a file. A missing file gives the default config
	pub fn open(path: &Path) -> anyhow::Result<ConfigDeser> {
		if path.exists() {
			json_from_file(path).context("Failed to open config")
		} else {
			Ok(ConfigDeser::default())
		}
	}

	/// Load the config from a file
	pub fn load(
		path: &Path,
		paths: &Paths,
		show_warnings: bool,
		o: &mut impl MCLPOutput,
	) -> anyhow::Result<Self> {
		let config = Self::open(path)?;
		Ok(Self::load_from_deser(config, &paths.minecraft, show_warnings, o))
	}

	/// Create the Config struct from deserialized config
	fn load_from_deser(
		config: ConfigDeser,
		default_minecraft_dir: &Path,
		show_warnings: bool,
		o: &mut impl MCLPOutput,
	) -> Self {
		let minecraft_dir = config
			.minecraft_dir
			.unwrap_or_else(|| default_minecraft_dir.to_owned());
		if show_warnings && !minecraft_dir.exists() {
			o.display(
				MessageContents::Warning(format!(
					"Game directory {} does not exist",
					minecraft_dir.display()
				)),
				MessageLevel::Important,
			);
		}

		let profiles_file = config
			.profiles_file
			.unwrap_or_else(|| ProfileFile::default_path(&minecraft_dir));
		o.display(
			MessageContents::Property(
				"Using launcher profile document".into(),
				Box::new(MessageContents::Simple(
					profiles_file.to_string_lossy().to_string(),
				)),
			),
			MessageLevel::Debug,
		);

		Self {
			minecraft_dir,
			profiles_file,
			backup: config.backup,
		}
	}

	/// Open the configured launcher profile document
	pub fn open_profiles(&self) -> anyhow::Result<ProfileFile> {
		let mut file = ProfileFile::open(&self.profiles_file)?;
		file.set_backup(self.backup);
		Ok(file)
	}
}

#[cfg(test)]
mod tests {
	use mclp_shared::output::Collect;

	use super::*;

	#[test]
	fn test_default_config() {
		let config: ConfigDeser = serde_json::from_str("{}").unwrap();
		assert!(config.backup);
		assert!(config.minecraft_dir.is_none());

		let mut o = Collect::default();
		let dir = std::env::temp_dir();
		let config = Config::load_from_deser(config, &dir, true, &mut o);
		assert_eq!(config.minecraft_dir, dir);
		assert_eq!(config.profiles_file, dir.join("launcher_profiles.json"));
		assert!(config.backup);
	}

	#[test]
	fn test_overrides() {
		let config: ConfigDeser = serde_json::from_str(
			r#"{"minecraft_dir": "/games/mc", "profiles_file": "/games/profiles.json", "backup": false}"#,
		)
		.unwrap();
		let config = Config::load_from_deser(config, Path::new("/unused"), false, &mut Collect::default());
		assert_eq!(config.minecraft_dir, PathBuf::from("/games/mc"));
		assert_eq!(config.profiles_file, PathBuf::from("/games/profiles.json"));
		assert!(!config.backup);
	}

	#[test]
	fn test_missing_game_dir_warning() {
		let config = ConfigDeser {
			minecraft_dir: Some(PathBuf::from("/this/directory/should/not/exist/mclp")),
			..Default::default()
		};
		let mut o = Collect::default();
		Config::load_from_deser(config.clone(), Path::new("/unused"), true, &mut o);
		assert!(o.messages.iter().any(|(text, _)| text.starts_with("Warning:")));

		let mut o = Collect::default();
		Config::load_from_deser(config, Path::new("/unused"), false, &mut o);
		assert!(!o.messages.iter().any(|(text, _)| text.starts_with("Warning:")));
	}

	#[test]
	fn test_missing_config_file() {
		let path = std::env::temp_dir().join("mclp-test-config-that-does-not-exist.json");
		let config = Config::open(&path).unwrap();
		assert!(config.backup);
	}
}
