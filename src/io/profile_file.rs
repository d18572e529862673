use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use mclp_profiles::LauncherProfile;
use mclp_shared::output::{MCLPOutput, MessageContents, MessageLevel, OutputProcess};

use super::{json_from_file, json_to_file_pretty};

/// Name of the document inside the game directory
pub const PROFILES_FILE_NAME: &str = "launcher_profiles.json";

/// A handle to a launcher profile document on disk
#[derive(Debug)]
pub struct ProfileFile {
	/// Where the document is stored
	path: PathBuf,
	/// The decoded document
	contents: LauncherProfile,
	/// Whether to copy the old file aside before overwriting it
	backup: bool,
}

impl ProfileFile {
	/// Open and decode an existing document. Backups are enabled by default
	pub fn open(path: &Path) -> anyhow::Result<Self> {
		if !path.exists() {
			bail!(
				"Launcher profile document does not exist at {}",
				path.display()
			);
		}
		let contents = json_from_file(path).with_context(|| {
			format!(
				"Failed to read launcher profile document at {}",
				path.display()
			)
		})?;

		Ok(Self {
			path: path.to_owned(),
			contents,
			backup: true,
		})
	}

	/// Write a brand new document. Fails if a file already exists at the path.
	/// The mclp command line only edits existing documents, so this is for programs
	/// that set up a game directory themselves
	pub fn create(
		path: &Path,
		contents: LauncherProfile,
		o: &mut impl MCLPOutput,
	) -> anyhow::Result<Self> {
		if path.exists() {
			bail!(
				"Launcher profile document already exists at {}",
				path.display()
			);
		}
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent).context("Failed to create document directory")?;
		}
		let out = Self {
			path: path.to_owned(),
			contents,
			backup: true,
		};
		out.write(o)?;

		Ok(out)
	}

	/// Get the path to the document in a game directory
	pub fn default_path(minecraft_dir: &Path) -> PathBuf {
		minecraft_dir.join(PROFILES_FILE_NAME)
	}

	/// Get the path the previous contents are copied to before writing
	pub fn backup_path(&self) -> PathBuf {
		let mut name = self.path.as_os_str().to_owned();
		name.push(".bak");
		PathBuf::from(name)
	}

	/// Set whether the previous contents are copied aside on write
	pub fn set_backup(&mut self, backup: bool) {
		self.backup = backup;
	}

	/// Write the current contents back to the document
	pub fn write(&self, o: &mut impl MCLPOutput) -> anyhow::Result<()> {
		let process = OutputProcess::new(o);
		process.0.display(
			MessageContents::StartProcess("Writing launcher profile document".into()),
			MessageLevel::Extra,
		);

		if self.backup && self.path.exists() {
			let backup_path = self.backup_path();
			std::fs::copy(&self.path, &backup_path)
				.context("Failed to back up launcher profile document")?;
			process.0.display(
				MessageContents::Simple(format!(
					"Backed up previous document to {}",
					backup_path.display()
				)),
				MessageLevel::Debug,
			);
		}
		json_to_file_pretty(&self.path, &self.contents)
			.context("Failed to write launcher profile document")?;

		process.0.display(
			MessageContents::Success("Launcher profile document written".into()),
			MessageLevel::Extra,
		);

		Ok(())
	}

	/// Get the path of the document
	pub fn get_path(&self) -> &Path {
		&self.path
	}

	/// Get the decoded document
	pub fn get(&self) -> &LauncherProfile {
		&self.contents
	}

	/// Get the decoded document mutably. Changes are kept until write is called
	pub fn get_mut(&mut self) -> &mut LauncherProfile {
		&mut self.contents
	}
}

#[cfg(test)]
mod tests {
	use mclp_profiles::{AuthenticationDatabaseEntry, LaunchProfile, Version};
	use mclp_shared::output::Collect;

	use super::*;

	const DOCUMENT: &str = r#"{
		"clientToken": "9f3b4c6e-2d1a-4f5b-8c7d-0e1f2a3b4c5d",
		"selectedUser": "c3b1f1b9a8a04a5c9f1e2d3c4b5a6978",
		"selectedProfile": "default",
		"profiles": {
			"default": {"name": "default"},
			"Snapshots": {"name": "Snapshots", "allowedReleaseTypes": ["snapshot"]}
		},
		"authenticationDatabase": {
			"c3b1f1b9a8a04a5c9f1e2d3c4b5a6978": {
				"displayName": "Notch",
				"accessToken": "token",
				"userid": "c3b1f1b9a8a04a5c9f1e2d3c4b5a6978",
				"uuid": "069a79f4-44e9-4726-a5be-fca90e38aaf5",
				"username": "notch@example.com"
			}
		},
		"launcherVersion": {"name": "1.6.89-j", "format": 21, "profilesFormat": 1}
	}"#;

	fn test_dir(name: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("mclp-test-{}-{name}", std::process::id()));
		let _ = std::fs::remove_dir_all(&dir);
		std::fs::create_dir_all(&dir).unwrap();
		dir
	}

	#[test]
	fn test_open_and_write() {
		let dir = test_dir("open_and_write");
		let path = ProfileFile::default_path(&dir);
		std::fs::write(&path, DOCUMENT).unwrap();

		let mut file = ProfileFile::open(&path).unwrap();
		assert_eq!(file.get().profiles.len(), 2);
		file.get_mut().select_profile("Snapshots").unwrap();
		let mut o = Collect::default();
		file.write(&mut o).unwrap();
		let messages: Vec<_> = o.messages.iter().map(|(text, _)| text.as_str()).collect();
		assert_eq!(messages.first(), Some(&"Writing launcher profile document..."));
		assert_eq!(messages.last(), Some(&"Launcher profile document written"));

		let reopened = ProfileFile::open(&path).unwrap();
		assert_eq!(reopened.get().get_selected_profile_name(), "Snapshots");
		assert_eq!(reopened.get(), file.get());

		// The backup holds what was there before the write
		let backup = std::fs::read_to_string(file.backup_path()).unwrap();
		assert_eq!(backup, DOCUMENT);

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_write_keeps_unknown_fields() {
		let dir = test_dir("write_keeps_unknown_fields");
		let path = ProfileFile::default_path(&dir);
		let mut original: serde_json::Value = serde_json::from_str(DOCUMENT).unwrap();
		original["analyticsToken"] = serde_json::json!("3e0a9d8c7b6a");
		original["profiles"]["Snapshots"]["icon"] = serde_json::json!("Grass");
		std::fs::write(&path, original.to_string()).unwrap();

		let mut file = ProfileFile::open(&path).unwrap();
		file.get_mut().select_profile("Snapshots").unwrap();
		file.write(&mut Collect::default()).unwrap();

		let written: serde_json::Value =
			serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(written["analyticsToken"], "3e0a9d8c7b6a");
		assert_eq!(written["profiles"]["Snapshots"]["icon"], "Grass");
		assert_eq!(written["selectedProfile"], "Snapshots");

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_write_without_backup() {
		let dir = test_dir("write_without_backup");
		let path = ProfileFile::default_path(&dir);
		std::fs::write(&path, DOCUMENT).unwrap();

		let mut file = ProfileFile::open(&path).unwrap();
		file.set_backup(false);
		file.write(&mut Collect::default()).unwrap();
		assert!(!file.backup_path().exists());

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_open_missing() {
		let dir = test_dir("open_missing");
		let err = ProfileFile::open(&ProfileFile::default_path(&dir)).unwrap_err();
		assert!(err.to_string().contains("does not exist"));

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_open_malformed() {
		let dir = test_dir("open_malformed");
		let path = ProfileFile::default_path(&dir);
		std::fs::write(&path, r#"{"selectedUser": "a", "selectedProfile": "b"}"#).unwrap();

		let err = ProfileFile::open(&path).unwrap_err();
		assert!(format!("{err:?}").contains("clientToken"));

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_create() {
		let dir = test_dir("create");
		let path = ProfileFile::default_path(&dir.join("game"));
		let user = AuthenticationDatabaseEntry {
			display_name: "Notch".into(),
			access_token: None,
			userid: "c3b1f1b9a8a04a5c9f1e2d3c4b5a6978".into(),
			uuid: "069a79f4-44e9-4726-a5be-fca90e38aaf5".parse().unwrap(),
			username: "notch@example.com".into(),
			unknown: Default::default(),
		};
		let document = LauncherProfile::new(
			Version::known(),
			"default",
			LaunchProfile::new("default"),
			"c3b1f1b9a8a04a5c9f1e2d3c4b5a6978",
			user,
		);
		let file = ProfileFile::create(&path, document, &mut Collect::default()).unwrap();
		assert!(!file.backup_path().exists());

		let reopened = ProfileFile::open(&path).unwrap();
		assert_eq!(reopened.get(), file.get());
		assert!(
			ProfileFile::create(&path, file.get().clone(), &mut Collect::default()).is_err()
		);

		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn test_backup_path() {
		let dir = test_dir("backup_path");
		let path = ProfileFile::default_path(&dir);
		std::fs::write(&path, DOCUMENT).unwrap();
		let file = ProfileFile::open(&path).unwrap();
		assert_eq!(file.backup_path(), dir.join("launcher_profiles.json.bak"));

		std::fs::remove_dir_all(dir).unwrap();
	}
}
