#![warn(missing_docs)]
#![deny(unsafe_code)]

//! This crate contains serde structs for the launcher_profiles.json document that the
//! vanilla Minecraft launcher keeps in the game directory. It does not read or write the
//! file itself; it only describes the document and the defaults the launcher applies
//! when reading it.

/// Stored accounts
pub mod auth;
/// Saved launch configurations
pub mod launch;
/// Launcher version marker and release channels
pub mod version;

use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use auth::AuthenticationDatabaseEntry;
pub use launch::{LaunchProfile, LauncherVisibility};
pub use version::{Version, VersionType};

/// Fields of a record that this model does not describe. They are kept as read so that
/// writing a document back does not lose anything the launcher stored
pub type UnknownFields = IndexMap<String, serde_json::Value>;

/// The root of a launcher profile document
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LauncherProfile {
	/// Identifies this launcher installation to the authentication servers
	#[serde(rename = "clientToken")]
	client_token: Uuid,
	/// Key of the active account in the authentication database
	#[serde(rename = "selectedUser")]
	selected_user: String,
	/// Key of the active launch profile
	#[serde(rename = "selectedProfile")]
	selected_profile: String,
	/// Launch profiles, keyed by profile name
	#[serde(rename = "profiles")]
	#[serde(default)]
	pub profiles: IndexMap<String, LaunchProfile>,
	/// Stored accounts, keyed by an opaque account key
	#[serde(rename = "authenticationDatabase")]
	#[serde(default)]
	pub authentication_database: IndexMap<String, AuthenticationDatabaseEntry>,
	/// The launcher version that wrote this document
	#[serde(rename = "launcherVersion")]
	launcher_version: Version,
	/// Top-level fields not described here, such as launcher settings
	#[serde(flatten)]
	pub unknown: UnknownFields,
}

/// A selection or removal that refers to a key that is missing or in use
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
	/// No profile with this name exists
	#[error("profile '{0}' does not exist")]
	MissingProfile(String),
	/// No account with this key exists
	#[error("user '{0}' does not exist in the authentication database")]
	MissingUser(String),
	/// The key is currently selected and cannot be removed
	#[error("'{0}' is currently selected")]
	Selected(String),
}

impl LauncherProfile {
	/// Create a new document with a single profile and account, both selected.
	/// A fresh client token is generated. The mclp command line never creates documents;
	/// this is for programs that set up a game directory themselves
	pub fn new(
		launcher_version: Version,
		profile_name: impl Into<String>,
		profile: LaunchProfile,
		user_key: impl Into<String>,
		user: AuthenticationDatabaseEntry,
	) -> Self {
		let profile_name = profile_name.into();
		let user_key = user_key.into();
		let mut profiles = IndexMap::new();
		profiles.insert(profile_name.clone(), profile);
		let mut authentication_database = IndexMap::new();
		authentication_database.insert(user_key.clone(), user);

		Self {
			client_token: Uuid::new_v4(),
			selected_user: user_key,
			selected_profile: profile_name,
			profiles,
			authentication_database,
			launcher_version,
			unknown: UnknownFields::new(),
		}
	}

	/// Get the client token of this installation
	pub fn get_client_token(&self) -> &Uuid {
		&self.client_token
	}

	/// Get the launcher version that wrote this document
	pub fn get_launcher_version(&self) -> &Version {
		&self.launcher_version
	}

	/// Get the key of the selected account, whether or not it exists
	pub fn get_selected_user_key(&self) -> &str {
		&self.selected_user
	}

	/// Get the name of the selected profile, whether or not it exists
	pub fn get_selected_profile_name(&self) -> &str {
		&self.selected_profile
	}

	/// Gets the selected profile, if it exists
	pub fn get_selected_profile(&self) -> Option<&LaunchProfile> {
		self.profiles.get(&self.selected_profile)
	}

	/// Gets the selected profile mutably, if it exists
	pub fn get_selected_profile_mut(&mut self) -> Option<&mut LaunchProfile> {
		self.profiles.get_mut(&self.selected_profile)
	}

	/// Gets the selected account, if it exists
	pub fn get_selected_user(&self) -> Option<&AuthenticationDatabaseEntry> {
		self.authentication_database.get(&self.selected_user)
	}

	/// Gets the selected account mutably, if it exists
	pub fn get_selected_user_mut(&mut self) -> Option<&mut AuthenticationDatabaseEntry> {
		self.authentication_database.get_mut(&self.selected_user)
	}

	/// Gets a profile by name
	pub fn get_profile(&self, name: &str) -> Option<&LaunchProfile> {
		self.profiles.get(name)
	}

	/// Gets a profile mutably by name
	pub fn get_profile_mut(&mut self, name: &str) -> Option<&mut LaunchProfile> {
		self.profiles.get_mut(name)
	}

	/// Gets an account by key
	pub fn get_user(&self, key: &str) -> Option<&AuthenticationDatabaseEntry> {
		self.authentication_database.get(key)
	}

	/// Gets an account mutably by key
	pub fn get_user_mut(&mut self, key: &str) -> Option<&mut AuthenticationDatabaseEntry> {
		self.authentication_database.get_mut(key)
	}

	/// Checks that both selections point to existing entries.
	/// The profile is checked first
	pub fn check_references(&self) -> Result<(), ReferenceError> {
		if !self.profiles.contains_key(&self.selected_profile) {
			return Err(ReferenceError::MissingProfile(self.selected_profile.clone()));
		}
		if !self.authentication_database.contains_key(&self.selected_user) {
			return Err(ReferenceError::MissingUser(self.selected_user.clone()));
		}

		Ok(())
	}

	/// Select a different profile. Fails without changing anything if it does not exist
	pub fn select_profile(&mut self, name: &str) -> Result<(), ReferenceError> {
		if !self.profiles.contains_key(name) {
			return Err(ReferenceError::MissingProfile(name.to_string()));
		}
		self.selected_profile = name.to_string();

		Ok(())
	}

	/// Select a different account. Fails without changing anything if it does not exist
	pub fn select_user(&mut self, key: &str) -> Result<(), ReferenceError> {
		if !self.authentication_database.contains_key(key) {
			return Err(ReferenceError::MissingUser(key.to_string()));
		}
		self.selected_user = key.to_string();

		Ok(())
	}

	/// Removes a profile and returns it. The selected profile cannot be removed
	pub fn remove_profile(&mut self, name: &str) -> Result<LaunchProfile, ReferenceError> {
		if self.selected_profile == name {
			return Err(ReferenceError::Selected(name.to_string()));
		}
		self.profiles
			.shift_remove(name)
			.ok_or_else(|| ReferenceError::MissingProfile(name.to_string()))
	}

	/// Removes an account and returns it. The selected account cannot be removed
	pub fn remove_user(&mut self, key: &str) -> Result<AuthenticationDatabaseEntry, ReferenceError> {
		if self.selected_user == key {
			return Err(ReferenceError::Selected(key.to_string()));
		}
		self.authentication_database
			.shift_remove(key)
			.ok_or_else(|| ReferenceError::MissingUser(key.to_string()))
	}

	/// Logs out an account by clearing its access token
	pub fn logout_user(&mut self, key: &str) -> Result<(), ReferenceError> {
		let user = self
			.authentication_database
			.get_mut(key)
			.ok_or_else(|| ReferenceError::MissingUser(key.to_string()))?;
		user.logout();

		Ok(())
	}
}
