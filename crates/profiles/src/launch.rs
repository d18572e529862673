use std::borrow::Cow;
use std::fmt::Display;

use indexmap::IndexSet;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::version::VersionType;
use crate::UnknownFields;

/// A saved game launch configuration
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LaunchProfile {
	/// Display name of the profile
	#[serde(rename = "name")]
	pub name: String,
	/// The version to launch. Absent when the latest version should always be used
	#[serde(rename = "lastVersionId")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_version_id: Option<String>,
	/// Override for the game directory
	#[serde(rename = "gameDir")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub game_dir: Option<String>,
	/// Override for the Java installation directory
	#[serde(rename = "javaDir")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub java_dir: Option<String>,
	/// Extra JVM arguments, stored as a single string
	#[serde(rename = "javaArgs")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub java_args: Option<String>,
	/// The release channels offered for this profile, as stored.
	/// Use get_allowed_release_types to apply the default
	#[serde(rename = "allowedReleaseTypes")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allowed_release_types: Option<IndexSet<VersionType>>,
	/// What the launcher window does when the game starts, as stored.
	/// Use get_launcher_visibility to apply the default
	#[serde(rename = "launcherVisibilityOnGameClose")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub launcher_visibility_on_game_close: Option<LauncherVisibility>,
	/// Fields not described here, such as the icon or timestamps
	#[serde(flatten)]
	pub unknown: UnknownFields,
}

impl LaunchProfile {
	/// Create a profile with only a name, using defaults for everything else
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			last_version_id: None,
			game_dir: None,
			java_dir: None,
			java_args: None,
			allowed_release_types: None,
			launcher_visibility_on_game_close: None,
			unknown: UnknownFields::new(),
		}
	}

	/// Get the allowed release channels. Profiles that do not store any only allow releases
	pub fn get_allowed_release_types(&self) -> Cow<'_, IndexSet<VersionType>> {
		match &self.allowed_release_types {
			Some(types) => Cow::Borrowed(types),
			None => Cow::Owned(IndexSet::from([VersionType::Release])),
		}
	}

	/// Checks if a release channel is allowed for this profile
	pub fn allows_release_type(&self, ty: VersionType) -> bool {
		match &self.allowed_release_types {
			Some(types) => types.contains(&ty),
			None => ty == VersionType::Release,
		}
	}

	/// Get the launcher visibility, defaulting to closing when the game starts
	pub fn get_launcher_visibility(&self) -> LauncherVisibility {
		self.launcher_visibility_on_game_close.unwrap_or_default()
	}

	/// Checks if this profile follows the latest version instead of a fixed one
	pub fn uses_latest_version(&self) -> bool {
		self.last_version_id.is_none()
	}
}

/// What happens to the launcher window while the game is running
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum LauncherVisibility {
	/// Close the launcher once the game has started
	#[default]
	#[serde(rename = "close launcher when game starts")]
	CloseOnGameStart,
	/// Hide the launcher and bring it back when the game exits
	#[serde(rename = "hide launcher and re-open when game closes")]
	HideUntilGameClose,
	/// Leave the launcher open
	#[serde(rename = "keep the launcher open")]
	KeepOpen,
}

impl LauncherVisibility {
	/// Every visibility option
	pub const ALL: [Self; 3] = [Self::CloseOnGameStart, Self::HideUntilGameClose, Self::KeepOpen];

	/// Parse a visibility from the phrase it is stored as
	pub fn from_str(string: &str) -> Option<Self> {
		match string {
			"close launcher when game starts" => Some(Self::CloseOnGameStart),
			"hide launcher and re-open when game closes" => Some(Self::HideUntilGameClose),
			"keep the launcher open" => Some(Self::KeepOpen),
			_ => None,
		}
	}

	/// Get the phrase this visibility is stored as
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::CloseOnGameStart => "close launcher when game starts",
			Self::HideUntilGameClose => "hide launcher and re-open when game closes",
			Self::KeepOpen => "keep the launcher open",
		}
	}
}

impl Display for LauncherVisibility {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_when_absent() {
		let profile: LaunchProfile = serde_json::from_str(r#"{"name": "Vanilla"}"#).unwrap();
		assert_eq!(profile.allowed_release_types, None);
		assert_eq!(
			profile.get_allowed_release_types().into_owned(),
			IndexSet::from([VersionType::Release])
		);
		assert_eq!(profile.launcher_visibility_on_game_close, None);
		assert_eq!(
			profile.get_launcher_visibility(),
			LauncherVisibility::CloseOnGameStart
		);
		assert!(profile.uses_latest_version());
	}

	#[test]
	fn test_defaults_are_not_written() {
		let profile: LaunchProfile = serde_json::from_str(r#"{"name": "Vanilla"}"#).unwrap();
		let _ = profile.get_allowed_release_types();
		let _ = profile.get_launcher_visibility();
		assert_eq!(
			serde_json::to_value(&profile).unwrap(),
			serde_json::json!({"name": "Vanilla"})
		);
	}

	#[test]
	fn test_stored_release_types() {
		let profile: LaunchProfile = serde_json::from_str(
			r#"{"name": "Snapshots", "allowedReleaseTypes": ["snapshot", "release"]}"#,
		)
		.unwrap();
		let types = profile.get_allowed_release_types();
		assert_eq!(types.len(), 2);
		assert!(types.contains(&VersionType::Snapshot));
		assert!(profile.allows_release_type(VersionType::Release));
		assert!(!profile.allows_release_type(VersionType::OldAlpha));
	}

	#[test]
	fn test_empty_release_types_are_not_defaulted() {
		let profile: LaunchProfile =
			serde_json::from_str(r#"{"name": "None", "allowedReleaseTypes": []}"#).unwrap();
		assert!(profile.get_allowed_release_types().is_empty());
		assert!(!profile.allows_release_type(VersionType::Release));
	}

	#[test]
	fn test_absent_release_types_allow_only_release() {
		let profile = LaunchProfile::new("Vanilla");
		assert!(profile.allows_release_type(VersionType::Release));
		assert!(!profile.allows_release_type(VersionType::Snapshot));
	}

	#[test]
	fn test_visibility_phrases() {
		for visibility in LauncherVisibility::ALL {
			let serialized = serde_json::to_string(&visibility).unwrap();
			assert_eq!(serialized, format!("\"{}\"", visibility.as_str()));
			let deserialized: LauncherVisibility = serde_json::from_str(&serialized).unwrap();
			assert_eq!(deserialized, visibility);
			assert_eq!(LauncherVisibility::from_str(visibility.as_str()), Some(visibility));
		}
	}

	#[test]
	fn test_hide_until_game_close_phrase() {
		assert_eq!(
			serde_json::to_string(&LauncherVisibility::HideUntilGameClose).unwrap(),
			r#""hide launcher and re-open when game closes""#
		);
		assert_eq!(
			serde_json::from_str::<LauncherVisibility>(
				r#""hide launcher and re-open when game closes""#
			)
			.unwrap(),
			LauncherVisibility::HideUntilGameClose
		);
	}

	#[test]
	fn test_unknown_visibility() {
		assert!(serde_json::from_str::<LauncherVisibility>(r#""HIDE_UNTIL_GAME_CLOSE""#).is_err());
		assert!(serde_json::from_str::<LauncherVisibility>(r#""KeepOpen""#).is_err());
		assert_eq!(LauncherVisibility::from_str("keep launcher open"), None);

		let profile = serde_json::from_str::<LaunchProfile>(
			r#"{"name": "Bad", "launcherVisibilityOnGameClose": "minimize"}"#,
		);
		assert!(profile.is_err());
	}

	#[test]
	fn test_overrides_pass_through() {
		let text = r#"{
			"name": "Modded",
			"lastVersionId": "1.12.2-forge",
			"gameDir": "/home/me/modded",
			"javaDir": "/usr/lib/jvm/java-8/bin/java",
			"javaArgs": "-Xmx4G -XX:+UseG1GC",
			"launcherVisibilityOnGameClose": "keep the launcher open"
		}"#;
		let profile: LaunchProfile = serde_json::from_str(text).unwrap();
		assert_eq!(profile.last_version_id.as_deref(), Some("1.12.2-forge"));
		assert_eq!(profile.game_dir.as_deref(), Some("/home/me/modded"));
		assert_eq!(
			profile.java_dir.as_deref(),
			Some("/usr/lib/jvm/java-8/bin/java")
		);
		assert_eq!(profile.java_args.as_deref(), Some("-Xmx4G -XX:+UseG1GC"));
		assert_eq!(profile.get_launcher_visibility(), LauncherVisibility::KeepOpen);
		assert!(!profile.uses_latest_version());
	}
}
