use std::fmt::Display;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::UnknownFields;

/// Name of the launcher release this model was written against
pub const KNOWN_LAUNCHER_NAME: &str = "1.6.89-j";
/// Root document format this model was written against
pub const KNOWN_FORMAT: u32 = 21;
/// Profile format this model was written against
pub const KNOWN_PROFILES_FORMAT: u32 = 1;

/// The launcher version and formats a document was written with.
/// This is set once when the document is created and only read afterwards
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Version {
	/// Human-readable launcher version
	#[serde(rename = "name")]
	name: String,
	/// Format of the root document
	#[serde(rename = "format")]
	format: u32,
	/// Format of the profile entries
	#[serde(rename = "profilesFormat")]
	profiles_format: u32,
	/// Fields not described here
	#[serde(flatten)]
	unknown: UnknownFields,
}

impl Version {
	/// Create a new version marker
	pub fn new(name: impl Into<String>, format: u32, profiles_format: u32) -> Self {
		Self {
			name: name.into(),
			format,
			profiles_format,
			unknown: UnknownFields::new(),
		}
	}

	/// The version marker this model was written against
	pub fn known() -> Self {
		Self::new(KNOWN_LAUNCHER_NAME, KNOWN_FORMAT, KNOWN_PROFILES_FORMAT)
	}

	/// Get the launcher version name
	pub fn get_name(&self) -> &str {
		&self.name
	}

	/// Get the root document format
	pub fn get_format(&self) -> u32 {
		self.format
	}

	/// Get the profile format
	pub fn get_profiles_format(&self) -> u32 {
		self.profiles_format
	}

	/// Checks if both formats match the ones this model understands.
	/// The launcher name is not considered
	pub fn is_known_format(&self) -> bool {
		self.format == KNOWN_FORMAT && self.profiles_format == KNOWN_PROFILES_FORMAT
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} (format {}, profiles format {})",
			self.name, self.format, self.profiles_format
		)
	}
}

/// Release channel of a game version
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum VersionType {
	/// A release version
	Release,
	/// A snapshot / development version
	Snapshot,
	/// An old beta version
	OldBeta,
	/// An old alpha version
	OldAlpha,
}

impl VersionType {
	/// Every release channel
	pub const ALL: [Self; 4] = [Self::Release, Self::Snapshot, Self::OldBeta, Self::OldAlpha];

	/// Parse a release channel from its serialized name
	pub fn from_str(string: &str) -> Option<Self> {
		match string {
			"release" => Some(Self::Release),
			"snapshot" => Some(Self::Snapshot),
			"old_beta" => Some(Self::OldBeta),
			"old_alpha" => Some(Self::OldAlpha),
			_ => None,
		}
	}

	/// Get the serialized name of this release channel
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Release => "release",
			Self::Snapshot => "snapshot",
			Self::OldBeta => "old_beta",
			Self::OldAlpha => "old_alpha",
		}
	}
}

impl Display for VersionType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
