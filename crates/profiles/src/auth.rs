#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::UnknownFields;

/// A stored account in the authentication database
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AuthenticationDatabaseEntry {
	/// Human-readable name of the account
	#[serde(rename = "displayName")]
	pub display_name: String,
	/// Access token of the account. Absent when the account is logged out or the token expired
	#[serde(rename = "accessToken")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	/// Opaque account identifier. This is not the same as the UUID
	#[serde(rename = "userid")]
	pub userid: String,
	/// Permanent UUID of the account's game profile
	#[serde(rename = "uuid")]
	pub uuid: Uuid,
	/// Login handle of the account at the time it was stored
	#[serde(rename = "username")]
	pub username: String,
	/// Fields not described here
	#[serde(flatten)]
	pub unknown: UnknownFields,
}

impl AuthenticationDatabaseEntry {
	/// Checks if this entry still holds an access token
	pub fn is_logged_in(&self) -> bool {
		self.access_token.is_some()
	}

	/// Logs out this entry by removing its access token, but keeps the identity
	pub fn logout(&mut self) {
		self.access_token = None;
	}
}
