//! API Wire Types
//!
//! Request inputs and response shapes exchanged over the operation endpoint.
//! Identifiers are always rendered as strings under `_id` and timestamps as
//! ISO-8601 UTC strings with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel `imageUrl` value meaning "keep the current image"
pub const UNCHANGED_IMAGE: &str = "undefined";

/// Registration input for `createUser`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserInput {
    /// Email address, must be unique
    pub email: String,
    /// Display name
    pub name: String,
    /// Plain-text password, hashed before storage
    pub password: String,
}

/// Post input for `createPost` and `updatePost`
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub content: String,
    /// Image path as returned by the upload endpoint
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PostInput {
    /// The image reference to store on update, if any
    ///
    /// Returns `None` when the client did not supply one or supplied the
    /// [`UNCHANGED_IMAGE`] sentinel.
    pub fn replacement_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| *url != UNCHANGED_IMAGE)
    }
}

/// Result of a successful `login`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Signed bearer token, valid for one hour
    pub token: String,
    pub user_id: String,
}

/// User record as exposed to clients (never includes the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub status: String,
    /// Ids of the posts this user authored, oldest first
    pub posts: Vec<String>,
}

/// Creator reference embedded in a post
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatorView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Post as exposed to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: CreatorView,
    pub created_at: String,
    pub updated_at: String,
}

/// One page of posts plus the total number of posts
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<PostView>,
    pub total_posts: u64,
}

/// Render a timestamp the way clients expect (`2024-01-01T00:00:00.000Z`)
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
