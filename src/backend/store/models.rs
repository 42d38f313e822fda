/**
 * Stored Documents
 *
 * The user and post records as persisted. A user carries the ordered list of
 * the posts it authored; each post carries its creator's id. Keeping the two
 * sides consistent is the job of the resolvers, not the store.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status given to newly registered users
pub const DEFAULT_STATUS: &str = "I am new!";

/// User record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Free-form status line
    pub status: String,
    /// Ids of authored posts, in creation order
    pub post_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh id and the default status
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password_hash,
            status: DEFAULT_STATUS.to_string(),
            post_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Post record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Path of the post image as returned by the upload endpoint
    pub image_url: String,
    /// Id of the authoring user
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a new post owned by `creator_id`
    pub fn new(title: String, content: String, image_url: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }
}
