//! Store Module
//!
//! Persistence port for users and posts plus its adapters.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - BlogStore trait and StoreError
//! ├── models.rs    - User and Post records
//! ├── postgres.rs  - PostgreSQL adapter (sqlx)
//! └── memory.rs    - In-memory adapter
//! ```
//!
//! # Consistency
//!
//! Every method is a single-document operation. Multi-document mutations
//! (post insert followed by the owner's list update, post delete followed by
//! the owner's list update) are sequenced by the resolvers without a
//! transaction, so a failure between steps leaves the two sides out of sync.
//! Concurrent writes to the same document are last-write-wins.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// User and post records
pub mod models;

/// PostgreSQL adapter
pub mod postgres;

/// In-memory adapter
pub mod memory;

pub use memory::MemoryStore;
pub use models::{Post, User};
pub use postgres::PgStore;

/// Errors surfaced by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated
    #[error("conflict: {0}")]
    Conflict(String),

    /// The record to update does not exist
    #[error("record not found: {0}")]
    Missing(Uuid),

    /// Database connectivity or query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence port for users and posts
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user; fails with [`StoreError::Conflict`] on a taken email
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    /// Overwrite the mutable fields of an existing user
    async fn save_user(&self, user: &User) -> Result<(), StoreError>;

    async fn insert_post(&self, post: &Post) -> Result<(), StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Overwrite the mutable fields of an existing post
    async fn save_post(&self, post: &Post) -> Result<(), StoreError>;

    /// Remove a post; returns whether it existed
    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn count_posts(&self) -> Result<u64, StoreError>;

    /// Posts ordered newest first, skipping `offset` and returning at most `limit`
    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StoreError>;
}
