/**
 * In-Memory Store
 *
 * Process-local adapter used when no database is configured and in tests.
 * Posts keep insertion order so that listing is stable when two posts share
 * a creation timestamp.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Post, User};
use super::{BlogStore, StoreError};

#[derive(Debug, Default)]
struct Documents {
    users: HashMap<Uuid, User>,
    posts: Vec<Post>,
}

/// Store holding every document in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        if documents.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("user already exists".to_string()));
        }
        documents.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let stored = documents
            .users
            .get_mut(&user.id)
            .ok_or(StoreError::Missing(user.id))?;
        stored.name = user.name.clone();
        stored.status = user.status.clone();
        stored.post_ids = user.post_ids.clone();
        stored.updated_at = user.updated_at;
        Ok(())
    }

    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        if documents.posts.iter().any(|p| p.id == post.id) {
            return Err(StoreError::Conflict("post already exists".to_string()));
        }
        documents.posts.push(post.clone());
        Ok(())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let stored = documents
            .posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(StoreError::Missing(post.id))?;
        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.image_url = post.image_url.clone();
        stored.updated_at = post.updated_at;
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        let before = documents.posts.len();
        documents.posts.retain(|p| p.id != id);
        Ok(documents.posts.len() != before)
    }

    async fn count_posts(&self) -> Result<u64, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.posts.len() as u64)
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StoreError> {
        let documents = self.documents.read().await;

        // Newest insert first, then a stable sort keeps it first among equal timestamps
        let mut posts: Vec<&Post> = documents.posts.iter().rev().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(posts.into_iter().skip(offset).take(limit).cloned().collect())
    }
}
