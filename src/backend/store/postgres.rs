/**
 * PostgreSQL Store
 *
 * sqlx-backed adapter. Users keep their authored post ids in a `UUID[]`
 * column so a user row reads like the document it models.
 */

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

use super::models::{Post, User};
use super::{BlogStore, StoreError};

const USER_COLUMNS: &str =
    "id, email, name, password_hash, status, post_ids, created_at, updated_at";

const POST_COLUMNS: &str = "id, title, content, image_url, creator_id, created_at, updated_at";

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and run pending migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        tracing::info!("Database connection pool created successfully");
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_insert_error(err: sqlx::Error, what: &str) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(format!("{what} already exists"))
        }
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, status, post_ids, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(&user.status)
        .bind(&user.post_ids)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "user"))?;

        Ok(())
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $1, status = $2, post_ids = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&user.name)
        .bind(&user.status)
        .bind(&user.post_ids)
        .bind(user.updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing(user.id));
        }
        Ok(())
    }

    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, image_url, creator_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.creator_id)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "post"))?;

        Ok(())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn save_post(&self, post: &Post) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $1, content = $2, image_url = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.image_url)
        .bind(post.updated_at)
        .bind(post.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing(post.id));
        }
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_posts(&self) -> Result<u64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn list_posts(&self, offset: u64, limit: u64) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
