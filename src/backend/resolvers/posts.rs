/**
 * Post Resolvers
 *
 * Create, list, fetch, update and delete posts. Every operation requires an
 * authenticated caller; update and delete additionally require that the
 * caller created the post.
 *
 * Creation and deletion touch two documents (the post and its creator's post
 * list) and deletion also removes the image file. These steps run in
 * sequence without a transaction; a failure part-way leaves the earlier
 * steps applied.
 */

use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthContext;
use crate::backend::server::state::AppState;
use crate::backend::store::{Post, User};
use crate::shared::types::{CreatorView, PostInput, PostPage, PostView};
use crate::shared::validation::validate_post_input;

use super::{creator_view, post_view};

/// Fixed page size of the post listing
pub const POSTS_PER_PAGE: u64 = 2;

fn parse_post_id(id: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(id).map_err(|_| BackendError::not_found("no post found"))
}

async fn load_post(state: &AppState, id: &str) -> Result<Post, BackendError> {
    let post_id = parse_post_id(id)?;
    state
        .store
        .find_post(post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("no post found"))
}

async fn load_creator(state: &AppState, creator_id: Uuid) -> Result<CreatorView, BackendError> {
    let creator = state.store.find_user_by_id(creator_id).await?;
    Ok(creator_view(creator_id, creator.as_ref()))
}

/// Create a post owned by the authenticated user
pub async fn create_post(
    state: &AppState,
    auth: &AuthContext,
    input: PostInput,
) -> Result<PostView, BackendError> {
    let user_id = auth.require_user()?;
    BackendError::check_input(validate_post_input(&input.title, &input.content))?;

    let mut creator: User = state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("invalid user"))?;

    let post = Post::new(
        input.title,
        input.content,
        input.image_url.unwrap_or_default(),
        creator.id,
    );
    state.store.insert_post(&post).await?;

    creator.post_ids.push(post.id);
    creator.updated_at = Utc::now();
    state.store.save_user(&creator).await?;

    tracing::info!("User {} created post {}", creator.id, post.id);
    Ok(post_view(&post, creator_view(creator.id, Some(&creator))))
}

/// One page of posts, newest first, with the total count
///
/// Pages are 1-based; a missing or zero page means the first page.
pub async fn list_posts(
    state: &AppState,
    auth: &AuthContext,
    page: Option<u64>,
) -> Result<PostPage, BackendError> {
    auth.require_user()?;

    let page = page.unwrap_or(1).max(1);
    let offset = (page - 1).saturating_mul(POSTS_PER_PAGE);

    let total_posts = state.store.count_posts().await?;
    let posts = state.store.list_posts(offset, POSTS_PER_PAGE).await?;

    let mut creators: HashMap<Uuid, CreatorView> = HashMap::new();
    let mut views = Vec::with_capacity(posts.len());
    for post in &posts {
        let creator = match creators.get(&post.creator_id) {
            Some(creator) => creator.clone(),
            None => {
                let creator = load_creator(state, post.creator_id).await?;
                creators.insert(post.creator_id, creator.clone());
                creator
            }
        };
        views.push(post_view(post, creator));
    }

    Ok(PostPage {
        posts: views,
        total_posts,
    })
}

/// A single post by id
pub async fn get_post(state: &AppState, auth: &AuthContext, id: &str) -> Result<PostView, BackendError> {
    auth.require_user()?;

    let post = load_post(state, id).await?;
    let creator = load_creator(state, post.creator_id).await?;
    Ok(post_view(&post, creator))
}

/// Replace a post's title and content, and its image if a new one is given
pub async fn update_post(
    state: &AppState,
    auth: &AuthContext,
    id: &str,
    input: PostInput,
) -> Result<PostView, BackendError> {
    let user_id = auth.require_user()?;

    let mut post = load_post(state, id).await?;
    if post.creator_id != user_id {
        tracing::warn!("User {} may not update post {}", user_id, post.id);
        return Err(BackendError::Forbidden);
    }

    BackendError::check_input(validate_post_input(&input.title, &input.content))?;

    if let Some(image_url) = input.replacement_image() {
        post.image_url = image_url.to_string();
    }
    post.title = input.title;
    post.content = input.content;
    post.updated_at = Utc::now();
    state.store.save_post(&post).await?;

    let creator = load_creator(state, post.creator_id).await?;
    Ok(post_view(&post, creator))
}

/// Delete a post, its image, and the creator's reference to it
pub async fn delete_post(state: &AppState, auth: &AuthContext, id: &str) -> Result<bool, BackendError> {
    let user_id = auth.require_user()?;

    let post = load_post(state, id).await?;
    if post.creator_id != user_id {
        tracing::warn!("User {} may not delete post {}", user_id, post.id);
        return Err(BackendError::Forbidden);
    }

    state.images.clear(&post.image_url).await;
    state.store.delete_post(post.id).await?;

    match state.store.find_user_by_id(user_id).await? {
        Some(mut owner) => {
            owner.post_ids.retain(|post_id| *post_id != post.id);
            owner.updated_at = Utc::now();
            state.store.save_user(&owner).await?;
        }
        None => tracing::warn!("Owner {} of deleted post {} no longer exists", user_id, post.id),
    }

    tracing::info!("User {} deleted post {}", user_id, post.id);
    Ok(true)
}
