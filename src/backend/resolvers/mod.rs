//! Resolvers Module
//!
//! Business operations behind the operation endpoint. Each resolver takes
//! the shared state and, where it needs one, the caller's `AuthContext`, and
//! returns `Result<_, BackendError>`.
//!
//! Every resolver follows the same order:
//!
//! 1. authentication (`Unauthorized`), except `create_user` and `login`
//! 2. existence and ownership of a named post (`NotFound`, `Forbidden`)
//! 3. input validation (`InvalidInput` with every failing field)
//! 4. persistence
//! 5. response shaping (string ids, ISO-8601 timestamps)

/// Registration, login and the caller's own record
pub mod users;

/// Post CRUD
pub mod posts;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post, POSTS_PER_PAGE};
pub use users::{create_user, current_user, login, update_status};

use uuid::Uuid;

use crate::backend::store::{Post, User};
use crate::shared::types::{format_timestamp, CreatorView, PostView, UserView};

/// Client view of a user
pub fn user_view(user: &User) -> UserView {
    UserView {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        status: user.status.clone(),
        posts: user.post_ids.iter().map(Uuid::to_string).collect(),
    }
}

/// Creator reference for a post; a creator that no longer exists renders with an empty name
pub fn creator_view(creator_id: Uuid, creator: Option<&User>) -> CreatorView {
    CreatorView {
        id: creator_id.to_string(),
        name: creator.map(|user| user.name.clone()).unwrap_or_default(),
    }
}

/// Client view of a post
pub fn post_view(post: &Post, creator: CreatorView) -> PostView {
    PostView {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        image_url: post.image_url.clone(),
        creator,
        created_at: format_timestamp(post.created_at),
        updated_at: format_timestamp(post.updated_at),
    }
}
