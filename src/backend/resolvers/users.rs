/**
 * User Resolvers
 *
 * Registration, login and the authenticated user's own record.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never returned
 * - Unknown email and wrong password both answer 401
 * - Tokens are valid for one hour and cannot be refreshed
 */

use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthContext;
use crate::backend::server::state::AppState;
use crate::backend::store::{StoreError, User};
use crate::shared::types::{AuthData, UserInput};
use crate::shared::validation::validate_user_input;
use crate::shared::UserView;

use super::user_view;

/// Register a new user
///
/// # Errors
///
/// * `InvalidInput` - malformed email and/or short password, all listed
/// * `UserExists` - the email is already registered
pub async fn create_user(state: &AppState, input: UserInput) -> Result<UserView, BackendError> {
    BackendError::check_input(validate_user_input(&input.email, &input.password))?;

    if state.store.find_user_by_email(&input.email).await?.is_some() {
        tracing::warn!("Registration for existing email: {}", input.email);
        return Err(BackendError::UserExists);
    }

    let password_hash = state.hasher.hash(&input.password).await?;
    let user = User::new(input.email, input.name, password_hash);

    // The lookup above can race another registration; the store has the last word
    match state.store.insert_user(&user).await {
        Err(StoreError::Conflict(_)) => return Err(BackendError::UserExists),
        other => other?,
    }

    tracing::info!("Created user {}", user.id);
    Ok(user_view(&user))
}

/// Verify credentials and issue a token
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<AuthData, BackendError> {
    let user = state
        .store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            BackendError::unauthorized("user not found")
        })?;

    if !state.hasher.verify(password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user {}", user.id);
        return Err(BackendError::unauthorized("incorrect password"));
    }

    let token = state.tokens.issue(user.id, &user.email)?;
    tracing::info!("User {} logged in", user.id);

    Ok(AuthData {
        token,
        user_id: user.id.to_string(),
    })
}

async fn load_current_user(state: &AppState, auth: &AuthContext) -> Result<User, BackendError> {
    let user_id = auth.require_user()?;
    state
        .store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("no user found"))
}

/// The authenticated user's record
pub async fn current_user(state: &AppState, auth: &AuthContext) -> Result<UserView, BackendError> {
    let user = load_current_user(state, auth).await?;
    Ok(user_view(&user))
}

/// Replace the authenticated user's status line
pub async fn update_status(
    state: &AppState,
    auth: &AuthContext,
    status: String,
) -> Result<UserView, BackendError> {
    let mut user = load_current_user(state, auth).await?;

    user.status = status;
    user.updated_at = Utc::now();
    state.store.save_user(&user).await?;

    Ok(user_view(&user))
}
