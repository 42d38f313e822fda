/**
 * Operation Endpoint
 *
 * `POST /graphql` decodes one [`Operation`], resolves it against the shared
 * state with the caller's auth context, and answers with
 * `{ "data": { "<operation>": <result> } }`.
 *
 * Failures go through `BackendError`'s `IntoResponse`, so every error body
 * is `{ "errors": [{ "message", "status", "data"? }] }` with the matching
 * HTTP status.
 */

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::{Auth, AuthContext};
use crate::backend::resolvers;
use crate::backend::server::state::AppState;

use super::operation::{Operation, OperationOutput};

/// Success body: the operation name mapped to its result
#[derive(Serialize, Debug)]
pub struct DataEnvelope {
    pub data: BTreeMap<&'static str, OperationOutput>,
}

/// Run one operation
pub async fn dispatch(
    state: &AppState,
    auth: &AuthContext,
    operation: Operation,
) -> Result<OperationOutput, BackendError> {
    let output = match operation {
        Operation::CreateUser { user_input } => {
            OperationOutput::User(resolvers::create_user(state, user_input).await?)
        }
        Operation::Login { email, password } => {
            OperationOutput::Auth(resolvers::login(state, &email, &password).await?)
        }
        Operation::CreatePost { post_input } => {
            OperationOutput::Post(resolvers::create_post(state, auth, post_input).await?)
        }
        Operation::Posts { page } => {
            OperationOutput::Page(resolvers::list_posts(state, auth, page).await?)
        }
        Operation::Post { id } => OperationOutput::Post(resolvers::get_post(state, auth, &id).await?),
        Operation::UpdatePost { id, post_input } => {
            OperationOutput::Post(resolvers::update_post(state, auth, &id, post_input).await?)
        }
        Operation::DeletePost { id } => {
            OperationOutput::Deleted(resolvers::delete_post(state, auth, &id).await?)
        }
        Operation::User {} => OperationOutput::User(resolvers::current_user(state, auth).await?),
        Operation::UpdateStatus { status } => {
            OperationOutput::User(resolvers::update_status(state, auth, status).await?)
        }
    };
    Ok(output)
}

/// Handler for `POST /graphql`
///
/// A body that is not a known operation with well-formed variables is a 400.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Auth(auth): Auth,
    payload: Result<Json<Operation>, JsonRejection>,
) -> Result<Json<DataEnvelope>, BackendError> {
    let Json(operation) = payload.map_err(|rejection| {
        tracing::warn!("Rejected operation body: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    })?;

    let name = operation.name();
    tracing::debug!(
        "Operation {} (mutation: {}, authenticated: {})",
        name,
        operation.is_mutation(),
        auth.is_auth
    );

    let output = dispatch(&state, &auth, operation).await?;

    let mut data = BTreeMap::new();
    data.insert(name, output);
    Ok(Json(DataEnvelope { data }))
}
