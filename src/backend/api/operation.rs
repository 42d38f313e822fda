/**
 * Operations
 *
 * The closed set of queries and mutations accepted by the operation
 * endpoint. A request names one operation and supplies its variables:
 *
 * ```json
 * { "operation": "updatePost", "variables": { "id": "...", "postInput": { ... } } }
 * ```
 *
 * A missing or `null` `variables` reads as `{}`, so `user` and `posts`
 * (whose page is optional) can be sent as `{ "operation": "posts" }`.
 */

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::shared::types::{AuthData, PostInput, PostPage, PostView, UserInput, UserView};

/// A decoded operation request
#[derive(Deserialize, Debug, Clone)]
#[serde(remote = "Self")]
#[serde(tag = "operation", content = "variables", rename_all = "camelCase")]
pub enum Operation {
    #[serde(rename_all = "camelCase")]
    CreateUser { user_input: UserInput },
    Login { email: String, password: String },
    #[serde(rename_all = "camelCase")]
    CreatePost { post_input: PostInput },
    Posts {
        #[serde(default)]
        page: Option<u64>,
    },
    Post { id: String },
    #[serde(rename_all = "camelCase")]
    UpdatePost { id: String, post_input: PostInput },
    DeletePost { id: String },
    User {},
    UpdateStatus { status: String },
}

/// Raw request body before the variables are matched to an operation
#[derive(Deserialize)]
struct Envelope {
    operation: String,
    #[serde(default)]
    variables: Option<Value>,
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::deserialize(deserializer)?;
        let variables = envelope
            .variables
            .unwrap_or_else(|| Value::Object(Map::new()));

        let mut tagged = Map::new();
        tagged.insert("operation".to_string(), Value::String(envelope.operation));
        tagged.insert("variables".to_string(), variables);

        Operation::deserialize(Value::Object(tagged)).map_err(de::Error::custom)
    }
}

impl Operation {
    /// Wire name of the operation, used as the key of the `data` object
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateUser { .. } => "createUser",
            Self::Login { .. } => "login",
            Self::CreatePost { .. } => "createPost",
            Self::Posts { .. } => "posts",
            Self::Post { .. } => "post",
            Self::UpdatePost { .. } => "updatePost",
            Self::DeletePost { .. } => "deletePost",
            Self::User {} => "user",
            Self::UpdateStatus { .. } => "updateStatus",
        }
    }

    /// Whether the operation changes state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Posts { .. } | Self::Post { .. } | Self::User {})
    }
}

/// Result of a resolved operation
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum OperationOutput {
    User(UserView),
    Auth(AuthData),
    Post(PostView),
    Page(PostPage),
    Deleted(bool),
}
