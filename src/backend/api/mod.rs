//! Operation API
//!
//! A single JSON endpoint carrying named queries and mutations.
//!
//! | operation      | auth | result                         |
//! |----------------|------|--------------------------------|
//! | `createUser`   | no   | user                           |
//! | `login`        | no   | `{ token, userId }`            |
//! | `createPost`   | yes  | post                           |
//! | `posts`        | yes  | `{ posts, totalPosts }`        |
//! | `post`         | yes  | post                           |
//! | `updatePost`   | yes  | post                           |
//! | `deletePost`   | yes  | `true`                         |
//! | `user`         | yes  | user                           |
//! | `updateStatus` | yes  | user                           |

/// Operation decoding and results
pub mod operation;

/// HTTP handler and dispatch
pub mod handler;

pub use handler::{dispatch, graphql_handler, DataEnvelope};
pub use operation::{Operation, OperationOutput};
