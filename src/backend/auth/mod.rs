//! Authentication Module
//!
//! - **`sessions`** - HS256 bearer tokens valid for one hour
//! - **`passwords`** - bcrypt hashing off the async runtime
//!
//! Request authentication itself lives in `backend::middleware`.

/// JWT token management
pub mod sessions;

/// Password hashing
pub mod passwords;

pub use passwords::PasswordHasher;
pub use sessions::{Claims, TokenError, TokenService};
