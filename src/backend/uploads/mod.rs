//! Uploads Module
//!
//! The side-channel REST endpoint for post images and the directory-backed
//! store behind it.
//!
//! - **`images`** - writes, resolves and clears image files
//! - **`handler`** - `PUT /post-image`

pub mod images;

pub mod handler;

pub use handler::{upload_image, UploadResponse, MAX_UPLOAD_BYTES};
pub use images::{ImageStore, PUBLIC_PREFIX};
