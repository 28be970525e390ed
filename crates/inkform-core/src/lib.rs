//! inkform-core
//!
//! Pure domain types, fixed waiver vocabularies, the embedded-image codec,
//! and S3 key conventions. Shared by every other Inkform crate, so it has
//! no AWS SDK dependency.

pub mod data_url;
pub mod error;
pub mod models;
pub mod storage_keys;
