//! inkform-storage
//!
//! S3 uploads for waiver attachments. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod objects;
