//! inkform-notify
//!
//! Aftercare email rendering and dispatch via SES.

pub mod client;
pub mod email;
pub mod error;
pub mod render;
