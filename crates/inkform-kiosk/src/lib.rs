//! inkform-kiosk
//!
//! The front-desk form session: typed form state over the signature pad,
//! client-side validation, payload encoding, and the single-POST submit.

pub mod error;
pub mod form;
pub mod submit;

pub use form::WaiverForm;
