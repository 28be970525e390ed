//! inkform-signature
//!
//! Headless raster signature capture: a pointer-driven drawing surface with
//! ink detection and PNG export. The embedding form layer feeds it pointer
//! events; this crate owns the pixels.

pub mod error;
pub mod pad;

pub use pad::SignaturePad;
