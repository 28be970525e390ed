use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("surface dimensions must be non-zero (got {width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
