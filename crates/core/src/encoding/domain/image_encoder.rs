use thiserror::Error;

use crate::shared::acquired_image::AcquiredImage;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("image dimensions are zero")]
    ZeroDimensions,
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Serializes an acquired photo into the bytes sent to the recognition service.
pub trait ImageEncoder: Send + Sync {
    fn encode(&self, image: &AcquiredImage) -> Result<Vec<u8>, EncodeError>;
}
