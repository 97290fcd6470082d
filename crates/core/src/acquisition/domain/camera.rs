use crate::shared::acquired_image::AcquiredImage;

use super::acquisition_outcome::AcquisitionError;

/// Domain interface for the platform camera surface.
pub trait Camera: Send {
    /// Whether anything can take a photo at all. Checked before asking for
    /// permission.
    fn is_available(&self) -> bool;

    /// Blocks until the user takes a photo or backs out. There is no timeout.
    /// `Ok(None)` means the user backed out.
    fn capture(&mut self) -> Result<Option<AcquiredImage>, AcquisitionError>;
}
