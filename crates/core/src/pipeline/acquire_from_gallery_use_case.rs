use crate::acquisition::domain::acquisition_outcome::{AcquisitionError, AcquisitionOutcome};
use crate::acquisition::domain::image_picker::ImagePicker;
use crate::acquisition::infrastructure::image_file_decoder::decode_file;

/// Gallery path: pick → decode.
pub struct AcquireFromGalleryUseCase {
    picker: Box<dyn ImagePicker>,
}

impl AcquireFromGalleryUseCase {
    pub fn new(picker: Box<dyn ImagePicker>) -> Self {
        Self { picker }
    }

    pub fn execute(&mut self) -> Result<AcquisitionOutcome, AcquisitionError> {
        let Some(path) = self.picker.pick_image() else {
            log::debug!("Picker dismissed");
            return Ok(AcquisitionOutcome::UserCancelled);
        };
        log::debug!("Picked {}", path.display());
        Ok(AcquisitionOutcome::Acquired(decode_file(&path)?))
    }
}
