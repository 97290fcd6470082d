use crate::acquisition::domain::acquisition_outcome::AcquisitionOutcome;
use crate::shared::acquired_image::AcquiredImage;

/// Whole-screen state.
///
/// `Idle` until the first photo arrives. A finished submission returns to
/// `ImageAcquired`: the photo is kept and can be submitted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    ImageAcquired,
    Submitting,
}

/// Why a submit request was refused before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoImage,
    AlreadySubmitting,
}

/// Owns the held photo and guards the Submitting transition so at most one
/// recognition request is in flight.
///
/// Lives on the UI thread; workers only ever see clones of the photo.
#[derive(Debug, Default)]
pub struct RecognitionSession {
    image: Option<AcquiredImage>,
    submitting: bool,
}

impl RecognitionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScreenState {
        if self.submitting {
            ScreenState::Submitting
        } else if self.image.is_some() {
            ScreenState::ImageAcquired
        } else {
            ScreenState::Idle
        }
    }

    pub fn image(&self) -> Option<&AcquiredImage> {
        self.image.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace the held photo on success; any other outcome is a silent
    /// no-op. Returns whether the photo changed.
    pub fn apply_acquisition(&mut self, outcome: AcquisitionOutcome) -> bool {
        match outcome {
            AcquisitionOutcome::Acquired(image) => {
                log::debug!("Acquired {}x{} photo", image.width(), image.height());
                self.image = Some(image);
                true
            }
            other => {
                log::debug!("Acquisition ended without a photo: {other:?}");
                false
            }
        }
    }

    /// Enter `Submitting` and hand out the photo to upload.
    pub fn begin_submission(&mut self) -> Result<AcquiredImage, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        let image = self.image.clone().ok_or(SubmitRejection::NoImage)?;
        self.submitting = true;
        Ok(image)
    }

    pub fn finish_submission(&mut self) {
        self.submitting = false;
    }
}
