use std::path::PathBuf;

use thiserror::Error;

use crate::shared::acquired_image::AcquiredImage;

/// Result of one trip to the camera or the picker.
///
/// Everything except `Acquired` leaves the held photo untouched and is not
/// reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    Acquired(AcquiredImage),
    UserCancelled,
    PermissionDenied,
    CameraUnavailable,
}

impl AcquisitionOutcome {
    pub fn image(&self) -> Option<&AcquiredImage> {
        match self {
            AcquisitionOutcome::Acquired(image) => Some(image),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<AcquiredImage> {
        match self {
            AcquisitionOutcome::Acquired(image) => Some(image),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read image data: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("no camera command configured")]
    NoCameraCommand,
    #[error("failed to run camera command '{program}': {source}")]
    CameraLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to prepare camera output directory: {0}")]
    CameraWorkspace(#[source] std::io::Error),
}
