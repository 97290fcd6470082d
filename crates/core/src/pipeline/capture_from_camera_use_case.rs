use crate::acquisition::domain::acquisition_outcome::{AcquisitionError, AcquisitionOutcome};
use crate::acquisition::domain::camera::Camera;
use crate::acquisition::domain::permission_gate::{PermissionGate, PermissionStatus};

/// Camera path: availability → permission → capture.
///
/// A missing camera and a denied permission are not errors; both come back
/// as named outcomes and the caller stays silent.
pub struct CaptureFromCameraUseCase {
    camera: Box<dyn Camera>,
    permissions: Box<dyn PermissionGate>,
}

impl CaptureFromCameraUseCase {
    pub fn new(camera: Box<dyn Camera>, permissions: Box<dyn PermissionGate>) -> Self {
        Self {
            camera,
            permissions,
        }
    }

    pub fn permission_status(&self) -> PermissionStatus {
        self.permissions.status()
    }

    pub fn execute(&mut self) -> Result<AcquisitionOutcome, AcquisitionError> {
        if !self.camera.is_available() {
            log::info!("No camera available");
            return Ok(AcquisitionOutcome::CameraUnavailable);
        }

        if self.permissions.status() != PermissionStatus::Granted
            && self.permissions.request() != PermissionStatus::Granted
        {
            log::info!("Camera permission denied");
            return Ok(AcquisitionOutcome::PermissionDenied);
        }

        match self.camera.capture()? {
            Some(image) => Ok(AcquisitionOutcome::Acquired(image)),
            None => Ok(AcquisitionOutcome::UserCancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::infrastructure::prompt_permission_gate::PromptPermissionGate;
    use crate::shared::acquired_image::AcquiredImage;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // --- Stubs ---

    struct StubCamera {
        available: bool,
        photo: Option<AcquiredImage>,
        captures: Arc<AtomicUsize>,
    }

    impl StubCamera {
        fn new(available: bool, photo: Option<AcquiredImage>) -> Self {
            Self {
                available,
                photo,
                captures: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Camera for StubCamera {
        fn is_available(&self) -> bool {
            self.available
        }

        fn capture(&mut self) -> Result<Option<AcquiredImage>, AcquisitionError> {
            self.captures.fetch_add(1, Ordering::Relaxed);
            Ok(self.photo.clone())
        }
    }

    struct FailingCamera;

    impl Camera for FailingCamera {
        fn is_available(&self) -> bool {
            true
        }

        fn capture(&mut self) -> Result<Option<AcquiredImage>, AcquisitionError> {
            Err(AcquisitionError::NoCameraCommand)
        }
    }

    // --- Helpers ---

    fn photo() -> AcquiredImage {
        AcquiredImage::new(image::RgbImage::new(8, 6))
    }

    fn gate(status: PermissionStatus, answer: bool) -> Box<dyn PermissionGate> {
        Box::new(PromptPermissionGate::new(status, move || answer))
    }

    // --- Tests ---

    #[test]
    fn test_granted_capture_returns_photo() {
        let mut uc = CaptureFromCameraUseCase::new(
            Box::new(StubCamera::new(true, Some(photo()))),
            gate(PermissionStatus::Granted, false),
        );
        assert_eq!(uc.execute().unwrap(), AcquisitionOutcome::Acquired(photo()));
    }

    #[test]
    fn test_prompt_grant_then_capture() {
        let mut uc = CaptureFromCameraUseCase::new(
            Box::new(StubCamera::new(true, Some(photo()))),
            gate(PermissionStatus::NotDetermined, true),
        );
        assert!(uc.execute().unwrap().image().is_some());
        assert_eq!(uc.permission_status(), PermissionStatus::Granted);
    }

    #[test]
    fn test_denied_permission_never_opens_camera() {
        let camera = StubCamera::new(true, Some(photo()));
        let captures = camera.captures.clone();
        let mut uc =
            CaptureFromCameraUseCase::new(Box::new(camera), gate(PermissionStatus::NotDetermined, false));

        assert_eq!(uc.execute().unwrap(), AcquisitionOutcome::PermissionDenied);
        assert_eq!(captures.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_unavailable_camera_skips_permission_prompt() {
        let prompts = Arc::new(AtomicUsize::new(0));
        let counter = prompts.clone();
        let permissions = PromptPermissionGate::new(PermissionStatus::NotDetermined, move || {
            counter.fetch_add(1, Ordering::Relaxed);
            true
        });
        let mut uc = CaptureFromCameraUseCase::new(
            Box::new(StubCamera::new(false, Some(photo()))),
            Box::new(permissions),
        );

        assert_eq!(uc.execute().unwrap(), AcquisitionOutcome::CameraUnavailable);
        assert_eq!(prompts.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_backing_out_is_cancellation() {
        let mut uc = CaptureFromCameraUseCase::new(
            Box::new(StubCamera::new(true, None)),
            gate(PermissionStatus::Granted, true),
        );
        assert_eq!(uc.execute().unwrap(), AcquisitionOutcome::UserCancelled);
    }

    #[test]
    fn test_camera_error_propagates() {
        let mut uc = CaptureFromCameraUseCase::new(
            Box::new(FailingCamera),
            gate(PermissionStatus::Granted, true),
        );
        assert!(uc.execute().is_err());
    }
}
