use std::thread;

use crossbeam_channel::Receiver;

use facecheck_core::acquisition::domain::acquisition_outcome::{
    AcquisitionError, AcquisitionOutcome,
};
use facecheck_core::acquisition::domain::permission_gate::PermissionStatus;
use facecheck_core::acquisition::infrastructure::command_camera::CommandCamera;
use facecheck_core::acquisition::infrastructure::prompt_permission_gate::PromptPermissionGate;
use facecheck_core::pipeline::capture_from_camera_use_case::CaptureFromCameraUseCase;

/// Result of one camera session, sent back to the UI thread.
pub type CameraResult = Result<AcquisitionOutcome, AcquisitionError>;

/// Run the capture command on a background thread.
///
/// The permission dialog is shown by the UI before spawning, so the worker
/// only sees the stored answer and never prompts.
pub fn spawn(command: Vec<String>, permission: PermissionStatus) -> Receiver<CameraResult> {
    let (tx, rx) = crossbeam_channel::bounded::<CameraResult>(1);

    thread::spawn(move || {
        let camera = CommandCamera::new(command);
        let gate = PromptPermissionGate::new(permission, || false);
        let mut use_case = CaptureFromCameraUseCase::new(Box::new(camera), Box::new(gate));
        let _ = tx.send(use_case.execute());
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_program_reports_unavailable() {
        let rx = spawn(
            vec!["definitely-not-a-camera-program-xyz".into()],
            PermissionStatus::Granted,
        );
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(outcome, AcquisitionOutcome::CameraUnavailable);
    }

    #[cfg(unix)]
    #[test]
    fn test_without_permission_camera_is_not_run() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let rx = spawn(
            vec![
                "sh".into(),
                "-c".into(),
                "touch \"$0\"".into(),
                marker.to_string_lossy().into_owned(),
            ],
            PermissionStatus::NotDetermined,
        );
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(outcome, AcquisitionOutcome::PermissionDenied);
        assert!(!marker.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_backing_out_is_cancellation() {
        let rx = spawn(
            vec!["sh".into(), "-c".into(), "exit 1".into()],
            PermissionStatus::Granted,
        );
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(outcome, AcquisitionOutcome::UserCancelled);
    }
}
