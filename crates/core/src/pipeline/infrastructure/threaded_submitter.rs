use std::sync::Arc;
use std::thread;

use crossbeam_channel::Receiver;

use crate::pipeline::submit_image_use_case::{SubmissionOutcome, SubmitImageUseCase};
use crate::shared::acquired_image::AcquiredImage;

/// Runs submissions on background threads.
///
/// Each call returns a receiver that yields exactly one owned
/// [`SubmissionOutcome`]. The caller drains it on its own thread, so no UI
/// state is ever touched from the worker.
#[derive(Clone)]
pub struct ThreadedSubmitter {
    use_case: Arc<SubmitImageUseCase>,
}

impl ThreadedSubmitter {
    pub fn new(use_case: SubmitImageUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }

    pub fn submit(&self, image: AcquiredImage) -> Receiver<SubmissionOutcome> {
        let (tx, rx) = crossbeam_channel::bounded::<SubmissionOutcome>(1);
        let use_case = self.use_case.clone();

        thread::spawn(move || {
            let outcome = use_case.execute(&image);
            // The receiver may be gone if the screen closed; nothing to do then.
            let _ = tx.send(outcome);
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::infrastructure::jpeg_encoder::JpegImageEncoder;
    use crate::recognition::domain::recognition_client::{RecognitionClient, RecognitionError};
    use crate::recognition::domain::recognition_result::RecognitionResult;
    use crate::recognition::domain::upload_request::UploadRequest;
    use std::time::Duration;

    struct EchoSizeClient;

    impl RecognitionClient for EchoSizeClient {
        fn submit(&self, request: UploadRequest) -> Result<RecognitionResult, RecognitionError> {
            Ok(RecognitionResult::from_body(&request.payload().len().to_string()))
        }
    }

    struct SlowFailingClient;

    impl RecognitionClient for SlowFailingClient {
        fn submit(&self, _request: UploadRequest) -> Result<RecognitionResult, RecognitionError> {
            thread::sleep(Duration::from_millis(20));
            Err(RecognitionError::Transport {
                url: "http://stub".into(),
                source: "timed out".into(),
            })
        }
    }

    fn photo() -> AcquiredImage {
        AcquiredImage::new(image::RgbImage::new(10, 10))
    }

    #[test]
    fn test_outcome_arrives_on_channel() {
        let submitter = ThreadedSubmitter::new(SubmitImageUseCase::new(
            Box::new(JpegImageEncoder::default()),
            Box::new(EchoSizeClient),
        ));
        let rx = submitter.submit(photo());
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            outcome,
            SubmissionOutcome::Recognized(RecognitionResult::Identified(_))
        ));
    }

    #[test]
    fn test_failure_arrives_on_channel() {
        let submitter = ThreadedSubmitter::new(SubmitImageUseCase::new(
            Box::new(JpegImageEncoder::default()),
            Box::new(SlowFailingClient),
        ));
        let rx = submitter.submit(photo());
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_exactly_one_outcome_per_submission() {
        let submitter = ThreadedSubmitter::new(SubmitImageUseCase::new(
            Box::new(JpegImageEncoder::default()),
            Box::new(EchoSizeClient),
        ));
        let rx = submitter.submit(photo());
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
