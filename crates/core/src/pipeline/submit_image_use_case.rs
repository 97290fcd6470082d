use crate::encoding::domain::image_encoder::ImageEncoder;
use crate::recognition::domain::recognition_client::RecognitionClient;
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::recognition::domain::upload_request::UploadRequest;
use crate::shared::acquired_image::AcquiredImage;

/// Final state of one submission, owned and ready to cross threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Recognized(RecognitionResult),
    /// Carries the cause for logs only; users see one generic message.
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed(_))
    }
}

/// Submit pipeline: encode → upload → classify.
///
/// Never returns an error. Every failure collapses into
/// [`SubmissionOutcome::Failed`], and nothing is retried.
pub struct SubmitImageUseCase {
    encoder: Box<dyn ImageEncoder>,
    client: Box<dyn RecognitionClient>,
}

impl SubmitImageUseCase {
    pub fn new(encoder: Box<dyn ImageEncoder>, client: Box<dyn RecognitionClient>) -> Self {
        Self { encoder, client }
    }

    pub fn execute(&self, image: &AcquiredImage) -> SubmissionOutcome {
        let jpeg = match self.encoder.encode(image) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Failed to encode photo: {e}");
                return SubmissionOutcome::Failed(e.to_string());
            }
        };

        match self.client.submit(UploadRequest::new(jpeg)) {
            Ok(result) => {
                log::info!("Recognition finished: {result:?}");
                SubmissionOutcome::Recognized(result)
            }
            Err(e) => {
                log::warn!("Recognition request failed: {e}");
                SubmissionOutcome::Failed(e.to_string())
            }
        }
    }
}
