use thiserror::Error;

use super::recognition_result::RecognitionResult;
use super::upload_request::UploadRequest;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to build upload request: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// No response arrived. Timeouts, DNS and refused connections all land here.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Domain interface for the remote face-recognition service.
///
/// `submit` blocks until a response or a transport failure; callers keep it
/// off the UI thread.
pub trait RecognitionClient: Send + Sync {
    fn submit(&self, request: UploadRequest) -> Result<RecognitionResult, RecognitionError>;
}
