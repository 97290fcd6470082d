use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use crate::recognition::domain::endpoint::Endpoint;
use crate::recognition::domain::recognition_client::{RecognitionClient, RecognitionError};
use crate::recognition::domain::recognition_result::RecognitionResult;
use crate::recognition::domain::upload_request::UploadRequest;

/// Uploads photos to the recognition service as `multipart/form-data`.
///
/// One POST per submission, no retries. Without an explicit timeout the
/// transport's defaults apply.
pub struct HttpRecognitionClient {
    client: Client,
    endpoint: Endpoint,
}

impl HttpRecognitionClient {
    pub fn new(endpoint: Endpoint, timeout: Option<Duration>) -> Result<Self, RecognitionError> {
        if !endpoint.is_secure() {
            log::warn!("Endpoint {endpoint} uses plain HTTP; photos are sent unencrypted");
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RecognitionError::Client(Box::new(e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

fn build_form(request: UploadRequest) -> Result<Form, RecognitionError> {
    let field_name = request.field_name();
    let file_name = request.file_name();
    let content_type = request.content_type();
    let part = Part::bytes(request.into_payload())
        .file_name(file_name)
        .mime_str(content_type)
        .map_err(|e| RecognitionError::Request(Box::new(e)))?;
    Ok(Form::new().part(field_name, part))
}

impl RecognitionClient for HttpRecognitionClient {
    fn submit(&self, request: UploadRequest) -> Result<RecognitionResult, RecognitionError> {
        let size = request.payload().len();
        let form = build_form(request)?;

        log::debug!("POST {} ({size} bytes)", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.url().clone())
            .multipart(form)
            .send()
            .map_err(|e| RecognitionError::Transport {
                url: self.endpoint.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Recognition service answered {status}; reading body as the result");
        }

        // An unreadable body is treated like an empty one.
        let body = response.text().unwrap_or_else(|e| {
            log::warn!("Failed to read response body: {e}");
            String::new()
        });
        log::debug!("Response {status}: {body:?}");

        Ok(RecognitionResult::from_body(&body))
    }
}
