use crate::shared::constants::{UPLOAD_CONTENT_TYPE, UPLOAD_FIELD_NAME, UPLOAD_FILE_NAME};

/// Single-part multipart form carrying one JPEG. Built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    jpeg: Vec<u8>,
}

impl UploadRequest {
    pub fn new(jpeg: Vec<u8>) -> Self {
        Self { jpeg }
    }

    pub fn field_name(&self) -> &'static str {
        UPLOAD_FIELD_NAME
    }

    pub fn file_name(&self) -> &'static str {
        UPLOAD_FILE_NAME
    }

    pub fn content_type(&self) -> &'static str {
        UPLOAD_CONTENT_TYPE
    }

    pub fn payload(&self) -> &[u8] {
        &self.jpeg
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.jpeg
    }
}
