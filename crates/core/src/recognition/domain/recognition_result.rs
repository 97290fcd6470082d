use crate::shared::constants::UNKNOWN_SENTINEL;

/// What the recognition service said about the submitted photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionResult {
    /// The body text, taken verbatim. May be empty.
    Identified(String),
    /// The body was exactly the sentinel `"unknown"`.
    Unknown,
}

impl RecognitionResult {
    /// Classify a response body. Only an exact match on the sentinel counts
    /// as unknown; everything else, including an empty body, is a label.
    pub fn from_body(body: &str) -> Self {
        if body == UNKNOWN_SENTINEL {
            RecognitionResult::Unknown
        } else {
            RecognitionResult::Identified(body.to_string())
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            RecognitionResult::Identified(label) => Some(label),
            RecognitionResult::Unknown => None,
        }
    }
}
