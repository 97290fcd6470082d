/// Used when no endpoint has been configured.
pub const DEFAULT_ENDPOINT: &str = "https://localhost/face-mobile";

pub const UPLOAD_FIELD_NAME: &str = "file";
pub const UPLOAD_FILE_NAME: &str = "person.jpeg";
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

/// JPEG quality used for every upload.
pub const JPEG_QUALITY: u8 = 100;

/// Response body meaning "no face recognized".
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Longest side of a camera capture, in pixels. Captures are preview-sized.
pub const PREVIEW_MAX_DIMENSION: u32 = 320;

/// Replaced with the capture output path in the camera command.
pub const CAMERA_OUTPUT_PLACEHOLDER: &str = "{output}";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];
