pub mod endpoint;
pub mod recognition_client;
pub mod recognition_result;
pub mod upload_request;
