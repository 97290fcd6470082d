pub mod acquired_image;
pub mod client_config;
pub mod constants;
