pub mod acquire_from_gallery_use_case;
pub mod capture_from_camera_use_case;
pub mod infrastructure;
pub mod submit_image_use_case;
