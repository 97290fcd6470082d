pub mod command_camera;
pub mod image_file_decoder;
pub mod prompt_permission_gate;
pub mod selected_file_picker;
