pub mod acquisition_outcome;
pub mod camera;
pub mod image_picker;
pub mod permission_gate;
