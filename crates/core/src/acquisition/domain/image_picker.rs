use std::path::PathBuf;

/// Domain interface for the platform file picker, restricted to images.
pub trait ImagePicker: Send {
    /// `None` when the user dismissed the picker.
    fn pick_image(&mut self) -> Option<PathBuf>;
}
