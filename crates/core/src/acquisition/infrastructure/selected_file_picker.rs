use std::path::PathBuf;

use crate::acquisition::domain::image_picker::ImagePicker;

/// [`ImagePicker`] over a choice that was already made elsewhere: a CLI
/// argument, or the result of an async file dialog.
///
/// Yields the selection once; later picks behave like a dismissed picker.
pub struct SelectedFilePicker {
    selection: Option<PathBuf>,
}

impl SelectedFilePicker {
    pub fn new(selection: Option<PathBuf>) -> Self {
        Self { selection }
    }
}

impl ImagePicker for SelectedFilePicker {
    fn pick_image(&mut self) -> Option<PathBuf> {
        self.selection.take()
    }
}
