use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::acquisition::domain::acquisition_outcome::AcquisitionError;
use crate::shared::acquired_image::AcquiredImage;

/// Decode an image file, sniffing the format from its contents rather than
/// its extension.
pub fn decode_file(path: &Path) -> Result<AcquiredImage, AcquisitionError> {
    let file = File::open(path).map_err(|e| AcquisitionError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let image = decode_stream(BufReader::new(file))?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode an image from any byte stream.
pub fn decode_stream<R: Read>(mut reader: R) -> Result<AcquiredImage, AcquisitionError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(AcquisitionError::Read)?;
    let image = image::load_from_memory(&bytes).map_err(AcquisitionError::Decode)?;
    Ok(AcquiredImage::from_dynamic(image))
}
