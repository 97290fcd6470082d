use image::codecs::jpeg::JpegEncoder as ImageJpegEncoder;
use image::ExtendedColorType;

use crate::encoding::domain::image_encoder::{EncodeError, ImageEncoder};
use crate::shared::acquired_image::AcquiredImage;
use crate::shared::constants::JPEG_QUALITY;

/// Encode an RGB photo as baseline JPEG. Quality is clamped into 1..=100.
pub fn encode_jpeg(image: &AcquiredImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(EncodeError::ZeroDimensions);
    }

    let mut bytes = Vec::new();
    let mut encoder = ImageJpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    encoder.encode(
        image.data(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(bytes)
}

/// [`ImageEncoder`] producing JPEG at a fixed quality.
pub struct JpegImageEncoder {
    quality: u8,
}

impl JpegImageEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegImageEncoder {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl ImageEncoder for JpegImageEncoder {
    fn encode(&self, image: &AcquiredImage) -> Result<Vec<u8>, EncodeError> {
        let bytes = encode_jpeg(image, self.quality)?;
        log::debug!(
            "Encoded {}x{} photo to {} JPEG bytes (quality {})",
            image.width(),
            image.height(),
            bytes.len(),
            self.quality
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use rstest::rstest;

    fn gradient(width: u32, height: u32) -> AcquiredImage {
        AcquiredImage::new(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn test_output_is_jpeg() {
        let bytes = encode_jpeg(&gradient(32, 24), 100).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "missing SOI marker");
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9], "missing EOI marker");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let img = gradient(64, 48);
        let first = encode_jpeg(&img, 100).unwrap();
        let second = encode_jpeg(&img, 100).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decodes_back_to_same_dimensions() {
        let bytes = encode_jpeg(&gradient(40, 30), 100).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let img = gradient(128, 128);
        let high = encode_jpeg(&img, 100).unwrap();
        let low = encode_jpeg(&img, 10).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let empty = AcquiredImage::new(RgbImage::new(0, 0));
        assert!(matches!(
            encode_jpeg(&empty, 100),
            Err(EncodeError::ZeroDimensions)
        ));
    }

    #[rstest]
    #[case::zero(0, 1)]
    #[case::max(100, 100)]
    #[case::over(250, 100)]
    fn test_quality_is_clamped(#[case] requested: u8, #[case] expected: u8) {
        assert_eq!(JpegImageEncoder::new(requested).quality(), expected);
    }

    #[test]
    fn test_default_uses_maximum_quality() {
        let encoder = JpegImageEncoder::default();
        assert_eq!(encoder.quality(), 100);
        let img = gradient(16, 16);
        assert_eq!(encoder.encode(&img).unwrap(), encode_jpeg(&img, 100).unwrap());
    }
}
