use std::fmt;
use std::sync::Arc;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

/// The decoded photo currently held for submission: RGB bytes in row-major order.
///
/// Pixel data is shared, so cloning is cheap and a clone handed to a worker
/// thread never copies the raster.
#[derive(Clone, PartialEq, Eq)]
pub struct AcquiredImage {
    pixels: Arc<RgbImage>,
}

impl AcquiredImage {
    pub fn new(pixels: RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::new(image.into_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn data(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// RGBA bytes with an opaque alpha channel, the layout widget toolkits expect.
    pub fn to_rgba(&self) -> Vec<u8> {
        DynamicImage::ImageRgb8(self.pixels.as_ref().clone())
            .into_rgba8()
            .into_raw()
    }

    /// Shrink so the longest side is at most `max_dimension`, keeping the
    /// aspect ratio. Images already small enough are returned as-is.
    pub fn downscaled(&self, max_dimension: u32) -> Self {
        let (w, h) = (self.width(), self.height());
        let max_dimension = max_dimension.max(1);
        if w <= max_dimension && h <= max_dimension {
            return self.clone();
        }

        let (new_w, new_h) = if w >= h {
            let scaled = (h as f64 / w as f64 * max_dimension as f64).round() as u32;
            (max_dimension, scaled.max(1))
        } else {
            let scaled = (w as f64 / h as f64 * max_dimension as f64).round() as u32;
            (scaled.max(1), max_dimension)
        };

        Self::new(image::imageops::resize(
            self.pixels.as_ref(),
            new_w,
            new_h,
            FilterType::Triangle,
        ))
    }
}

impl fmt::Debug for AcquiredImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcquiredImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
