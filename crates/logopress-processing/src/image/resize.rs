use image::{DynamicImage, GenericImageView};
use logopress_core::OutputSize;

/// Image resize operations.
pub struct ImageResize;

impl ImageResize {
    /// Select appropriate filter type based on resize ratio.
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> image::imageops::FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            image::imageops::FilterType::Triangle
        } else if max_ratio > 1.5 {
            image::imageops::FilterType::CatmullRom
        } else {
            image::imageops::FilterType::Lanczos3
        }
    }

    /// Scale the image to cover the target size, then center-crop the
    /// overflow. The result always has exactly the requested dimensions
    /// and preserves aspect ratio without letterboxing.
    pub fn fit(img: &DynamicImage, size: OutputSize) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        if (orig_width, orig_height) == (size.width, size.height) {
            return img.clone();
        }

        let filter = Self::select_filter(orig_width, orig_height, size.width, size.height);
        img.resize_to_fill(size.width, size.height, filter)
    }
}
