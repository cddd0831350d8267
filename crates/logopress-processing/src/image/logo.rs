use crate::image::resize::ImageResize;
use image::{imageops, DynamicImage, GenericImageView};
use logopress_core::LogoPosition;

/// Logo compositing.
pub struct LogoComposite;

impl LogoComposite {
    /// Scale the logo to half the image width, keeping its aspect ratio,
    /// then alpha-composite it flush against the requested corner.
    pub fn apply(img: DynamicImage, logo: &DynamicImage, position: LogoPosition) -> DynamicImage {
        let (img_width, img_height) = img.dimensions();
        let (logo_width, logo_height) = logo.dimensions();

        let target_width = (img_width / 2).max(1);
        let target_height = ((logo_height as f32 * target_width as f32 / logo_width as f32)
            .round() as u32)
            .max(1);

        let scaled = if (logo_width, logo_height) == (target_width, target_height) {
            logo.to_rgba8()
        } else {
            let filter =
                ImageResize::select_filter(logo_width, logo_height, target_width, target_height);
            logo.resize_exact(target_width, target_height, filter).to_rgba8()
        };

        let (x, y) = match position {
            LogoPosition::TopLeft => (0, 0),
            LogoPosition::TopRight => ((img_width as i64 - target_width as i64).max(0), 0),
            LogoPosition::BottomLeft => (0, (img_height as i64 - target_height as i64).max(0)),
            LogoPosition::BottomRight => (
                (img_width as i64 - target_width as i64).max(0),
                (img_height as i64 - target_height as i64).max(0),
            ),
        };

        let mut canvas = img.to_rgba8();
        imageops::overlay(&mut canvas, &scaled, x, y);
        DynamicImage::ImageRgba8(canvas)
    }
}
