use image::DynamicImage;

/// Darkening overlay.
pub struct Darken;

impl Darken {
    /// Composite a 50% opaque black layer over the whole image.
    ///
    /// Alpha-compositing black at half opacity halves every color
    /// channel, so this is done in place without building an overlay
    /// image. The alpha channel is left untouched.
    pub fn apply(img: DynamicImage) -> DynamicImage {
        let mut rgba = img.to_rgba8();
        for pixel in rgba.pixels_mut() {
            pixel[0] /= 2;
            pixel[1] /= 2;
            pixel[2] /= 2;
        }
        DynamicImage::ImageRgba8(rgba)
    }
}
