//! Branding pipeline - chains the image transformations in request order.

use crate::assets::BrandingAssets;
use crate::image::codec;
use crate::image::darken::Darken;
use crate::image::logo::LogoComposite;
use crate::image::resize::ImageResize;
use crate::image::text::TextOverlay;
use bytes::Bytes;
use image::ImageFormat;
use logopress_core::{AppError, RawOptions, TransformOptions};

/// Final pipeline output: encoded bytes in the upload's own format.
#[derive(Debug)]
pub struct BrandedImage {
    pub data: Bytes,
    pub format: ImageFormat,
}

/// Applies the branding transformations in a fixed order:
///
/// 1. Decode and sniff the upload
/// 2. Validate size options
/// 3. Resize (if requested)
/// 4. Darken
/// 5. Text overlay
/// 6. Logo composite (always)
/// 7. Re-encode in the sniffed format
///
/// Decoding runs before option validation so that a non-image payload
/// reports 415 even when its size options are also malformed.
pub struct ImagePipeline;

impl ImagePipeline {
    pub fn run(
        data: &[u8],
        raw_options: RawOptions,
        assets: &BrandingAssets,
    ) -> Result<BrandedImage, AppError> {
        let decoded = codec::decode(data)?;
        let format = decoded.format;
        let mut img = decoded.image;

        let options = TransformOptions::from_raw(raw_options)?;

        if let Some(size) = options.size {
            tracing::debug!(width = size.width, height = size.height, "Resizing image");
            img = ImageResize::fit(&img, size);
        }

        if options.darken {
            tracing::debug!("Darkening image");
            img = Darken::apply(img);
        }

        if let Some(ref text) = options.text {
            tracing::debug!(text = %text, "Drawing text overlay");
            img = TextOverlay::apply(
                img,
                text,
                &assets.font,
                options.text_color,
                options.text_size,
            );
        }

        tracing::debug!(position = ?options.logo_position, "Compositing logo");
        img = LogoComposite::apply(img, assets.logo(options.logo_color), options.logo_position);

        let encoded = codec::encode(&img, format)?;
        Ok(BrandedImage {
            data: encoded,
            format,
        })
    }
}
