use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use logopress_core::AppError;
use std::io::Cursor;

/// A decoded upload together with its sniffed on-disk format.
#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Decode an uploaded file, sniffing the format from its magic bytes.
///
/// The client-supplied content type is never trusted. A payload whose
/// magic bytes match no known image format is rejected as not an image;
/// a recognized format that then fails to decode is a processing error.
pub fn decode(data: &[u8]) -> Result<DecodedImage, AppError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| AppError::Internal(format!("format sniffing failed: {e}")))?;

    let format = reader.format().ok_or(AppError::NotAnImage)?;

    let image = reader
        .decode()
        .map_err(|e| AppError::ImageProcessing(format!("failed to decode image: {e}")))?;

    Ok(DecodedImage { image, format })
}

/// Pre-allocation estimate for the encode buffer, three bytes per pixel.
fn estimated_rgb_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Encode an image back into its original format.
pub fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Bytes, AppError> {
    let estimated_size = estimated_rgb_size(img.width(), img.height());
    let mut buffer = Vec::with_capacity(estimated_size);
    let mut cursor = Cursor::new(&mut buffer);

    // JPEG has no alpha channel; flatten to RGB before encoding.
    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut cursor, format)
    } else {
        img.write_to(&mut cursor, format)
    };
    result.map_err(|e| AppError::ImageProcessing(format!("failed to encode image: {e}")))?;

    Ok(Bytes::from(buffer))
}
