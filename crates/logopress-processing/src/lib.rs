//! Image branding pipeline: decode, resize, darken, text overlay, logo
//! composite, re-encode.

pub mod assets;
pub mod image;

pub use assets::BrandingAssets;
pub use image::pipeline::{BrandedImage, ImagePipeline};
