use ab_glyph::FontVec;
use anyhow::Context;
use image::DynamicImage;
use logopress_core::LogoColor;
use std::path::Path;

/// Font and logo images loaded once at startup and shared across requests.
pub struct BrandingAssets {
    pub font: FontVec,
    logo_black: DynamicImage,
    logo_white: DynamicImage,
}

impl BrandingAssets {
    /// Load the overlay font and both logo variants from `assets_dir`.
    pub fn load(assets_dir: &Path) -> Result<Self, anyhow::Error> {
        let font_path = assets_dir.join("DejaVuSans.ttf");
        let font_data = std::fs::read(&font_path)
            .with_context(|| format!("failed to read font {}", font_path.display()))?;
        let font = FontVec::try_from_vec(font_data)
            .with_context(|| format!("failed to parse font {}", font_path.display()))?;

        Ok(BrandingAssets {
            font,
            logo_black: load_logo(assets_dir, "logo-black.png")?,
            logo_white: load_logo(assets_dir, "logo-white.png")?,
        })
    }

    pub fn logo(&self, color: LogoColor) -> &DynamicImage {
        match color {
            LogoColor::Black => &self.logo_black,
            LogoColor::White => &self.logo_white,
        }
    }
}

fn load_logo(assets_dir: &Path, file_name: &str) -> Result<DynamicImage, anyhow::Error> {
    let path = assets_dir.join(file_name);
    image::open(&path).with_context(|| format!("failed to load logo {}", path.display()))
}
