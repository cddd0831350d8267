use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{DynamicImage, Rgba};
use imageproc::drawing::{draw_text_mut, text_size};
use logopress_core::{TextColor, TextSize};

/// Text overlay drawn into a box spanning the middle 80% of the image
/// width and the full image height, centered both ways.
pub struct TextOverlay;

impl TextOverlay {
    pub fn apply(
        img: DynamicImage,
        text: &str,
        font: &FontVec,
        color: TextColor,
        size: TextSize,
    ) -> DynamicImage {
        let mut rgba = img.to_rgba8();
        let (img_width, img_height) = rgba.dimensions();

        let scale = PxScale::from(size.points());
        let box_x = (img_width as f32 * 0.1).round() as i32;
        let box_width = (img_width as f32 * 0.8).round() as u32;

        let lines = wrap_lines(text, font, scale, box_width);
        if lines.is_empty() {
            return DynamicImage::ImageRgba8(rgba);
        }

        let line_height = font.as_scaled(scale).height().ceil() as i32;
        let block_height = line_height * lines.len() as i32;
        let mut y = ((img_height as i32 - block_height) / 2).max(0);

        let pixel = Rgba(color.rgba());
        for line in &lines {
            let (line_width, _) = text_size(scale, font, line);
            let x = box_x + ((box_width as i32 - line_width as i32) / 2).max(0);
            draw_text_mut(&mut rgba, pixel, x, y, scale, font, line);
            y += line_height;
        }

        DynamicImage::ImageRgba8(rgba)
    }
}

/// Greedy word wrap against the box width. A single word wider than the
/// box gets its own line and is allowed to overflow.
fn wrap_lines(text: &str, font: &FontVec, scale: PxScale, box_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        let (candidate_width, _) = text_size(scale, font, &candidate);
        if i64::from(candidate_width) <= i64::from(box_width) || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
