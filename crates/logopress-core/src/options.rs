//! Transform option parsing and validation.
//!
//! Options arrive as loosely-typed form fields. Enum-valued options never
//! fail: any unrecognized value silently falls back to its documented
//! default via `parse_or_default`. Width/height are the one exception -
//! partially set or out-of-range dimensions are a hard validation error.

use crate::error::AppError;

/// Smallest accepted output dimension, in pixels.
pub const MIN_DIMENSION: u32 = 1;
/// Largest accepted output dimension, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Text color for the overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Black,
    White,
}

impl TextColor {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("white") => TextColor::White,
            _ => TextColor::Black,
        }
    }

    pub fn rgba(self) -> [u8; 4] {
        match self {
            TextColor::Black => [0, 0, 0, 255],
            TextColor::White => [255, 255, 255, 255],
        }
    }
}

/// Point size of the overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("small") => TextSize::Small,
            Some("large") => TextSize::Large,
            _ => TextSize::Medium,
        }
    }

    pub fn points(self) -> f32 {
        match self {
            TextSize::Small => 20.0,
            TextSize::Medium => 30.0,
            TextSize::Large => 40.0,
        }
    }
}

/// Which logo variant to composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoColor {
    #[default]
    Black,
    White,
}

impl LogoColor {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("white") => LogoColor::White,
            _ => LogoColor::Black,
        }
    }
}

/// Corner anchor for logo placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl LogoPosition {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("top-left") => LogoPosition::TopLeft,
            Some("top-right") => LogoPosition::TopRight,
            Some("bottom-left") => LogoPosition::BottomLeft,
            _ => LogoPosition::BottomRight,
        }
    }
}

/// Requested output dimensions, validated to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

/// Raw form fields as received, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub width: Option<String>,
    pub height: Option<String>,
    pub darken: Option<String>,
    pub text: Option<String>,
    pub text_color: Option<String>,
    pub text_size: Option<String>,
    pub logo_color: Option<String>,
    pub logo_position: Option<String>,
}

/// Parsed, validated view over the raw request fields.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Target dimensions, or `None` to keep the original size.
    pub size: Option<OutputSize>,
    pub darken: bool,
    /// Overlay text; `None` when absent or empty.
    pub text: Option<String>,
    pub text_color: TextColor,
    pub text_size: TextSize,
    pub logo_color: LogoColor,
    pub logo_position: LogoPosition,
}

/// Empty strings count as absent, matching how HTML forms submit
/// unfilled fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_dimension(value: &str) -> Result<u32, AppError> {
    let parsed = value
        .parse::<u32>()
        .map_err(|_| AppError::SizeOptionsInvalid)?;
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&parsed) {
        return Err(AppError::SizeOptionsInvalid);
    }
    Ok(parsed)
}

impl TransformOptions {
    /// Validate and normalize raw form fields into transform options.
    ///
    /// Only the width/height pair can fail; every enum-valued field
    /// degrades silently to its default.
    pub fn from_raw(raw: RawOptions) -> Result<Self, AppError> {
        let size = match (non_empty(raw.width), non_empty(raw.height)) {
            (None, None) => None,
            (Some(_), None) | (None, Some(_)) => return Err(AppError::SizeOptionsIncomplete),
            (Some(width), Some(height)) => Some(OutputSize {
                width: parse_dimension(&width)?,
                height: parse_dimension(&height)?,
            }),
        };

        // Only the literal string "true" enables darkening.
        let darken = raw.darken.as_deref() == Some("true");

        Ok(TransformOptions {
            size,
            darken,
            text: non_empty(raw.text),
            text_color: TextColor::parse_or_default(raw.text_color.as_deref()),
            text_size: TextSize::parse_or_default(raw.text_size.as_deref()),
            logo_color: LogoColor::parse_or_default(raw.logo_color.as_deref()),
            logo_position: LogoPosition::parse_or_default(raw.logo_position.as_deref()),
        })
    }
}
