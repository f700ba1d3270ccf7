//! The triangular pointer drawn between a tooltip and its anchor.

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use crate::error::AnchorTipError;

/// Packed 0xAARRGGBB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const BLACK: Color = Color(0xff00_0000);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Tip of the tooltip, drawn as an isosceles triangle.
///
/// `width` is the length of the base, `height` the perpendicular distance from
/// the base to the apex. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTip", into = "RawTip")]
pub struct Tip {
    width: i32,
    height: i32,
    color: Color,
    corner_radius: i32,
}

impl Tip {
    /// Create a tip with sharp corners.
    pub fn new(width: i32, height: i32, color: Color) -> Result<Self, AnchorTipError> {
        Self::with_corner_radius(width, height, color, 0)
    }

    /// Create a tip whose corners are rounded by `corner_radius` pixels.
    pub fn with_corner_radius(
        width: i32,
        height: i32,
        color: Color,
        corner_radius: i32,
    ) -> Result<Self, AnchorTipError> {
        if width < 0 || height < 0 {
            return Err(AnchorTipError::invalid_tip(format!(
                "tip dimensions must be non-negative, got {width}x{height}"
            )));
        }
        if corner_radius < 0 {
            return Err(AnchorTipError::invalid_tip(format!(
                "tip corner radius must be non-negative, got {corner_radius}"
            )));
        }
        Ok(Self { width, height, color, corner_radius })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn corner_radius(&self) -> i32 {
        self.corner_radius
    }

    /// Paint settings used to fill this tip.
    pub fn paint(&self) -> TipPaint {
        TipPaint {
            color: self.color,
            stroke_width: self.corner_radius as f32,
            round_joins: self.corner_radius > 0,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawTip {
    width: i32,
    height: i32,
    #[serde(default)]
    color: Color,
    #[serde(default)]
    corner_radius: i32,
}

impl TryFrom<RawTip> for Tip {
    type Error = AnchorTipError;

    fn try_from(raw: RawTip) -> Result<Self, Self::Error> {
        Tip::with_corner_radius(raw.width, raw.height, raw.color, raw.corner_radius)
    }
}

impl From<Tip> for RawTip {
    fn from(tip: Tip) -> Self {
        RawTip {
            width: tip.width,
            height: tip.height,
            color: tip.color,
            corner_radius: tip.corner_radius,
        }
    }
}

/// Fill style for a tip path.
///
/// The triangle is filled and stroked; a positive stroke width with round
/// joins softens the corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipPaint {
    pub color: Color,
    pub stroke_width: f32,
    pub round_joins: bool,
}

/// Resolved outline of a tip in overlay coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipPath {
    /// Vertex pointing at the anchor.
    pub apex: Point,
    pub base_start: Point,
    pub base_end: Point,
}
