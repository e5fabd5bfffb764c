use serde::{Deserialize, Serialize};

use crate::core::SurfaceGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, strokes and paddings shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub top_padding_px: f64,
    pub bottom_padding_px: f64,
    pub grid_color: Color,
    pub grid_line_width_px: f64,
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub wick_width_px: f64,
    pub volume_alpha: f64,
    pub time_label_color: Color,
    pub time_label_font_size_px: f64,
    /// Distance from the surface bottom to the label baseline.
    pub time_label_baseline_offset_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            top_padding_px: 10.0,
            bottom_padding_px: 30.0,
            grid_color: Color::rgb8(0xdd, 0xdd, 0xdd),
            grid_line_width_px: 1.0,
            bullish_color: Color::rgb8(0x00, 0x80, 0x00),
            bearish_color: Color::rgb8(0xff, 0x33, 0x00),
            wick_width_px: 1.0,
            volume_alpha: 0.5,
            time_label_color: Color::rgb8(0x33, 0x33, 0x33),
            time_label_font_size_px: 11.0,
            time_label_baseline_offset_px: 10.0,
        }
    }
}

impl ChartStyle {
    /// Height prices are mapped into: everything above the bottom padding.
    #[must_use]
    pub fn drawable_height(self, geometry: SurfaceGeometry) -> f64 {
        (geometry.height_px() - self.bottom_padding_px).max(0.0)
    }

    #[must_use]
    pub fn candle_color(self, is_bullish: bool) -> Color {
        if is_bullish {
            self.bullish_color
        } else {
            self.bearish_color
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top padding", self.top_padding_px),
            ("bottom padding", self.bottom_padding_px),
            ("time label baseline offset", self.time_label_baseline_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("grid line width", self.grid_line_width_px),
            ("wick width", self.wick_width_px),
            ("time label font size", self.time_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.volume_alpha.is_finite() || !(0.0..=1.0).contains(&self.volume_alpha) {
            return Err(ChartError::InvalidData(
                "volume alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        for color in [
            self.grid_color,
            self.bullish_color,
            self.bearish_color,
            self.time_label_color,
        ] {
            color.validate()?;
        }
        Ok(self)
    }
}
