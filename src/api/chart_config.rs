use serde::{Deserialize, Serialize};

use crate::core::{CandleLayout, LabelClock, TimeAxisFormatter, VolumeBand, WindowSelector};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartStyle;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist or load chart layout
/// without inventing their own format. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Fixed surface height; only the width follows the viewport.
    pub surface_height: u32,
    pub window: WindowSelector,
    pub candles: CandleLayout,
    pub volume_band: VolumeBand,
    pub time_label_stride: usize,
    pub time_label_clock: LabelClock,
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            surface_height: 400,
            window: WindowSelector::default(),
            candles: CandleLayout::default(),
            volume_band: VolumeBand::default(),
            time_label_stride: TimeAxisFormatter::DEFAULT_STRIDE,
            time_label_clock: LabelClock::default(),
            style: ChartStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_time_label_clock(mut self, clock: LabelClock) -> Self {
        self.time_label_clock = clock;
        self
    }

    #[must_use]
    pub fn with_surface_height(mut self, height: u32) -> Self {
        self.surface_height = height;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn time_axis_formatter(&self) -> TimeAxisFormatter {
        TimeAxisFormatter::new(self.time_label_clock, self.time_label_stride)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.surface_height == 0 {
            return Err(ChartError::InvalidViewport {
                width: 0,
                height: self.surface_height,
            });
        }

        let window = self.window;
        for (name, value) in [
            ("reference width", window.reference_width_px),
            ("reference candle count", window.reference_candle_count),
            ("reference intervals", window.reference_intervals),
            ("candle pitch", self.candles.pitch_px),
            ("candle body width", self.candles.body_width_px),
            ("anchor step", self.candles.anchor_step_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("minimum body height", self.candles.min_body_height_px),
            ("volume band height", self.volume_band.height_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.volume_band.baseline_y.is_finite() {
            return Err(ChartError::InvalidData(
                "volume baseline must be finite".to_owned(),
            ));
        }

        if self.time_label_stride == 0 {
            return Err(ChartError::InvalidData(
                "time label stride must be >= 1".to_owned(),
            ));
        }

        self.style.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}
