use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{ScaleMapper, TradeSample, VisibleWindow};

/// Horizontal candle metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleLayout {
    pub pitch_px: f64,
    pub body_width_px: f64,
    pub anchor_step_px: f64,
    pub min_body_height_px: f64,
}

impl Default for CandleLayout {
    fn default() -> Self {
        Self {
            pitch_px: 10.0,
            body_width_px: 8.0,
            anchor_step_px: 80.0,
            min_body_height_px: 1.0,
        }
    }
}

/// X of the newest candle's wick: `floor((width - 1) / step) * step`.
///
/// The newest candle snaps to a step-aligned column instead of the literal
/// surface edge, which keeps it stable while the width changes by less than
/// one step.
#[must_use]
pub fn right_anchor_x(width: u32, step_px: f64) -> f64 {
    let usable = f64::from(width.saturating_sub(1));
    (usable / step_px).floor() * step_px
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    /// Distance from the newest candle, in samples.
    pub steps_back: usize,
    pub body_left: f64,
    pub center_x: f64,
    pub body_top: f64,
    /// Rendered height, never below the layout minimum.
    pub body_height: f64,
    pub open_y: f64,
    pub close_y: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

impl CandleGeometry {
    /// Unclamped `open_y - close_y`; positive when the candle is bullish.
    #[must_use]
    pub fn signed_body_height(&self) -> f64 {
        self.open_y - self.close_y
    }
}

/// Projects a visible window into candle geometry, newest candle first.
///
/// The function is pure so the same geometry feeds both rendering and
/// regression tests.
#[must_use]
pub fn project_candles(
    window: VisibleWindow<'_>,
    price_scale: ScaleMapper,
    layout: CandleLayout,
    surface_width: u32,
) -> Vec<CandleGeometry> {
    let anchor_x = right_anchor_x(surface_width, layout.anchor_step_px);

    #[cfg(feature = "parallel-projection")]
    {
        let samples: Vec<TradeSample> = window.newest_first().collect();
        samples
            .par_iter()
            .enumerate()
            .map(|(steps_back, sample)| {
                project_single_candle(*sample, steps_back, anchor_x, price_scale, layout)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        window
            .newest_first()
            .enumerate()
            .map(|(steps_back, sample)| {
                project_single_candle(sample, steps_back, anchor_x, price_scale, layout)
            })
            .collect()
    }
}

fn project_single_candle(
    sample: TradeSample,
    steps_back: usize,
    anchor_x: f64,
    price_scale: ScaleMapper,
    layout: CandleLayout,
) -> CandleGeometry {
    let center_x = anchor_x - steps_back as f64 * layout.pitch_px;
    let open_y = price_scale.map(sample.open);
    let close_y = price_scale.map(sample.close);
    let wick_top = price_scale.map(sample.high);
    let wick_bottom = price_scale.map(sample.low);

    CandleGeometry {
        steps_back,
        body_left: center_x - layout.body_width_px / 2.0,
        center_x,
        body_top: open_y.min(close_y),
        body_height: (open_y - close_y).abs().max(layout.min_body_height_px),
        open_y,
        close_y,
        wick_top: wick_top.min(wick_bottom),
        wick_bottom: wick_top.max(wick_bottom),
        is_bullish: sample.is_bullish(),
    }
}
