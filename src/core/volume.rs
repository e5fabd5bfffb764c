use serde::{Deserialize, Serialize};

use crate::core::ValueRange;

/// Fixed-height strip that volume bars grow upward in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeBand {
    pub baseline_y: f64,
    pub height_px: f64,
}

impl Default for VolumeBand {
    fn default() -> Self {
        Self {
            baseline_y: 370.0,
            height_px: 60.0,
        }
    }
}

/// Deterministic rectangle for one volume bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBar {
    pub x: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales `value` against the window's largest volume into the band.
///
/// The largest bar fills `band.height_px` and the rest keep their ratio to
/// it. Negative or non-finite ratios collapse to an empty bar.
#[must_use]
pub fn project_volume_bar(
    value: f64,
    volume_range: ValueRange,
    band: VolumeBand,
    x: f64,
    width: f64,
) -> VolumeBar {
    let peak = volume_range.max();
    let ratio = if peak > 0.0 { value / peak } else { 0.0 };
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let height = ratio * band.height_px;
    VolumeBar {
        x,
        y_top: band.baseline_y - height,
        width,
        height,
    }
}
