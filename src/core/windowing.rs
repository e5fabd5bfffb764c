use serde::{Deserialize, Serialize};

use crate::core::{TradeSample, TradeSeries, ValueRange};

/// Reference layout that candle density is scaled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSelector {
    pub reference_width_px: f64,
    pub reference_candle_count: f64,
    pub reference_intervals: f64,
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self {
            reference_width_px: 800.0,
            reference_candle_count: 70.0,
            reference_intervals: 10.0,
        }
    }
}

/// Width-derived candle and grid density for one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowDensity {
    pub candle_count: usize,
    pub intervals: f64,
}

impl WindowDensity {
    /// Grid lines drawn at `0, 1, ..` while the index stays below `intervals`.
    #[must_use]
    pub fn grid_line_count(self) -> usize {
        ceil_to_count(self.intervals)
    }

    /// Upper bound on time labels; the interval touching the origin stays unlabeled.
    #[must_use]
    pub fn max_time_labels(self) -> usize {
        ceil_to_count(self.intervals - 1.0)
    }
}

fn ceil_to_count(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.ceil() as usize
}

impl WindowSelector {
    /// `round((width / reference_width) * reference_candle_count)`.
    #[must_use]
    pub fn candle_count(self, width: u32) -> usize {
        let count = (self.width_ratio(width) * self.reference_candle_count).round();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    /// `(width / reference_width) * reference_intervals`, kept fractional.
    #[must_use]
    pub fn intervals(self, width: u32) -> f64 {
        self.width_ratio(width) * self.reference_intervals
    }

    #[must_use]
    pub fn density(self, width: u32) -> WindowDensity {
        WindowDensity {
            candle_count: self.candle_count(width),
            intervals: self.intervals(width),
        }
    }

    /// Horizontal distance between grid lines; independent of width.
    #[must_use]
    pub fn grid_spacing_px(self) -> f64 {
        self.reference_width_px / self.reference_intervals
    }

    /// Trailing `candle_count` samples of `series`, or all of them when shorter.
    #[must_use]
    pub fn select<'a>(self, series: &'a TradeSeries, width: u32) -> VisibleWindow<'a> {
        VisibleWindow::trailing(series, self.candle_count(width))
    }

    fn width_ratio(self, width: u32) -> f64 {
        f64::from(width) / self.reference_width_px
    }
}

fn trailing<T>(values: &[T], count: usize) -> &[T] {
    &values[values.len().saturating_sub(count)..]
}

/// Borrowed trailing slice of every sequence in a [`TradeSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleWindow<'a> {
    timestamps: &'a [i64],
    open: &'a [f64],
    close: &'a [f64],
    high: &'a [f64],
    low: &'a [f64],
    volume: &'a [f64],
}

impl<'a> VisibleWindow<'a> {
    #[must_use]
    pub fn trailing(series: &'a TradeSeries, count: usize) -> Self {
        Self {
            timestamps: trailing(series.timestamps(), count),
            open: trailing(series.open(), count),
            close: trailing(series.close(), count),
            high: trailing(series.high(), count),
            low: trailing(series.low(), count),
            volume: trailing(series.volume(), count),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    #[must_use]
    pub fn timestamps(&self) -> &'a [i64] {
        self.timestamps
    }

    #[must_use]
    pub fn volume(&self) -> &'a [f64] {
        self.volume
    }

    /// Sample at `index`, counted from the oldest sample in the window.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<TradeSample> {
        Some(TradeSample {
            time: *self.timestamps.get(index)?,
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Samples from the most recent to the oldest.
    pub fn newest_first(self) -> impl Iterator<Item = TradeSample> + 'a {
        (0..self.len())
            .rev()
            .filter_map(move |index| self.sample(index))
    }

    /// Extent of high, low, open and close combined.
    #[must_use]
    pub fn price_range(&self) -> Option<ValueRange> {
        ValueRange::from_values(
            self.high
                .iter()
                .chain(self.low)
                .chain(self.open)
                .chain(self.close)
                .copied(),
        )
    }

    /// Extent of the volume sequence alone.
    #[must_use]
    pub fn volume_range(&self) -> Option<ValueRange> {
        ValueRange::from_values(self.volume.iter().copied())
    }
}
