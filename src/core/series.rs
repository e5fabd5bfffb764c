use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

/// One OHLCV row of a [`TradeSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeSample {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl TradeSample {
    pub fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> ChartResult<Self> {
        Ok(Self {
            time,
            open: ensure_finite(open, "open")?,
            high: ensure_finite(high, "high")?,
            low: ensure_finite(low, "low")?,
            close: ensure_finite(close, "close")?,
            volume: ensure_finite(volume, "volume")?,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a sample.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            decimal_to_f64(volume, "volume")?,
        )
    }

    /// `close > open` is bullish; equality falls on the bearish side.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close - self.open > 0.0
    }
}

/// Full dataset for one instrument, stored as parallel arrays.
///
/// Index `0` is the oldest sample and the last index the most recent. All
/// sequences share one length; construction rejects anything else.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawTradeSeries")]
pub struct TradeSeries {
    timestamps: Vec<i64>,
    open: Vec<f64>,
    close: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    volume: Vec<f64>,
}

impl TradeSeries {
    pub fn new(
        timestamps: Vec<i64>,
        open: Vec<f64>,
        close: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        volume: Vec<f64>,
    ) -> ChartResult<Self> {
        let expected = timestamps.len();
        for (field, values) in [
            ("open", &open),
            ("close", &close),
            ("high", &high),
            ("low", &low),
            ("volume", &volume),
        ] {
            if values.len() != expected {
                return Err(ChartError::MalformedSeries {
                    field,
                    expected,
                    actual: values.len(),
                });
            }
            if let Some(index) = values.iter().position(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "`{field}` sample {index} must be finite"
                )));
            }
        }

        Ok(Self {
            timestamps,
            open,
            close,
            high,
            low,
            volume,
        })
    }

    /// Builds parallel arrays from row samples, oldest first.
    ///
    /// Samples may be struct literals, so every value is checked again.
    pub fn from_samples(samples: &[TradeSample]) -> ChartResult<Self> {
        let mut series = Self::with_capacity(samples.len());
        for (index, sample) in samples.iter().enumerate() {
            for (field, value) in [
                ("open", sample.open),
                ("high", sample.high),
                ("low", sample.low),
                ("close", sample.close),
                ("volume", sample.volume),
            ] {
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "`{field}` sample {index} must be finite"
                    )));
                }
            }
            series.timestamps.push(sample.time);
            series.open.push(sample.open);
            series.close.push(sample.close);
            series.high.push(sample.high);
            series.low.push(sample.low);
            series.volume.push(sample.volume);
        }
        Ok(series)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            open: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
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
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    #[must_use]
    pub fn open(&self) -> &[f64] {
        &self.open
    }

    #[must_use]
    pub fn close(&self) -> &[f64] {
        &self.close
    }

    #[must_use]
    pub fn high(&self) -> &[f64] {
        &self.high
    }

    #[must_use]
    pub fn low(&self) -> &[f64] {
        &self.low
    }

    #[must_use]
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

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

    /// Most recent sample, if any.
    #[must_use]
    pub fn latest(&self) -> Option<TradeSample> {
        self.len().checked_sub(1).and_then(|index| self.sample(index))
    }
}

/// Wire shape accepted from data collaborators.
///
/// Both UDF-style short keys and descriptive long keys are accepted.
#[derive(Debug, Deserialize)]
struct RawTradeSeries {
    #[serde(alias = "t")]
    timestamps: Vec<i64>,
    #[serde(alias = "o")]
    open: Vec<f64>,
    #[serde(alias = "c")]
    close: Vec<f64>,
    #[serde(alias = "h")]
    high: Vec<f64>,
    #[serde(alias = "l")]
    low: Vec<f64>,
    #[serde(alias = "v")]
    volume: Vec<f64>,
}

impl TryFrom<RawTradeSeries> for TradeSeries {
    type Error = ChartError;

    fn try_from(raw: RawTradeSeries) -> ChartResult<Self> {
        Self::new(
            raw.timestamps,
            raw.open,
            raw.close,
            raw.high,
            raw.low,
            raw.volume,
        )
    }
}

impl TradeSeries {
    /// Parses the JSON document served by a data collaborator.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::DataUnavailable(format!("failed to parse trade series json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize trade series: {e}"))
        })
    }
}
