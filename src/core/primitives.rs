use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Whole Unix seconds; sub-second precision is truncated toward the past.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

pub(crate) fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Ok(value)
}
