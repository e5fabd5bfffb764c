use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed trade series: `{field}` has {actual} samples, expected {expected}")]
    MalformedSeries {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("trade data unavailable: {0}")]
    DataUnavailable(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
