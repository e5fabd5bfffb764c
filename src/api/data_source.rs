use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::core::TradeSeries;
use crate::error::{ChartError, ChartResult};

/// Data collaborator that yields one trade series per fetch.
///
/// `on_complete` is `FnOnce`: a fetch reports exactly one success or one
/// failure and never both.
pub trait TradeSource {
    fn fetch_trade_series<F>(&self, on_complete: F)
    where
        F: FnOnce(ChartResult<TradeSeries>);
}

/// Serves an in-memory series; useful for tests and replay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticTradeSource {
    series: TradeSeries,
}

impl StaticTradeSource {
    #[must_use]
    pub fn new(series: TradeSeries) -> Self {
        Self { series }
    }
}

impl TradeSource for StaticTradeSource {
    fn fetch_trade_series<F>(&self, on_complete: F)
    where
        F: FnOnce(ChartResult<TradeSeries>),
    {
        on_complete(Ok(self.series.clone()));
    }
}

/// Reads a trade series JSON document from disk on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileTradeSource {
    path: PathBuf,
}

impl JsonFileTradeSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> ChartResult<TradeSeries> {
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            ChartError::DataUnavailable(format!("failed to read `{}`: {err}", self.path.display()))
        })?;
        let series = TradeSeries::from_json_str(&raw)?;
        debug!(path = %self.path.display(), samples = series.len(), "loaded trade series file");
        Ok(series)
    }
}

impl TradeSource for JsonFileTradeSource {
    fn fetch_trade_series<F>(&self, on_complete: F)
    where
        F: FnOnce(ChartResult<TradeSeries>),
    {
        on_complete(self.load());
    }
}

/// Fetches a trade series JSON document with a blocking HTTP GET.
#[cfg(feature = "http-source")]
#[derive(Debug, Clone)]
pub struct HttpTradeSource {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http-source")]
impl HttpTradeSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn load(&self) -> ChartResult<TradeSeries> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|err| {
                ChartError::DataUnavailable(format!("failed to fetch `{}`: {err}", self.url))
            })?;
        let series = TradeSeries::from_json_str(&body)?;
        debug!(url = %self.url, samples = series.len(), "fetched trade series");
        Ok(series)
    }
}

#[cfg(feature = "http-source")]
impl TradeSource for HttpTradeSource {
    fn fetch_trade_series<F>(&self, on_complete: F)
    where
        F: FnOnce(ChartResult<TradeSeries>),
    {
        on_complete(self.load());
    }
}
