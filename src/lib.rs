//! candle-chart: responsive OHLCV candlestick rendering.
//!
//! Pure geometry (scales, windowing, time labels, candle and volume
//! projection) lives in [`core`]. Renderers in [`render`] draw through an
//! explicit [`render::DrawingSurface`] handle, and [`api::ChartSurface`]
//! orchestrates full redraws on data arrival and viewport resize.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartSurface};
pub use error::{ChartError, ChartResult};
