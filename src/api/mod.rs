mod chart_config;
mod chart_surface;
mod data_source;
mod events;

pub use chart_config::ChartConfig;
pub use chart_surface::{ChartState, ChartSurface, RedrawSummary};
#[cfg(feature = "http-source")]
pub use data_source::HttpTradeSource;
pub use data_source::{JsonFileTradeSource, StaticTradeSource, TradeSource};
pub use events::{ChartEvent, ChartEventHub, ChartObserver, SubscriptionId};
