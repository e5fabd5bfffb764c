pub mod candlestick;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod time_axis;
pub mod types;
pub mod volume;
pub mod windowing;

pub use candlestick::{CandleGeometry, CandleLayout, project_candles, right_anchor_x};
pub use scale::{MIN_DOMAIN_SPAN, ScaleMapper, ValueRange, map_inverted};
pub use series::{TradeSample, TradeSeries};
pub use time_axis::{LabelClock, TimeAxisFormatter, TimeLabel, TimeLabels, format_hh_mm};
pub use types::SurfaceGeometry;
pub use volume::{VolumeBand, VolumeBar, project_volume_bar};
pub use windowing::{VisibleWindow, WindowDensity, WindowSelector};
