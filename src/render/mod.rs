mod candle_renderer;
mod frame;
mod grid_renderer;
mod primitives;
mod recording_surface;
mod style;
mod surface;
mod time_axis_renderer;
mod volume_renderer;

pub use candle_renderer::{draw_candle, draw_candle_pass};
pub use frame::{FrameCommand, RenderFrame};
pub use grid_renderer::draw_grid;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use recording_surface::RecordingSurface;
pub use style::ChartStyle;
pub use surface::{DrawingSurface, estimate_text_width_px};
pub use time_axis_renderer::draw_time_labels;
pub use volume_renderer::draw_volume_bar;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
