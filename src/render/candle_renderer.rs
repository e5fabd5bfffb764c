use tracing::trace;

use crate::core::{
    CandleGeometry, CandleLayout, ScaleMapper, SurfaceGeometry, VisibleWindow, VolumeBand,
    project_candles, project_volume_bar,
};
use crate::error::ChartResult;
use crate::render::volume_renderer::draw_volume_bar;
use crate::render::{ChartStyle, DrawingSurface};

/// Strokes the wick, then fills the body over it.
pub fn draw_candle<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    candle: &CandleGeometry,
    layout: CandleLayout,
    style: ChartStyle,
) -> ChartResult<()> {
    let color = style.candle_color(candle.is_bullish);

    surface.set_stroke_style(color, style.wick_width_px);
    surface.begin_path();
    surface.move_to(candle.center_x, candle.wick_top);
    surface.line_to(candle.center_x, candle.wick_bottom);
    surface.stroke()?;

    surface.set_fill_color(color);
    surface.fill_rect(
        candle.body_left,
        candle.body_top,
        layout.body_width_px,
        candle.body_height,
    )
}

/// Draws every candle of `window` with its volume bar, right edge first.
///
/// Prices map into `[0, drawable_height]` over the combined high/low/open/close
/// extent of the window; volume is scaled over the window's own extrema.
/// Returns the number of candles drawn (zero for an empty window).
pub fn draw_candle_pass<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    window: VisibleWindow<'_>,
    geometry: SurfaceGeometry,
    layout: CandleLayout,
    volume_band: VolumeBand,
    style: ChartStyle,
) -> ChartResult<usize> {
    let (Some(price_range), Some(volume_range)) = (window.price_range(), window.volume_range())
    else {
        return Ok(0);
    };
    if price_range.is_degenerate() {
        trace!(price = price_range.min(), "flat price range in visible window");
    }

    let price_scale = ScaleMapper::new(price_range, 0.0, style.drawable_height(geometry));
    let candles = project_candles(window, price_scale, layout, geometry.width);

    for (candle, volume) in candles.iter().zip(window.volume().iter().rev()) {
        draw_candle(surface, candle, layout, style)?;
        let bar = project_volume_bar(
            *volume,
            volume_range,
            volume_band,
            candle.body_left,
            layout.body_width_px,
        );
        draw_volume_bar(
            surface,
            bar,
            style.candle_color(candle.is_bullish),
            style.volume_alpha,
        )?;
    }
    Ok(candles.len())
}
