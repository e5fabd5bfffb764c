use crate::core::{SurfaceGeometry, WindowDensity};
use crate::error::ChartResult;
use crate::render::{ChartStyle, DrawingSurface};

/// Draws one vertical gridline per interval, `spacing_px` apart from x = 0.
///
/// Lines run from the top padding to `height - bottom_padding`. Returns the
/// number of lines stroked.
pub fn draw_grid<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    geometry: SurfaceGeometry,
    density: WindowDensity,
    spacing_px: f64,
    style: ChartStyle,
) -> ChartResult<usize> {
    let top = style.top_padding_px;
    let bottom = geometry.height_px() - style.bottom_padding_px;

    surface.set_stroke_style(style.grid_color, style.grid_line_width_px);
    let mut drawn = 0;
    for index in 0..density.grid_line_count() {
        let x = index as f64 * spacing_px;
        surface.begin_path();
        surface.move_to(x, top);
        surface.line_to(x, bottom);
        surface.stroke()?;
        drawn += 1;
    }
    Ok(drawn)
}
