use crate::core::VolumeBar;
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface};

/// Fills one volume bar at `alpha`, then restores full opacity.
///
/// The alpha toggle is scoped to this call; the surface leaves it at `1.0`.
pub fn draw_volume_bar<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    bar: VolumeBar,
    color: Color,
    alpha: f64,
) -> ChartResult<()> {
    surface.set_global_alpha(alpha);
    surface.set_fill_color(color);
    let filled = surface.fill_rect(bar.x, bar.y_top, bar.width, bar.height);
    surface.set_global_alpha(1.0);
    filled
}
