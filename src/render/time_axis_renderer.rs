use crate::core::{SurfaceGeometry, TimeLabel};
use crate::error::ChartResult;
use crate::render::{ChartStyle, DrawingSurface, TextHAlign};

/// Fills each label centered on its grid slot along the bottom row.
///
/// Labels are nudged inward when their measured width would cross a surface
/// edge. Returns the number of labels drawn.
pub fn draw_time_labels<S, I>(
    surface: &mut S,
    geometry: SurfaceGeometry,
    labels: I,
    spacing_px: f64,
    style: ChartStyle,
) -> ChartResult<usize>
where
    S: DrawingSurface + ?Sized,
    I: IntoIterator<Item = TimeLabel>,
{
    let baseline = geometry.height_px() - style.time_label_baseline_offset_px;
    let surface_width = geometry.width_px();

    surface.set_fill_color(style.time_label_color);
    let mut drawn = 0;
    for label in labels {
        let half_width = surface.measure_text(&label.text, style.time_label_font_size_px) / 2.0;
        let slot_x = label.slot as f64 * spacing_px;
        let x = if surface_width > 2.0 * half_width {
            slot_x.clamp(half_width, surface_width - half_width)
        } else {
            surface_width / 2.0
        };
        surface.fill_text(
            &label.text,
            x,
            baseline,
            style.time_label_font_size_px,
            TextHAlign::Center,
        )?;
        drawn += 1;
    }
    Ok(drawn)
}
