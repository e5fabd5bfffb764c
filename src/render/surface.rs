use crate::core::SurfaceGeometry;
use crate::error::ChartResult;
use crate::render::{Color, TextHAlign};

/// Drawing capability handed to every renderer call.
///
/// The set mirrors a 2D canvas context: path stroking, filled rectangles,
/// text measurement and fill, a global alpha, and a full clear. Any backend
/// offering these primitives can host the chart.
pub trait DrawingSurface {
    /// Resizes the surface to `geometry` and wipes every pixel.
    fn clear(&mut self, geometry: SurfaceGeometry) -> ChartResult<()>;

    fn set_stroke_style(&mut self, color: Color, line_width: f64);

    fn set_fill_color(&mut self, color: Color);

    /// Multiplies the alpha of every following draw call.
    fn set_global_alpha(&mut self, alpha: f64);

    fn global_alpha(&self) -> f64;

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path with the current stroke style.
    fn stroke(&mut self) -> ChartResult<()>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;

    /// Advance width of `text` in pixels at `font_size_px`.
    fn measure_text(&mut self, text: &str, font_size_px: f64) -> f64;

    /// Fills `text` with the current fill color; `y` is the baseline.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
    ) -> ChartResult<()>;
}

/// Deterministic, backend-independent advance-width estimate.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            ':' | '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}
