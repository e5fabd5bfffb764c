use smallvec::SmallVec;

use crate::core::SurfaceGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::surface::estimate_text_width_px;
use crate::render::{
    Color, DrawingSurface, FrameCommand, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

type Segment = ((f64, f64), (f64, f64));

/// Headless surface that records draw calls into a [`RenderFrame`].
///
/// Used by tests and by hosts that paint the recorded frame later. Geometry
/// is still validated so invalid coordinates surface before a real backend
/// sees them.
#[derive(Debug)]
pub struct RecordingSurface {
    frame: RenderFrame,
    stroke_color: Color,
    line_width: f64,
    fill_color: Color,
    global_alpha: f64,
    cursor: Option<(f64, f64)>,
    path: SmallVec<[Segment; 4]>,
    clear_count: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            frame: RenderFrame::new(SurfaceGeometry::new(0, 0)),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            global_alpha: 1.0,
            cursor: None,
            path: SmallVec::new(),
            clear_count: 0,
        }
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    /// Number of clears seen over the surface lifetime.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    fn ensure_cleared(&self) -> ChartResult<()> {
        if self.clear_count == 0 {
            return Err(ChartError::InvalidData(
                "surface must be cleared before drawing".to_owned(),
            ));
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, geometry: SurfaceGeometry) -> ChartResult<()> {
        let geometry = geometry.validate()?;
        self.frame = RenderFrame::new(geometry);
        self.frame.push(FrameCommand::Clear(geometry));
        self.cursor = None;
        self.path.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.stroke_color = color;
        self.line_width = line_width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        // Canvas semantics: out-of-range values are ignored.
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.global_alpha = alpha;
        }
    }

    fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    fn begin_path(&mut self) {
        self.cursor = None;
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(from) = self.cursor {
            self.path.push((from, (x, y)));
        }
        self.cursor = Some((x, y));
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.ensure_cleared()?;
        let color = self.stroke_color.with_alpha_factor(self.global_alpha);
        for &((x1, y1), (x2, y2)) in &self.path {
            let line = LinePrimitive::new(x1, y1, x2, y2, self.line_width, color);
            line.validate()?;
            self.frame.push(FrameCommand::Line(line));
        }
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.ensure_cleared()?;
        // Negative extents cover the same pixels as their mirrored form.
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 {
            (y + height, -height)
        } else {
            (y, height)
        };
        let rect = RectPrimitive::new(
            x,
            y,
            width,
            height,
            self.fill_color.with_alpha_factor(self.global_alpha),
        );
        rect.validate()?;
        self.frame.push(FrameCommand::Rect(rect));
        Ok(())
    }

    fn measure_text(&mut self, text: &str, font_size_px: f64) -> f64 {
        estimate_text_width_px(text, font_size_px)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
    ) -> ChartResult<()> {
        self.ensure_cleared()?;
        let primitive = TextPrimitive::new(
            text,
            x,
            y,
            font_size_px,
            self.fill_color.with_alpha_factor(self.global_alpha),
            h_align,
        );
        primitive.validate()?;
        self.frame.push(FrameCommand::Text(primitive));
        Ok(())
    }
}
