use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::SurfaceGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, TextHAlign};

#[derive(Debug)]
enum CairoTarget {
    /// Offscreen surface owned and resized by this backend.
    Image(ImageSurface),
    /// Context borrowed from a host draw callback; the host owns its size.
    External,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Supports two modes:
/// - an owned offscreen image surface, resized on every clear and exportable
///   as PNG
/// - an external Cairo context (for example a GTK `DrawingArea` callback)
#[derive(Debug)]
pub struct CairoSurface {
    target: CairoTarget,
    context: Context,
    geometry: SurfaceGeometry,
    clear_color: Color,
    stroke_color: Color,
    line_width: f64,
    fill_color: Color,
    global_alpha: f64,
}

impl CairoSurface {
    pub fn new(geometry: SurfaceGeometry) -> ChartResult<Self> {
        let (surface, context) = create_image_target(geometry)?;
        Ok(Self::with_target(
            CairoTarget::Image(surface),
            context,
            geometry,
        ))
    }

    /// Wraps a context supplied by the host, sized by the host.
    #[must_use]
    pub fn for_context(context: Context, geometry: SurfaceGeometry) -> Self {
        Self::with_target(CairoTarget::External, context, geometry)
    }

    fn with_target(target: CairoTarget, context: Context, geometry: SurfaceGeometry) -> Self {
        Self {
            target,
            context,
            geometry,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            fill_color: Color::rgb(0.0, 0.0, 0.0),
            global_alpha: 1.0,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Offscreen image surface, `None` when drawing into a host context.
    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        match &self.target {
            CairoTarget::Image(surface) => Some(surface),
            CairoTarget::External => None,
        }
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Encodes the offscreen surface as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        let CairoTarget::Image(surface) = &self.target else {
            return Err(ChartError::Backend(
                "png export requires an offscreen surface".to_owned(),
            ));
        };
        surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn apply_color(&self, color: Color) {
        let color = color.with_alpha_factor(self.global_alpha);
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn text_layout(&self, text: &str, font_size_px: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {font_size_px}px"));
        layout.set_font_description(Some(&font_description));
        layout.set_text(text);
        layout
    }
}

impl DrawingSurface for CairoSurface {
    fn clear(&mut self, geometry: SurfaceGeometry) -> ChartResult<()> {
        let geometry = geometry.validate()?;
        if matches!(self.target, CairoTarget::Image(_)) && geometry != self.geometry {
            let (surface, context) = create_image_target(geometry)?;
            self.target = CairoTarget::Image(surface);
            self.context = context;
        }
        self.geometry = geometry;
        self.global_alpha = 1.0;
        self.context.new_path();
        self.context.set_source_rgba(
            self.clear_color.red,
            self.clear_color.green,
            self.clear_color.blue,
            self.clear_color.alpha,
        );
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn set_stroke_style(&mut self, color: Color, line_width: f64) {
        self.stroke_color = color;
        self.line_width = line_width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.global_alpha = alpha;
        }
    }

    fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.apply_color(self.stroke_color);
        self.context.set_line_width(self.line_width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.context.new_path();
        self.context.rectangle(x, y, width, height);
        self.apply_color(self.fill_color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn measure_text(&mut self, text: &str, font_size_px: f64) -> f64 {
        let (width, _height) = self.text_layout(text, font_size_px).pixel_size();
        f64::from(width)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
    ) -> ChartResult<()> {
        let layout = self.text_layout(text, font_size_px);
        let (text_width, _text_height) = layout.pixel_size();
        let left = match h_align {
            TextHAlign::Left => x,
            TextHAlign::Center => x - f64::from(text_width) / 2.0,
            TextHAlign::Right => x - f64::from(text_width),
        };
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        self.apply_color(self.fill_color);
        self.context.move_to(left, y - baseline);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        Ok(())
    }
}

fn create_image_target(geometry: SurfaceGeometry) -> ChartResult<(ImageSurface, Context)> {
    let geometry = geometry.validate()?;
    let width = i32::try_from(geometry.width)
        .map_err(|_| ChartError::Backend("surface width overflows i32".to_owned()))?;
    let height = i32::try_from(geometry.height)
        .map_err(|_| ChartError::Backend("surface height overflows i32".to_owned()))?;
    let surface = ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
    let context = Context::new(&surface)
        .map_err(|err| map_backend_error("failed to create cairo context", err))?;
    Ok((surface, context))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
