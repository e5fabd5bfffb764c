use crate::core::SurfaceGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LinePrimitive, RectPrimitive, TextPrimitive};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameCommand {
    Clear(SurfaceGeometry),
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic, ordered record of one chart draw pass.
///
/// Primitive colors carry the global alpha that was active when they were
/// drawn, so the frame replays identically on any surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub geometry: SurfaceGeometry,
    pub commands: Vec<FrameCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self {
            geometry,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: FrameCommand) {
        self.commands.push(command);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            FrameCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            FrameCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            FrameCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.geometry.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }

        for command in &self.commands {
            match command {
                FrameCommand::Clear(geometry) => {
                    geometry.validate()?;
                }
                FrameCommand::Line(line) => line.validate()?,
                FrameCommand::Rect(rect) => rect.validate()?,
                FrameCommand::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    /// `true` when nothing but clears were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands
            .iter()
            .all(|command| matches!(command, FrameCommand::Clear(_)))
    }

    /// Replays every command, in order, onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<()> {
        let restore_alpha = surface.global_alpha();
        surface.set_global_alpha(1.0);
        for command in &self.commands {
            match command {
                FrameCommand::Clear(geometry) => surface.clear(*geometry)?,
                FrameCommand::Line(line) => {
                    surface.set_stroke_style(line.color, line.stroke_width);
                    surface.begin_path();
                    surface.move_to(line.x1, line.y1);
                    surface.line_to(line.x2, line.y2);
                    surface.stroke()?;
                }
                FrameCommand::Rect(rect) => {
                    surface.set_fill_color(rect.fill_color);
                    surface.fill_rect(rect.x, rect.y, rect.width, rect.height)?;
                }
                FrameCommand::Text(text) => {
                    surface.set_fill_color(text.color);
                    surface.fill_text(&text.text, text.x, text.y, text.font_size_px, text.h_align)?;
                }
            }
        }
        surface.set_global_alpha(restore_alpha);
        Ok(())
    }
}
