use rand::Rng;

use crate::coords::{Affine, Vec2, Viewport};
use crate::error::SetupError;
use crate::paint::Color;
use crate::render::{FrameSink, LineStripDraw};

use super::config::StripConfig;
use super::points::generate_points;
use super::vertices::VertexBuffer;

/// Result of a single `render` tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// One line-strip draw was recorded, submitted and presented.
    Presented,
    /// No drawable was available; the frame was dropped.
    Skipped,
    /// Fewer than two vertices; nothing to draw.
    Empty,
}

/// CPU side of the renderer: the fixed point set, its clip-space transform
/// and the vertex stream rebuilt on every tick.
///
/// Constructed once at setup; the point set never changes afterwards.
#[derive(Debug, Clone)]
pub struct LineStrip {
    points: Vec<Vec2>,
    transform: Affine,
    vertices: VertexBuffer,
    color: Color,
    clear: Color,
}

impl LineStrip {
    /// Generates the configured number of points and prepares the first
    /// vertex buffer for a view of `viewport` logical pixels.
    pub fn setup<R: Rng + ?Sized>(
        viewport: Viewport,
        config: &StripConfig,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        if !viewport.is_valid() {
            return Err(SetupError::invalid_view(viewport));
        }
        let points = generate_points(rng, config.point_count);
        Self::from_points(viewport, points, config)
    }

    /// Like [`setup`](Self::setup) with an explicit point set.
    pub fn from_points(
        viewport: Viewport,
        points: Vec<Vec2>,
        config: &StripConfig,
    ) -> Result<Self, SetupError> {
        if !viewport.is_valid() {
            return Err(SetupError::invalid_view(viewport));
        }

        let transform = Affine::logical_to_clip(viewport);
        let vertices = VertexBuffer::build(&points, transform);

        log::debug!(
            "line strip: {} points, {} floats, view {}x{}",
            points.len(),
            vertices.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            points,
            transform,
            vertices,
            color: Color::from(config.line_color),
            clear: Color::from(config.clear_color),
        })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn clear_color(&self) -> Color {
        self.clear
    }

    /// Draws one frame into `sink`.
    ///
    /// Order: degenerate check, vertex rebuild, acquire, one draw, present.
    /// A missing drawable returns [`FrameOutcome::Skipped`] without touching
    /// `encode` or `present`.
    pub fn render<S: FrameSink>(&mut self, sink: &mut S) -> FrameOutcome {
        if !self.vertices.has_segment() {
            return FrameOutcome::Empty;
        }

        self.vertices = VertexBuffer::build(&self.points, self.transform);

        let Some(mut frame) = sink.acquire() else {
            log::debug!("no drawable available; frame skipped");
            return FrameOutcome::Skipped;
        };

        let draw = LineStripDraw {
            clear: self.clear,
            color: self.color,
            vertices: self.vertices.as_slice(),
        };
        sink.encode(&mut frame, &draw);
        sink.present(frame);

        FrameOutcome::Presented
    }
}
