use crate::paint::Color;
use crate::scene::FLOATS_PER_VERTEX;

/// Everything one line-strip frame needs to record.
///
/// Borrowed for the duration of a single `encode` call.
#[derive(Debug, Copy, Clone)]
pub struct LineStripDraw<'a> {
    /// Render pass clear color.
    pub clear: Color,
    /// Fragment uniform color.
    pub color: Color,
    /// Flat `[x, y, z]` clip-space vertices.
    pub vertices: &'a [f32],
}

impl LineStripDraw<'_> {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / FLOATS_PER_VERTEX) as u32
    }

    #[inline]
    pub fn topology(&self) -> wgpu::PrimitiveTopology {
        wgpu::PrimitiveTopology::LineStrip
    }
}

/// Destination for a frame: acquire a drawable, record into it, present it.
///
/// `acquire` returning `None` means no drawable is available this tick; the
/// caller drops the frame without calling `encode` or `present`.
pub trait FrameSink {
    type Frame;

    fn acquire(&mut self) -> Option<Self::Frame>;

    /// Records exactly one draw for `draw` into `frame`.
    fn encode(&mut self, frame: &mut Self::Frame, draw: &LineStripDraw<'_>);

    /// Submits recorded commands and schedules presentation.
    fn present(&mut self, frame: Self::Frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Affine, Vec2, Viewport};
    use crate::scene::VertexBuffer;

    #[test]
    fn vertex_count_matches_vertex_buffer() {
        let points = [Vec2::zero(), Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0)];
        let buffer = VertexBuffer::build(&points, Affine::logical_to_clip(Viewport::new(40.0, 40.0)));
        let draw = LineStripDraw {
            clear: Color::default(),
            color: Color::default(),
            vertices: buffer.as_slice(),
        };
        assert_eq!(draw.vertex_count(), buffer.vertex_count());
        assert_eq!(draw.vertex_count(), 3);
    }
}
