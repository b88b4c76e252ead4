use crate::coords::{Affine, Vec2};

/// Floats per vertex: `x, y, z`.
pub const FLOATS_PER_VERTEX: usize = 3;

/// Flat `[x, y, z]` vertex stream in clip space, `z` always `0`.
///
/// Built from a point set in one shot; there is no in-place mutation API, a
/// new buffer replaces the old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
}

impl VertexBuffer {
    /// Transforms every point and flattens the result.
    pub fn build(points: &[Vec2], transform: Affine) -> Self {
        let mut data = Vec::with_capacity(points.len() * FLOATS_PER_VERTEX);
        for &p in points {
            let c = transform.apply(p);
            data.extend_from_slice(&[c.x, c.y, 0.0]);
        }
        Self { data }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Number of floats.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.data.len() / FLOATS_PER_VERTEX) as u32
    }

    /// A line strip needs two vertices for its first segment.
    #[inline]
    pub fn has_segment(&self) -> bool {
        self.vertex_count() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    fn clip_200x100() -> Affine {
        Affine::logical_to_clip(Viewport::new(200.0, 100.0))
    }

    #[test]
    fn length_is_three_floats_per_point() {
        let points: Vec<Vec2> = (0..100).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let vb = VertexBuffer::build(&points, clip_200x100());
        assert_eq!(vb.len(), 300);
        assert_eq!(vb.vertex_count(), 100);
    }

    #[test]
    fn z_is_always_zero() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        let vb = VertexBuffer::build(&points, clip_200x100());
        assert!(vb.as_slice().chunks(3).all(|v| v[2] == 0.0));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(8.0, 1.0), Vec2::new(2.0, 12.0)];
        let a = VertexBuffer::build(&points, clip_200x100());
        let b = VertexBuffer::build(&points, clip_200x100());
        assert_eq!(a, b);
    }

    #[test]
    fn origin_lands_on_top_left_clip_corner() {
        let vb = VertexBuffer::build(&[Vec2::zero()], clip_200x100());
        assert_eq!(vb.as_slice(), &[-1.0, 1.0, 0.0]);
    }

    #[test]
    fn segment_requires_two_vertices() {
        let t = clip_200x100();
        assert!(!VertexBuffer::build(&[], t).has_segment());
        assert!(!VertexBuffer::build(&[Vec2::zero()], t).has_segment());
        assert!(VertexBuffer::build(&[Vec2::zero(), Vec2::new(1.0, 1.0)], t).has_segment());
    }
}
