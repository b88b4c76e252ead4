use super::{Vec2, Viewport};

/// 2D affine transform in row-vector form.
///
/// Applies `x' = a*x + c*y + tx` and `y' = b*x + d*y + ty`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Affine {
    /// Logical pixels → clip space for a view of the given size.
    ///
    /// `(0, 0)` lands on `(-1, 1)` and `(width, height)` on `(1, -1)`; the Y
    /// axis is flipped because logical space grows downward.
    ///
    /// Coefficients are finite only for a viewport that passes
    /// [`Viewport::is_valid`].
    #[inline]
    pub fn logical_to_clip(viewport: Viewport) -> Self {
        Self {
            a: 2.0 / viewport.width,
            b: 0.0,
            c: 0.0,
            d: -2.0 / viewport.height,
            tx: -1.0,
            ty: 1.0,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(w: f32, h: f32) -> Affine {
        Affine::logical_to_clip(Viewport::new(w, h))
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    // ── logical_to_clip ───────────────────────────────────────────────────

    #[test]
    fn origin_maps_to_top_left_clip_corner() {
        for (w, h) in [(1.0, 1.0), (200.0, 100.0), (375.0, 812.0), (4096.0, 3.0)] {
            assert!(approx(clip(w, h).apply(Vec2::zero()), Vec2::new(-1.0, 1.0)));
        }
    }

    #[test]
    fn extent_maps_to_bottom_right_clip_corner() {
        for (w, h) in [(1.0, 1.0), (200.0, 100.0), (375.0, 812.0), (4096.0, 3.0)] {
            assert!(approx(clip(w, h).apply(Vec2::new(w, h)), Vec2::new(1.0, -1.0)));
        }
    }

    #[test]
    fn center_maps_to_clip_origin() {
        let t = clip(200.0, 100.0);
        assert!(approx(t.apply(Vec2::new(100.0, 50.0)), Vec2::zero()));
    }

    #[test]
    fn y_axis_is_flipped() {
        let t = clip(200.0, 100.0);
        let top = t.apply(Vec2::new(0.0, 10.0));
        let bottom = t.apply(Vec2::new(0.0, 90.0));
        assert!(top.y > bottom.y);
    }
}
