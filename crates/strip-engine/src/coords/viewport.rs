/// View size in logical pixels.
///
/// This is the coordinate basis for the logical → clip space transform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both extents positive and finite, and large enough that the clip
    /// scale `2 / extent` stays finite (subnormals overflow it).
    #[inline]
    pub fn is_valid(self) -> bool {
        let positive = self.width > 0.0 && self.height > 0.0;
        let finite = self.width.is_finite() && self.height.is_finite();
        positive && finite && (2.0 / self.width).is_finite() && (2.0 / self.height).is_finite()
    }
}
