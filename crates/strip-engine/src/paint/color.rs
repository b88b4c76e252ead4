/// Straight-alpha RGBA color with 8-bit channels.
///
/// This is the authoring format; renderers consume [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Converts an 8-bit color to normalized `(r, g, b, a)` floats in `[0, 1]`.
#[inline]
pub fn to_normalized_rgba(color: Rgba8) -> (f32, f32, f32, f32) {
    (
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a as f32 / 255.0,
    )
}

/// Straight-alpha RGBA color with normalized `f32` channels.
///
/// Invariant: every channel is in `[0, 1]`. Constructors clamp.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Layout matching a WGSL `vec4<f32>` uniform.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        let (r, g, b, a) = to_normalized_rgba(c);
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_normalized_rgba ────────────────────────────────────────────────

    #[test]
    fn blue_normalizes_to_unit_blue() {
        assert_eq!(to_normalized_rgba(Rgba8::BLUE), (0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn white_normalizes_to_ones() {
        assert_eq!(to_normalized_rgba(Rgba8::WHITE), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn mid_channel_is_proportional() {
        let (r, _, _, a) = to_normalized_rgba(Rgba8::new(51, 0, 0, 0));
        assert!((r - 0.2).abs() < 1e-6);
        assert_eq!(a, 0.0);
    }

    // ── Color ─────────────────────────────────────────────────────────────

    #[test]
    fn new_clamps_out_of_range_channels() {
        // A 0..255 value passed where 0..1 was expected saturates to 1.
        let c = Color::new(255.0, -1.0, 0.5, 1.0);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn from_rgba8_matches_free_function() {
        let c = Color::from(Rgba8::BLUE);
        assert_eq!(c.to_array(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let c = Color::from(Rgba8::WHITE).to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 1.0));
    }
}
