//! Coordinate and geometry types.
//!
//! Two spaces are in play:
//! - Logical pixels (DPI-aware), origin top-left, +X right, +Y down.
//! - Clip space (NDC), origin center, +Y up, visible range `[-1, 1]`.
//!
//! Unlike shader-side conversion, the line-strip path converts on the CPU
//! with an [`Affine`] computed once from the view size.

mod affine;
mod vec2;
mod viewport;

pub use affine::Affine;
pub use vec2::Vec2;
pub use viewport::Viewport;
