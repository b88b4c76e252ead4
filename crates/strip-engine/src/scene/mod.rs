//! Line-strip scene: point generation, logical → clip transform and the
//! per-frame draw procedure.
//!
//! Everything here is GPU-free. The frame path talks to the GPU only through
//! [`FrameSink`](crate::render::FrameSink).

mod config;
mod points;
mod strip;
mod vertices;

pub use config::StripConfig;
pub use points::{generate_points, DEFAULT_POINT_COUNT};
pub use strip::{FrameOutcome, LineStrip};
pub use vertices::{VertexBuffer, FLOATS_PER_VERTEX};
