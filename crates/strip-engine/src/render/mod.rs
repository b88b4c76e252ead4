//! GPU rendering subsystem.
//!
//! Convention:
//! - The scene hands over clip-space vertices; shaders do no coordinate math.
//! - Each renderer owns its GPU resources (pipeline, uniforms).
//! - The frame path is expressed against [`FrameSink`] so it runs without a GPU
//!   in tests.

mod ctx;
mod frame;
mod library;
mod line_strip;

pub use ctx::{RenderCtx, RenderTarget};
pub use frame::{FrameSink, LineStripDraw};
pub use library::{ProgramLibrary, ShaderStage};
pub use line_strip::{GpuSink, LineStripPipeline};
