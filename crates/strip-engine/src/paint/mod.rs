//! Paint model shared between the scene and renderers.
//!
//! Colors are authored as 8-bit RGBA and normalized to `[0, 1]` floats before
//! they reach the GPU.

pub mod color;

pub use color::{to_normalized_rgba, Color, Rgba8};
