//! Typed setup errors.
//!
//! Runtime frame failures are not errors: a missing drawable skips the frame.

use crate::coords::Viewport;

/// Unrecoverable failures while bringing the renderer up.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("invalid view size {width}x{height}: both extents must be positive with a finite clip scale")]
    InvalidViewSize { width: f32, height: f32 },
    #[error("no GPU device available: {0}")]
    DeviceUnavailable(String),
    #[error("drawable surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("pipeline compilation failed: {0}")]
    PipelineCompilation(String),
}

impl SetupError {
    pub fn invalid_view(viewport: Viewport) -> Self {
        Self::InvalidViewSize {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_view_size_reports_extents() {
        let msg = SetupError::invalid_view(Viewport::new(0.0, 100.0)).to_string();
        assert!(msg.contains("0x100"), "{msg}");
    }

    #[test]
    fn pipeline_error_carries_reason() {
        let msg = SetupError::PipelineCompilation("missing `basic_vertex`".into()).to_string();
        assert!(msg.starts_with("pipeline compilation failed"));
        assert!(msg.contains("basic_vertex"));
    }
}
