use crate::paint::Rgba8;

use super::points::DEFAULT_POINT_COUNT;

/// Line-strip scene configuration.
///
/// Entry point names are looked up in the embedded program library at
/// pipeline creation time.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of generated points.
    pub point_count: usize,

    /// Vertex stage entry point.
    pub vertex_entry: String,

    /// Fragment stage entry point.
    pub fragment_entry: String,

    /// Color pushed to the fragment stage.
    pub line_color: Rgba8,

    /// Render pass clear color.
    pub clear_color: Rgba8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            vertex_entry: "basic_vertex".to_string(),
            fragment_entry: "basic_fragment".to_string(),
            line_color: Rgba8::BLUE,
            clear_color: Rgba8::WHITE,
        }
    }
}
