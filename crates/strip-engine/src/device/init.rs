/// Initialization parameters for the GPU layer.
///
/// Defaults describe the line-strip view: fixed `Bgra8Unorm` output, an
/// opaque framebuffer and FIFO presentation (one frame per display refresh).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Exact surface format to use when the surface supports it.
    pub preferred_format: Option<wgpu::TextureFormat>,

    /// Fallback policy when `preferred_format` is unsupported: pick an sRGB
    /// format if `true`, a linear one otherwise.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is universally supported and paces frames to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            preferred_format: Some(wgpu::TextureFormat::Bgra8Unorm),
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
