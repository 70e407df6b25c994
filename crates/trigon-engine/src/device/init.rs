/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default so color values land in the framebuffer unchanged.
    /// Renderers linearize vertex colors and pick sRGB texture formats when
    /// this is on, so either setting looks the same.
    pub prefer_srgb: bool,

    /// Present mode. Falls back to FIFO when unsupported by the surface.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode; an unsupported request falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Adapter selection preference. Defaults to the discrete GPU on hybrid systems.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features. The demos need none.
    pub required_features: wgpu::Features,

    /// Limits requested from the device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency (hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
