/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Ask for an sRGB surface so linear vertex colours display as authored.
    /// `false` asks for a linear format instead.
    pub prefer_srgb: bool,

    /// Present mode. FIFO is supported everywhere and paces the animation to vsync.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference; ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Frames queued ahead of the display. Hint only.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
