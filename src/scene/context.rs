/// Per-frame scratch state passed explicitly through the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    /// Elapsed wall-clock seconds for the previous frame; scales camera
    /// movement and spin for frame-rate independence.
    pub dt: f32,
    /// Accumulated angle for objects flagged to auto-spin.
    pub spin_angle: f32,
}

impl FrameContext {
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.spin_angle += dt;
    }
}
