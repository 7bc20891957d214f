use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_polyline_len: usize,
    pub last_had_tooltip: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.last_bar_count = scene.bars.len();
        self.last_polyline_len = scene.polyline.len();
        self.last_had_tooltip = scene.tooltip.is_some();
        Ok(())
    }
}
