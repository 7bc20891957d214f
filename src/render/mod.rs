mod null_renderer;
mod scene;

pub use null_renderer::NullRenderer;
pub use scene::{Scene, SelectionRect, TooltipPayload};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic [`Scene`] so drawing
/// code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}
