use tracing::{debug, trace};

use crate::core::{
    BarNode, ColorTable, LinearScale, PlotArea, SpectrumDataset, SpectrumPayload, build_bar_nodes,
};
use crate::error::ChartResult;
use crate::interaction::{
    SelectionPhase, SelectionWindow, WindowInteraction, domain_delta_per_pixel,
};
use crate::render::{Renderer, Scene};

use super::{SpectrumChartConfig, scene_composer::compose_scene};
use super::engine_config::{OCCUPANCY_VALUE_MAX, OCCUPANCY_VALUE_MIN};

/// Main orchestration facade consumed by host applications.
///
/// The engine owns the single mutable `(dataset, window, interaction)` tuple
/// and recomputes synchronously inside the handler of each triggering event:
/// dataset load, window change, or pointer movement. Scene composition
/// itself is pure, so a superseded scene is simply dropped.
pub struct SpectrumChartEngine<R: Renderer> {
    renderer: R,
    config: SpectrumChartConfig,
    plot: PlotArea,
    colors: ColorTable,
    dataset: SpectrumDataset,
    bar_nodes: Vec<BarNode>,
    x_scale: Option<LinearScale>,
    y_scale: Option<LinearScale>,
    window: SelectionWindow,
    interaction: WindowInteraction,
}

impl<R: Renderer> SpectrumChartEngine<R> {
    pub fn new(renderer: R, config: SpectrumChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = PlotArea::resolve(config.viewport, config.margins)?;
        let colors = ColorTable::new(OCCUPANCY_VALUE_MIN, OCCUPANCY_VALUE_MAX, &config.palette)?;
        let window =
            SelectionWindow::new(config.domain_min, config.domain_max, config.min_window_gap)?;

        Ok(Self {
            renderer,
            config,
            plot,
            colors,
            dataset: SpectrumDataset::default(),
            bar_nodes: Vec::new(),
            x_scale: None,
            y_scale: None,
            window,
            interaction: WindowInteraction::default(),
        })
    }

    /// Replaces the dataset, rebuilding the adjacency arena and both scales.
    ///
    /// Scale domains come from the dataset extents and change only here,
    /// never on window moves.
    pub fn set_dataset(&mut self, dataset: SpectrumDataset) {
        debug!(
            occupancy_count = dataset.occupancy.len(),
            sample_count = dataset.samples.len(),
            "set spectrum dataset"
        );
        self.bar_nodes = build_bar_nodes(&dataset.occupancy);
        self.dataset = dataset;
        self.rebuild_scales();
    }

    /// Normalizes and loads a raw acquisition payload.
    pub fn load_payload(&mut self, payload: SpectrumPayload) {
        self.set_dataset(SpectrumDataset::from_payload(payload));
    }

    fn rebuild_scales(&mut self) {
        let x_extent = self
            .dataset
            .frequency_extent()
            .or_else(|| self.dataset.occupancy_frequency_extent());
        self.x_scale = x_extent
            .and_then(|extent| LinearScale::new(extent, (0.0, self.plot.width)).ok());

        // Y domain is reversed so larger RMS maps to smaller pixel rows.
        self.y_scale = self.dataset.rms_extent().and_then(|(min, max)| {
            LinearScale::new((max, min), (0.0, self.plot.height)).ok()
        });
    }

    #[must_use]
    pub fn config(&self) -> &SpectrumChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &SpectrumDataset {
        &self.dataset
    }

    #[must_use]
    pub fn bar_nodes(&self) -> &[BarNode] {
        &self.bar_nodes
    }

    #[must_use]
    pub fn window(&self) -> SelectionWindow {
        self.window
    }

    #[must_use]
    pub fn interaction(&self) -> WindowInteraction {
        self.interaction
    }

    /// Moves the lower window bound; rejected updates leave state unchanged.
    pub fn set_window_min(&mut self, min_val: f64) -> bool {
        self.window.set_min_val(min_val)
    }

    /// Moves the upper window bound; rejected updates leave state unchanged.
    pub fn set_window_max(&mut self, max_val: f64) -> bool {
        self.window.set_max_val(max_val)
    }

    /// Moves both window bounds; rejected updates leave state unchanged.
    pub fn set_window_bounds(&mut self, min_val: f64, max_val: f64) -> bool {
        self.window.set_bounds(min_val, max_val)
    }

    /// Click toggles the selection rectangle.
    pub fn on_click(&mut self) {
        self.interaction.on_click();
    }

    /// Pointer-down starts a window drag when the selection is active.
    pub fn on_pointer_down(&mut self, pointer_x: f64) {
        self.interaction
            .on_pointer_down(pointer_x, self.window.range());
    }

    /// Advances the pointer, panning the window while a drag is active.
    ///
    /// Pixel deltas translate into domain deltas against the global domain
    /// span; a pan that would push the window past a global bound is a
    /// rejected no-op, matching the slider behavior.
    pub fn on_pointer_move(&mut self, pointer_x: f64, pointer_y: f64) {
        if let Some(delta_px) = self.interaction.on_pointer_move(pointer_x, pointer_y) {
            let per_pixel = domain_delta_per_pixel(
                self.config.domain_min,
                self.config.domain_max,
                self.plot.width,
            );
            let applied = self.window.pan_by(-delta_px * per_pixel);
            if !applied {
                trace!(delta_px, "window pan rejected at domain bound");
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.interaction.on_pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.phase() == SelectionPhase::Dragging
    }

    /// Recomputes the renderable scene from current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let scales = match (self.x_scale, self.y_scale) {
            (Some(x_scale), Some(y_scale)) => Some((x_scale, y_scale)),
            (Some(x_scale), None) => {
                // Occupancy-only dataset: bars still render, the polyline
                // collapses onto a degenerate Y scale.
                LinearScale::new((0.0, 0.0), (0.0, self.plot.height))
                    .ok()
                    .map(|y_scale| (x_scale, y_scale))
            }
            _ => None,
        };

        compose_scene(
            &self.config,
            self.plot,
            &self.colors,
            &self.dataset,
            &self.bar_nodes,
            scales,
            self.window,
            self.interaction,
        )
    }

    /// Recomputes the scene and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = self.scene();
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
