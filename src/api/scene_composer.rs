use crate::core::{
    BarNode, ColorTable, LinearScale, PlotArea, Sample, SpectrumDataset, project_bar_rects,
    project_polyline, resolve_hover,
};
use crate::interaction::{SelectionWindow, WindowInteraction};
use crate::render::{Scene, SelectionRect, TooltipPayload};

use super::SpectrumChartConfig;

/// Pure recompute of the renderable scene from the current
/// `(dataset, window, interaction)` tuple.
///
/// Invoked by the engine whenever any input changes; the output fully
/// supersedes any previous scene. With no dataset loaded (`scales` absent)
/// the scene degrades to "nothing rendered" rather than failing.
pub fn compose_scene(
    config: &SpectrumChartConfig,
    plot: PlotArea,
    colors: &ColorTable,
    dataset: &SpectrumDataset,
    nodes: &[BarNode],
    scales: Option<(LinearScale, LinearScale)>,
    window: SelectionWindow,
    interaction: WindowInteraction,
) -> Scene {
    let mut scene = Scene::empty(config.viewport, config.margins);
    let Some((x_scale, y_scale)) = scales else {
        return scene;
    };

    let (window_min, window_max) = window.range();
    scene.bars = project_bar_rects(nodes, window_min, window_max, x_scale, plot.height, colors);

    let visible_samples = samples_in_window(&dataset.samples, window_min, window_max);
    scene.polyline = project_polyline(visible_samples, x_scale, y_scale);

    scene.x_ticks = x_scale.ticks(config.x_tick_count);
    scene.y_ticks = y_scale.ticks(config.y_tick_count);

    if interaction.is_hovering() {
        let (cursor_x, _) = interaction.cursor();
        scene.tooltip =
            resolve_hover(visible_samples, x_scale, y_scale, cursor_x).map(|nearest| {
                TooltipPayload {
                    label_text: format!(
                        "({} Hz, {} DB)",
                        nearest.frequency,
                        nearest.rms / 100.0
                    ),
                    pixel_x: nearest.pixel_x,
                    pixel_y: nearest.pixel_y,
                }
            });
    }

    if interaction.is_selection_visible() {
        let left = x_scale.map(window_min);
        let right = x_scale.map(window_max);
        scene.selection = Some(SelectionRect {
            pixel_x: left.min(right),
            pixel_width: (right - left).abs(),
        });
    }

    scene
}

/// Contiguous slice of samples whose frequency falls inside the window.
///
/// Samples are canonicalized ascending, so the visible run is a single
/// contiguous range found by two partition points.
fn samples_in_window(samples: &[Sample], window_min: f64, window_max: f64) -> &[Sample] {
    let start = samples.partition_point(|sample| sample.frequency < window_min);
    let end = samples.partition_point(|sample| sample.frequency <= window_max);
    &samples[start..end.max(start)]
}
