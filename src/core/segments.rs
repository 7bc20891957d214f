use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::bar_nodes::BarNode;
use crate::core::color::ColorTable;
use crate::core::scale::LinearScale;

/// One renderable occupancy rectangle in plot-area pixel space.
///
/// Produced fresh on every recompute and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub color: String,
}

/// Converts the adjacency arena into clipped rectangle geometry for the
/// visible window `[window_min, window_max]`.
///
/// Bands are adjacency-defined: each band's right edge is its successor's
/// left edge, the last band extends to the window edge, and a band whose own
/// left edge sits off-screen still contributes its visible portion through a
/// synthetic rect anchored at pixel 0. Consecutive visible rects therefore
/// tile the window with no x-gap at either boundary.
#[must_use]
pub fn project_bar_rects(
    nodes: &[BarNode],
    window_min: f64,
    window_max: f64,
    x_scale: LinearScale,
    plot_height: f64,
    colors: &ColorTable,
) -> Vec<BarRect> {
    let mut rects = Vec::with_capacity(nodes.len());
    for node in nodes {
        rects.extend(node_rects(
            nodes,
            *node,
            window_min,
            window_max,
            x_scale,
            plot_height,
            colors,
        ));
    }
    rects
}

/// Emits the rects contributed by one node: its own band plus, when the
/// previous band straddles the left viewport boundary, one synthetic rect.
fn node_rects(
    nodes: &[BarNode],
    node: BarNode,
    window_min: f64,
    window_max: f64,
    x_scale: LinearScale,
    plot_height: f64,
    colors: &ColorTable,
) -> SmallVec<[BarRect; 2]> {
    let mut emitted = SmallVec::new();

    if node.x_val < window_min || node.x_val > window_max {
        return emitted;
    }

    let x1 = x_scale.map(node.x_val).round();
    let window_edge = x_scale.map(window_max).round();
    let x2 = match node.next {
        Some(next_index) => {
            let next_x = nodes[next_index].x_val;
            if next_x > window_max {
                window_edge
            } else {
                x_scale.map(next_x).round()
            }
        }
        None => window_edge,
    };

    if let Some(prev_index) = node.prev {
        let prev = nodes[prev_index];
        let x0 = x_scale.map(prev.x_val).round();
        if x0 < 0.0 && x1 > 0.0 {
            emitted.push(BarRect {
                x: 0.0,
                y: 0.0,
                width: x2.abs(),
                height: plot_height,
                value: prev.y_val,
                color: colors.find_color(prev.y_val).to_owned(),
            });
        }
    }

    let x1 = x1.max(0.0);
    emitted.push(BarRect {
        x: x1,
        y: 0.0,
        width: (x2 - x1).abs(),
        height: plot_height,
        value: node.y_val,
        color: colors.find_color(node.y_val).to_owned(),
    });

    emitted
}
