use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::Sample;

/// One vertex of the projected RMS polyline, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolylinePoint {
    pub x: f64,
    pub y: f64,
}

/// Projects the line series into polyline vertices.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output.
#[must_use]
pub fn project_polyline(
    samples: &[Sample],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<PolylinePoint> {
    samples
        .iter()
        .map(|sample| PolylinePoint {
            x: x_scale.map(sample.frequency),
            y: y_scale.map(sample.rms),
        })
        .collect()
}
