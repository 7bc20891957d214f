use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::Sample;

/// Leftmost binary search: first index whose element is not less than `query`.
///
/// Returns the insertion index of `query` into `sorted`; below all entries
/// the result is `0`, above all entries it equals `sorted.len()`, which is
/// out of bounds. Callers must clamp before indexing; using the raw result
/// directly is a defect.
#[must_use]
pub fn bisect_left(sorted: &[f64], query: f64) -> usize {
    sorted.partition_point(|&value| value < query)
}

/// Hover target resolved for the tooltip readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestSample {
    pub index: usize,
    pub frequency: f64,
    pub rms: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Resolves the hover target for a pointer position in plot-area pixels.
///
/// The pointer X is inverted into the frequency domain, located by
/// bisect-left over the sample frequencies, and clamped into bounds.
/// Returns `None` when the series is empty.
#[must_use]
pub fn resolve_hover(
    samples: &[Sample],
    x_scale: LinearScale,
    y_scale: LinearScale,
    pointer_x: f64,
) -> Option<NearestSample> {
    if samples.is_empty() {
        return None;
    }

    let query = x_scale.invert(pointer_x.round().abs());
    let raw = bisect_left_samples(samples, query);
    let index = raw.min(samples.len() - 1);
    let sample = samples[index];

    Some(NearestSample {
        index,
        frequency: sample.frequency,
        rms: sample.rms,
        pixel_x: x_scale.map(sample.frequency),
        pixel_y: y_scale.map(sample.rms),
    })
}

fn bisect_left_samples(samples: &[Sample], query: f64) -> usize {
    samples.partition_point(|sample| sample.frequency < query)
}
