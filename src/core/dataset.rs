use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{OccupancyBin, Sample};
use crate::error::{ChartError, ChartResult};

/// Raw payload frequencies arrive in kilohertz-scaled units.
const KILOHERTZ_SCALE: f64 = 1000.0;

/// Wire shape of one occupancy entry as delivered by the acquisition layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawOccupancyBin {
    pub frequency: f64,
    pub value: f64,
}

/// Wire shape of one line-series measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub frequency: f64,
    pub rms: f64,
    pub peak: f64,
}

/// Complete dataset payload as delivered by the acquisition layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPayload {
    pub occupancy: Vec<RawOccupancyBin>,
    pub result: Vec<RawSample>,
}

/// Normalized, immutable dataset consumed by the chart pipeline.
///
/// Frequencies are in hertz, occupancy values rounded to whole percent, and
/// both series are canonicalized ascending by frequency so adjacency and
/// bisect lookups can rely on ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpectrumDataset {
    pub occupancy: Vec<OccupancyBin>,
    pub samples: Vec<Sample>,
}

impl SpectrumDataset {
    /// Normalizes a raw payload into chart units.
    #[must_use]
    pub fn from_payload(payload: SpectrumPayload) -> Self {
        let mut occupancy: Vec<OccupancyBin> = payload
            .occupancy
            .into_iter()
            .map(|bin| OccupancyBin {
                frequency: bin.frequency * KILOHERTZ_SCALE,
                value: bin.value.round(),
            })
            .collect();
        occupancy.sort_by_key(|bin| OrderedFloat(bin.frequency));

        let mut samples: Vec<Sample> = payload
            .result
            .into_iter()
            .map(|sample| Sample {
                frequency: sample.frequency * KILOHERTZ_SCALE,
                rms: sample.rms,
                peak: sample.peak,
            })
            .collect();
        samples.sort_by_key(|sample| OrderedFloat(sample.frequency));

        debug!(
            occupancy_count = occupancy.len(),
            sample_count = samples.len(),
            "normalized spectrum payload"
        );
        Self { occupancy, samples }
    }

    /// Parses and normalizes a JSON payload.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: SpectrumPayload = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse spectrum payload: {e}"))
        })?;
        Ok(Self::from_payload(payload))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty() && self.samples.is_empty()
    }

    /// Frequency min/max of the line series, `None` when empty.
    #[must_use]
    pub fn frequency_extent(&self) -> Option<(f64, f64)> {
        extent(self.samples.iter().map(|sample| sample.frequency))
    }

    /// RMS min/max of the line series, `None` when empty.
    #[must_use]
    pub fn rms_extent(&self) -> Option<(f64, f64)> {
        extent(self.samples.iter().map(|sample| sample.rms))
    }

    /// Frequency min/max of the occupancy series, `None` when empty.
    #[must_use]
    pub fn occupancy_frequency_extent(&self) -> Option<(f64, f64)> {
        extent(self.occupancy.iter().map(|bin| bin.frequency))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        seen = true;
        min = min.min(value);
        max = max.max(value);
    }
    seen.then_some((min, max))
}
