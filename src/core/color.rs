use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One discrete color bucket over a contiguous slice of the value domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    pub color: String,
    pub min_val: f64,
    pub max_val: f64,
}

/// Quantization table mapping occupancy values onto an ordered palette.
///
/// Buckets are built once per configuration and partition `[min, max]`
/// without overlap: each bucket spans `round((max - min) / N)` units and the
/// next bucket starts one unit above the previous one. The final bucket may
/// overshoot `max`, which keeps the upper edge of the domain covered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    ranges: Vec<ColorRange>,
}

impl ColorTable {
    /// Builds the bucket table for `[min, max]` from an ordered palette.
    pub fn new(min: f64, max: f64, palette: &[String]) -> ChartResult<Self> {
        if palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "color domain must be finite with min < max".to_owned(),
            ));
        }

        let div = ((max - min) / palette.len() as f64).round();
        let mut ranges = Vec::with_capacity(palette.len());
        let mut lower = min;
        for color in palette {
            if lower > max {
                break;
            }
            ranges.push(ColorRange {
                color: color.clone(),
                min_val: lower,
                max_val: lower + div,
            });
            lower += div + 1.0;
        }

        Ok(Self { ranges })
    }

    #[must_use]
    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    /// Resolves a value to its bucket color.
    ///
    /// Total over all finite inputs: values outside every bucket (negative,
    /// beyond the covered span, or inside a one-unit seam between buckets)
    /// fall back to the first palette color. Callers must treat the fallback
    /// as a sentinel, not a measurement.
    #[must_use]
    pub fn find_color(&self, value: f64) -> &str {
        match self
            .ranges
            .iter()
            .find(|range| value >= range.min_val && value <= range.max_val)
        {
            Some(range) => &range.color,
            None => {
                debug!(value, "occupancy value outside color buckets, using fallback");
                &self.ranges[0].color
            }
        }
    }
}

/// Seven-step blue ramp used by the original UHF occupancy display.
#[must_use]
pub fn default_palette() -> Vec<String> {
    [
        "#B2D5E3", "#95C0D6", "#71A3BF", "#598DAC", "#204E82", "#163960", "#0E2948",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
