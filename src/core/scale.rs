use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear domain-to-pixel transform with an explicit output range.
///
/// The scale is built once per dataset (domain) and viewport (range) and is
/// purely arithmetic afterwards: `map` interpolates, `invert` is its exact
/// algebraic inverse. Reversed domains and ranges are legal; the Y axis of
/// the spectrum display uses a reversed domain so larger RMS values map to
/// smaller pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale from domain and range extents.
    ///
    /// A degenerate domain (`start == end`) is accepted: `map` collapses to
    /// the range midpoint and `invert` returns the domain value, so no
    /// division by zero can occur downstream.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the pixel range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }

        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverts a pixel position back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        let domain_span = self.domain_end - self.domain_start;
        if range_span == 0.0 || domain_span == 0.0 {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * domain_span
    }

    /// Returns `count` evenly spaced domain values for axis tick placement.
    ///
    /// Tick label formatting belongs to the presentation layer.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        let denominator = (count - 1) as f64;
        let mut ticks = Vec::with_capacity(count);
        for index in 0..count {
            let ratio = (index as f64) / denominator;
            ticks.push(self.domain_start + span * ratio);
        }
        ticks
    }
}
