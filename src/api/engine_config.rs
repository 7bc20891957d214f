use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport, default_palette};
use crate::error::{ChartError, ChartResult};

/// Occupancy values are percentages; the color table always quantizes this
/// fixed domain regardless of the observed data.
pub const OCCUPANCY_VALUE_MIN: f64 = 0.0;
pub const OCCUPANCY_VALUE_MAX: f64 = 100.0;

/// Host-supplied configuration for a spectrum chart engine.
///
/// The engine treats this as an immutable value: the color table and plot
/// area are derived from it once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumChartConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    /// Global frequency bounds, hertz. The selection window can never leave
    /// this range.
    pub domain_min: f64,
    pub domain_max: f64,
    /// Minimum distance the selection-window bounds must keep between them.
    pub min_window_gap: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    /// Ordered palette; its length determines color bucket granularity.
    pub palette: Vec<String>,
}

impl SpectrumChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, domain_min: f64, domain_max: f64) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            domain_min,
            domain_max,
            min_window_gap: 10_000.0,
            x_tick_count: 18,
            y_tick_count: 15,
            palette: default_palette(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_window_gap(mut self, min_window_gap: f64) -> Self {
        self.min_window_gap = min_window_gap;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        PlotArea::resolve(self.viewport, self.margins)?;

        if !self.domain_min.is_finite()
            || !self.domain_max.is_finite()
            || self.domain_min >= self.domain_max
        {
            return Err(ChartError::InvalidData(
                "frequency domain must be finite with min < max".to_owned(),
            ));
        }
        if !self.min_window_gap.is_finite()
            || self.min_window_gap < 0.0
            || self.min_window_gap > self.domain_max - self.domain_min
        {
            return Err(ChartError::InvalidData(
                "window gap must be finite, >= 0 and fit the domain".to_owned(),
            ));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidData(
                "color palette must not be empty".to_owned(),
            ));
        }

        Ok(())
    }
}
