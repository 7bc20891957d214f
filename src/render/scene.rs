use serde::{Deserialize, Serialize};

use crate::core::{BarRect, Margins, PolylinePoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Hover readout handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub label_text: String,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Selection-window overlay rectangle, horizontal extent only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub pixel_x: f64,
    pub pixel_width: f64,
}

/// Backend-agnostic scene for one chart recompute.
///
/// All coordinates are plot-area-local pixels; the viewport and margins are
/// carried so backends can place the plot area themselves. A scene fully
/// supersedes the previous one, nothing is merged across recomputes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub margins: Margins,
    pub bars: Vec<BarRect>,
    pub polyline: Vec<PolylinePoint>,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub tooltip: Option<TooltipPayload>,
    pub selection: Option<SelectionRect>,
}

impl Scene {
    /// An empty scene for a viewport, the degraded output for missing data.
    #[must_use]
    pub fn empty(viewport: Viewport, margins: Margins) -> Self {
        Self {
            viewport,
            margins,
            bars: Vec::new(),
            polyline: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            tooltip: None,
            selection: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;

        for bar in &self.bars {
            if !bar.x.is_finite() || !bar.width.is_finite() || !bar.height.is_finite() {
                return Err(ChartError::InvalidData(
                    "bar rect geometry must be finite".to_owned(),
                ));
            }
            if bar.x < 0.0 || bar.width < 0.0 || bar.height < 0.0 {
                return Err(ChartError::InvalidData(
                    "bar rect geometry must be non-negative".to_owned(),
                ));
            }
        }
        for point in &self.polyline {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "polyline vertices must be finite".to_owned(),
                ));
            }
        }
        if let Some(tooltip) = &self.tooltip {
            if tooltip.label_text.is_empty() {
                return Err(ChartError::InvalidData(
                    "tooltip label must not be empty".to_owned(),
                ));
            }
            if !tooltip.pixel_x.is_finite() || !tooltip.pixel_y.is_finite() {
                return Err(ChartError::InvalidData(
                    "tooltip position must be finite".to_owned(),
                ));
            }
        }
        if let Some(selection) = self.selection {
            if !selection.pixel_x.is_finite()
                || !selection.pixel_width.is_finite()
                || selection.pixel_width < 0.0
            {
                return Err(ChartError::InvalidData(
                    "selection rect must be finite with width >= 0".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.polyline.is_empty()
    }
}
