//! spectrum-chart: frequency-spectrum occupancy chart engine.
//!
//! This crate owns the pure geometry and interaction pipeline of a spectrum
//! display: domain/pixel scales, occupancy bar segmentation, value-to-color
//! quantization, hover lookup over the line series, and the draggable
//! selection window. Drawing backends and data acquisition stay outside;
//! hosts feed a dataset and pointer events in and receive a [`render::Scene`]
//! description back.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SpectrumChartConfig, SpectrumChartEngine};
pub use error::{ChartError, ChartResult};
