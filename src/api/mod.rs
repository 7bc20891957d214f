mod engine;
mod engine_config;
mod scene_composer;

pub use engine::SpectrumChartEngine;
pub use engine_config::{OCCUPANCY_VALUE_MAX, OCCUPANCY_VALUE_MIN, SpectrumChartConfig};
pub use scene_composer::compose_scene;
