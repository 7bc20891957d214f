pub mod bar_nodes;
pub mod color;
pub mod dataset;
pub mod line_series;
pub mod locate;
pub mod scale;
pub mod segments;
pub mod types;

pub use bar_nodes::{BarNode, build_bar_nodes, build_bar_nodes_with};
pub use color::{ColorRange, ColorTable, default_palette};
pub use dataset::{RawOccupancyBin, RawSample, SpectrumDataset, SpectrumPayload};
pub use line_series::{PolylinePoint, project_polyline};
pub use locate::{NearestSample, bisect_left, resolve_hover};
pub use scale::LinearScale;
pub use segments::{BarRect, project_bar_rects};
pub use types::{Margins, OccupancyBin, PlotArea, Sample, Viewport};
