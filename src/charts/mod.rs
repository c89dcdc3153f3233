pub mod bar;
pub mod model;

pub use bar::BarChart;
pub use model::{BarChartConfig, BarPoint, BarSeries, Orientation};
