pub mod types;

pub use types::{Chart, ChartError, ChartPoint};
