pub mod calculator;
pub mod types;

pub use calculator::{
    angular_distance, aspects_between_charts, aspects_in_chart, AspectCatalog, WeightTable,
};
pub use types::{Aspect, AspectDef, AspectKind};
