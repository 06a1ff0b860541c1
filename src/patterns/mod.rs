pub mod detector;
pub mod types;

pub use detector::detect_patterns;
pub use types::{ChartPattern, PatternKind, PatternOrbs};
