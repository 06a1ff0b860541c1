pub mod scorer;
pub mod types;

pub use scorer::{score_compatibility, NEUTRAL_SCORE};
pub use types::{CategoryScore, CategorySpec, CompatibilityResult, DEFAULT_CATEGORIES};
