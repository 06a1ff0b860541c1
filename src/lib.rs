//! Harmonia core: relationship calculations over zodiacal longitudes.
//!
//! Everything in this crate is a pure, synchronous function over
//! caller-supplied position snapshots: aspect classification, chart
//! pattern detection, two-chart compatibility scoring, best-fit candidate
//! matching, and transit duration estimates. Deriving the longitudes
//! themselves (the ephemeris step) is the caller's job.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod matching;
pub mod patterns;
pub mod synastry;
pub mod transits;
pub mod zodiac;

pub use aspects::{angular_distance, Aspect, AspectCatalog, AspectKind, WeightTable};
pub use chart::{Chart, ChartError, ChartPoint};
pub use config::Config;
pub use matching::{best_match, CandidateMatch, CandidateProfile};
pub use patterns::{detect_patterns, ChartPattern, PatternKind, PatternOrbs};
pub use synastry::{score_compatibility, CompatibilityResult, DEFAULT_CATEGORIES};
pub use transits::{estimate_days, TransitScope};
