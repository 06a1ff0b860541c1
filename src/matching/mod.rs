pub mod matcher;
pub mod types;

pub use matcher::{best_match, pool_from_json, MATCH_SCORE_CEILING};
pub use types::{CandidateMatch, CandidateProfile};
