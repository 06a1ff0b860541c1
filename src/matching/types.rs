use crate::chart::Chart;
use serde::{Deserialize, Serialize};

/// A pre-baked candidate: an id, a display name, and the candidate's
/// chart. Pools ship as JSON alongside the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub display_name: String,
    pub points: Chart,
}

/// The best match out of a candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub candidate_id: String,
    /// 0-100.
    pub score: u8,
    /// Human-readable strongest contributing aspect, or empty when no
    /// declared pair classified.
    pub top_aspect: String,
}
