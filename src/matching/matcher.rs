use crate::aspects::WeightTable;
use crate::chart::Chart;
use crate::matching::types::{CandidateMatch, CandidateProfile};

/// The attraction pairs the matcher evaluates: venus and mars in both
/// directions (seeker's point first, candidate's second).
const ATTRACTION_PAIRS: &[(&str, &str)] = &[
    ("venus", "mars"),
    ("mars", "venus"),
    ("venus", "venus"),
    ("mars", "mars"),
];

/// Empirical score ceiling for normalization. The theoretical maximum over
/// the four attraction pairs is higher; this is a tuned constant that
/// spreads real pools over the 0-100 range, not a computed bound.
pub const MATCH_SCORE_CEILING: f64 = 40.0;

/// Raw weighted sum over the attraction pairs, plus the single
/// highest-weight classified pair.
fn score_candidate(
    seeker: &Chart,
    candidate: &Chart,
    weights: &WeightTable,
) -> (f64, Option<String>) {
    let mut sum = 0.0;
    let mut top_weight = 0.0;
    let mut top_aspect: Option<String> = None;

    for (seeker_id, candidate_id) in ATTRACTION_PAIRS {
        let Some(ps) = seeker.get(seeker_id) else { continue };
        let Some(pc) = candidate.get(candidate_id) else { continue };
        if let Some(aspect) =
            weights
                .catalog
                .aspect_between_named(seeker_id, ps.lon, candidate_id, pc.lon)
        {
            let weight = weights.weigh(&aspect);
            sum += weight;
            if weight > top_weight {
                top_weight = weight;
                top_aspect = Some(aspect.describe());
            }
        }
    }

    (sum, top_aspect)
}

/// Rank a candidate pool against a seeker's chart and return the single
/// best match. Ties break to the first candidate in pool order. `None`
/// only for an empty pool.
pub fn best_match(
    seeker: &Chart,
    pool: &[CandidateProfile],
    weights: &WeightTable,
) -> Option<CandidateMatch> {
    let mut best: Option<(f64, &CandidateProfile, Option<String>)> = None;

    for candidate in pool {
        let (sum, top_aspect) = score_candidate(seeker, &candidate.points, weights);
        let is_better = match &best {
            Some((best_sum, _, _)) => sum > *best_sum,
            None => true,
        };
        if is_better {
            best = Some((sum, candidate, top_aspect));
        }
    }

    best.map(|(sum, candidate, top_aspect)| {
        let score = (100.0 * sum / MATCH_SCORE_CEILING).min(100.0).round() as u8;
        log::debug!(
            "best_match: {} with raw sum {:.2} over {} candidates",
            candidate.id,
            sum,
            pool.len()
        );
        CandidateMatch {
            candidate_id: candidate.id.clone(),
            score,
            top_aspect: top_aspect.unwrap_or_default(),
        }
    })
}

/// Load a candidate pool from its shipped JSON form.
pub fn pool_from_json(json: &str) -> Result<Vec<CandidateProfile>, serde_json::Error> {
    serde_json::from_str(json)
}
