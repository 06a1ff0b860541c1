use crate::aspects::WeightTable;
use crate::chart::Chart;
use crate::synastry::types::{CategoryScore, CategorySpec, CompatibilityResult};

/// Neutral score for a category with no evaluable pairs. A fixed,
/// domain-tuned default: "insufficient data" reads as 50, not 0.
pub const NEUTRAL_SCORE: u8 = 50;

/// Score one category: every cross-chart pair of declared points, weighted
/// by aspect kind and tightness, against a denominator of the best
/// possible weight per evaluated pair.
fn score_category(
    a: &Chart,
    b: &Chart,
    spec: &CategorySpec,
    weights: &WeightTable,
) -> CategoryScore {
    let mut total = 0.0;
    let mut max_possible = 0.0;
    let mut contributing = Vec::new();

    for name_a in &spec.a_points {
        let Some(pa) = a.get(name_a) else { continue };
        for name_b in &spec.b_points {
            let Some(pb) = b.get(name_b) else { continue };
            max_possible += weights.max_weight;
            if let Some(aspect) =
                weights
                    .catalog
                    .aspect_between_named(name_a, pa.lon, name_b, pb.lon)
            {
                total += weights.weigh(&aspect);
                contributing.push(aspect.describe());
            }
        }
    }

    let score = if max_possible > 0.0 {
        (100.0 * total / max_possible).round().min(100.0) as u8
    } else {
        NEUTRAL_SCORE
    };

    CategoryScore {
        label: spec.label.clone(),
        score,
        contributing,
    }
}

/// Score two charts against a category catalog.
///
/// Overall is the unweighted mean of category scores, rounded; categories
/// are independent, with no cross-category normalization.
pub fn score_compatibility(
    a: &Chart,
    b: &Chart,
    categories: &[CategorySpec],
    weights: &WeightTable,
) -> CompatibilityResult {
    let scored: Vec<CategoryScore> = categories
        .iter()
        .map(|spec| score_category(a, b, spec, weights))
        .collect();

    let overall = if scored.is_empty() {
        NEUTRAL_SCORE
    } else {
        let sum: f64 = scored.iter().map(|c| c.score as f64).sum();
        (sum / scored.len() as f64).round() as u8
    };

    log::debug!(
        "score_compatibility: overall {} across {} categories",
        overall,
        scored.len()
    );

    CompatibilityResult {
        overall,
        categories: scored,
    }
}
