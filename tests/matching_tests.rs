use harmonia_core::aspects::WeightTable;
use harmonia_core::chart::{Chart, ChartPoint};
use harmonia_core::matching::{best_match, pool_from_json, CandidateProfile};

fn chart(points: Vec<ChartPoint>) -> Chart {
    Chart::new(points).unwrap()
}

fn candidate(id: &str, venus: f64, mars: f64) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        display_name: id.to_string(),
        points: chart(vec![
            ChartPoint::new("venus", venus),
            ChartPoint::new("mars", mars),
        ]),
    }
}

#[test]
fn test_strongest_candidate_wins() {
    let seeker = chart(vec![
        ChartPoint::new("venus", 0.0),
        ChartPoint::new("mars", 120.0),
    ]);
    let pool = vec![
        // Loose: only a wide venus-venus conjunction.
        candidate("loose", 7.0, 200.0),
        // Tight: exact conjunctions on both attraction axes.
        candidate("tight", 0.0, 120.0),
    ];
    let result = best_match(&seeker, &pool, &WeightTable::default()).unwrap();
    assert_eq!(result.candidate_id, "tight");
    assert!(result.score > 50);
}

#[test]
fn test_top_aspect_is_the_strongest_pair() {
    let seeker = chart(vec![
        ChartPoint::new("venus", 0.0),
        ChartPoint::new("mars", 90.0),
    ]);
    // venus-venus is an exact conjunction (weight 8); the seeker's mars
    // squares the candidate's venus (weight 2). The conjunction must be
    // reported as the top aspect.
    let pool = vec![candidate("solo", 0.0, 200.0)];
    let result = best_match(&seeker, &pool, &WeightTable::default()).unwrap();
    assert_eq!(result.top_aspect, "venus Conjunction venus");
}

#[test]
fn test_score_clamped_to_100() {
    let seeker = chart(vec![
        ChartPoint::new("venus", 0.0),
        ChartPoint::new("mars", 0.0),
    ]);
    // Every attraction pair an exact conjunction: raw sum 32 against the
    // 40-point ceiling.
    let pool = vec![candidate("max", 0.0, 0.0)];
    let result = best_match(&seeker, &pool, &WeightTable::default()).unwrap();
    assert!(result.score <= 100);
    assert_eq!(result.score, 80);
}

#[test]
fn test_candidate_missing_points_scores_zero_not_error() {
    let seeker = chart(vec![ChartPoint::new("venus", 0.0)]);
    let empty = CandidateProfile {
        id: "empty".to_string(),
        display_name: "Empty".to_string(),
        points: chart(vec![]),
    };
    let result = best_match(&seeker, &[empty], &WeightTable::default()).unwrap();
    assert_eq!(result.candidate_id, "empty");
    assert_eq!(result.score, 0);
    assert!(result.top_aspect.is_empty());
}

#[test]
fn test_pool_loads_from_json() {
    let json = r#"[
        {
            "id": "vega",
            "display_name": "Vega",
            "points": { "points": [
                { "id": "venus", "lon": 12.5 },
                { "id": "mars", "lon": 198.0, "retrograde": true }
            ] }
        }
    ]"#;
    let pool = pool_from_json(json).unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].points.get("mars").unwrap().lon, 198.0);
    assert!(pool[0].points.get("mars").unwrap().retrograde);
}
