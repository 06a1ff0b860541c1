use crate::aspects::types::{Aspect, AspectDef, AspectKind};
use crate::chart::{Chart, ChartPoint};
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Shortest-arc angular distance between two longitudes. Always in
/// [0, 180], symmetric in its arguments.
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// An ordered aspect catalog. Order is tie-break priority: classification
/// scans entries front to back and the first entry whose orb covers the
/// distance wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectCatalog {
    pub defs: Vec<AspectDef>,
}

impl AspectCatalog {
    /// The five majors in priority order with the orbs the pattern and
    /// chart displays use.
    pub fn majors() -> Self {
        Self {
            defs: vec![
                AspectDef { kind: AspectKind::Conjunction, orb: 8.0 },
                AspectDef { kind: AspectKind::Sextile, orb: 6.0 },
                AspectDef { kind: AspectKind::Square, orb: 7.0 },
                AspectDef { kind: AspectKind::Trine, orb: 8.0 },
                AspectDef { kind: AspectKind::Opposition, orb: 8.0 },
            ],
        }
    }

    /// Classify an angular distance. Returns the first matching entry in
    /// catalog order, or `None` if no orb covers the distance.
    pub fn classify(&self, distance: f64) -> Option<&AspectDef> {
        self.defs
            .iter()
            .find(|def| (distance - def.kind.exact_angle()).abs() <= def.orb)
    }

    /// Classify the aspect between two chart points. Self-comparison by id
    /// yields `None` so a point iterated against itself never reports a
    /// degenerate 0° conjunction.
    pub fn aspect_between(&self, p1: &ChartPoint, p2: &ChartPoint) -> Option<Aspect> {
        if p1.id == p2.id {
            return None;
        }
        self.aspect_between_named(&p1.id, p1.lon, &p2.id, p2.lon)
    }

    /// Classify by raw longitudes with explicit names. No same-id skip:
    /// cross-chart comparisons legitimately pair e.g. sun with sun.
    pub fn aspect_between_named(&self, a: &str, lon_a: f64, b: &str, lon_b: f64) -> Option<Aspect> {
        let distance = angular_distance(lon_a, lon_b);
        self.classify(distance).map(|def| Aspect {
            a: a.to_string(),
            b: b.to_string(),
            kind: def.kind,
            distance,
            orb: (distance - def.kind.exact_angle()).abs(),
        })
    }
}

impl Default for AspectCatalog {
    fn default() -> Self {
        Self::majors()
    }
}

/// All aspects within one chart: upper-triangle pair scan in chart order.
pub fn aspects_in_chart(chart: &Chart, catalog: &AspectCatalog) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..chart.points.len() {
        for j in (i + 1)..chart.points.len() {
            if let Some(aspect) = catalog.aspect_between(&chart.points[i], &chart.points[j]) {
                aspects.push(aspect);
            }
        }
    }
    log::debug!("aspects_in_chart: {} pairs classified", aspects.len());
    aspects
}

/// All cross-chart aspects: full cross product of A's points against B's.
pub fn aspects_between_charts(a: &Chart, b: &Chart, catalog: &AspectCatalog) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for pa in &a.points {
        for pb in &b.points {
            if let Some(aspect) = catalog.aspect_between_named(&pa.id, pa.lon, &pb.id, pb.lon) {
                aspects.push(aspect);
            }
        }
    }
    log::debug!("aspects_between_charts: {} pairs classified", aspects.len());
    aspects
}

/// Weighted aspect table for compatibility scoring, distinct from the
/// classification orbs: harmonious aspects score high, hard aspects low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTable {
    pub catalog: AspectCatalog,
    pub conjunction: f64,
    pub trine: f64,
    pub sextile: f64,
    pub opposition: f64,
    pub square: f64,
    /// Best possible per-pair weight, used as the scoring denominator.
    pub max_weight: f64,
}

impl WeightTable {
    pub fn base_weight(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Trine => self.trine,
            AspectKind::Sextile => self.sextile,
            AspectKind::Opposition => self.opposition,
            AspectKind::Square => self.square,
            AspectKind::Quincunx => 0.0,
        }
    }

    /// Weight for one classified aspect: the base weight scaled by
    /// `0.5 + 0.5 * tightness`, where `tightness = 1 - orb/tolerance`.
    /// An exact aspect scores its full base weight, a maximally-wide one
    /// scores half.
    pub fn weigh(&self, aspect: &Aspect) -> f64 {
        let tolerance = self
            .catalog
            .defs
            .iter()
            .find(|def| def.kind == aspect.kind)
            .map_or(8.0, |def| def.orb);
        let tightness = (1.0 - aspect.orb / tolerance).clamp(0.0, 1.0);
        self.base_weight(aspect.kind) * (0.5 + 0.5 * tightness)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            catalog: AspectCatalog {
                defs: vec![
                    AspectDef { kind: AspectKind::Conjunction, orb: 8.0 },
                    AspectDef { kind: AspectKind::Sextile, orb: 6.0 },
                    AspectDef { kind: AspectKind::Square, orb: 7.0 },
                    AspectDef { kind: AspectKind::Trine, orb: 8.0 },
                    AspectDef { kind: AspectKind::Opposition, orb: 8.0 },
                ],
            },
            conjunction: 8.0,
            trine: 7.0,
            sextile: 5.0,
            opposition: 3.0,
            square: 2.0,
            max_weight: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_distance_symmetric() {
        for (a, b) in [(0.0, 10.0), (350.0, 10.0), (123.4, 301.2)] {
            assert!((angular_distance(a, b) - angular_distance(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_distance(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert_eq!(angular_distance(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_classify_priority_order() {
        // A wide catalog where 30° is inside both the conjunction and the
        // sextile orb: the earlier entry must win.
        let catalog = AspectCatalog {
            defs: vec![
                AspectDef { kind: AspectKind::Conjunction, orb: 30.0 },
                AspectDef { kind: AspectKind::Sextile, orb: 30.0 },
            ],
        };
        let def = catalog.classify(30.0).unwrap();
        assert_eq!(def.kind, AspectKind::Conjunction);
    }

    #[test]
    fn test_self_comparison_skipped() {
        let catalog = AspectCatalog::majors();
        let p = ChartPoint::new("sun", 100.0);
        assert!(catalog.aspect_between(&p, &p).is_none());
    }

    #[test]
    fn test_weigh_scales_with_tightness() {
        let table = WeightTable::default();
        let exact = Aspect {
            a: "sun".into(),
            b: "moon".into(),
            kind: AspectKind::Conjunction,
            distance: 0.0,
            orb: 0.0,
        };
        // 0-orb: scale 0.5 + 0.5*1.0 = 1.0 → full base weight.
        assert!((table.weigh(&exact) - 8.0).abs() < 1e-9);

        let wide = Aspect { orb: 8.0, distance: 8.0, ..exact.clone() };
        // max-orb: scale 0.5 → half base weight.
        assert!((table.weigh(&wide) - 4.0).abs() < 1e-9);
    }
}
