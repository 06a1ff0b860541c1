use crate::aspects::angular_distance;
use crate::chart::{Chart, ChartPoint};
use crate::patterns::types::{ChartPattern, PatternKind, PatternOrbs};
use crate::zodiac::{element_of, Element};

/// Check a distance against an exact angle with the given orb.
fn within(distance: f64, exact: f64, orb: f64) -> bool {
    (distance - exact).abs() <= orb
}

fn distance(p1: &ChartPoint, p2: &ChartPoint) -> f64 {
    angular_distance(p1.lon, p2.lon)
}

/// Run all pattern detections over one chart.
///
/// Always returns one record per [`PatternKind`] in fixed order; kinds the
/// chart does not form come back locked. Points missing the attribute a
/// detection needs (sign, house, ...) are excluded from that detection
/// rather than failing the run.
pub fn detect_patterns(chart: &Chart, orbs: &PatternOrbs) -> Vec<ChartPattern> {
    let patterns: Vec<ChartPattern> = PatternKind::ALL
        .iter()
        .map(|kind| match kind {
            PatternKind::Stellium => detect_stellium(chart),
            PatternKind::GrandTrine => detect_grand_trine(chart, orbs),
            PatternKind::TSquare => detect_t_square(chart, orbs),
            PatternKind::GrandCross => detect_grand_cross(chart, orbs),
            PatternKind::Yod => detect_yod(chart, orbs),
            PatternKind::Sect => detect_sect(chart),
            PatternKind::RetrogradeHeavy => detect_retrograde_heavy(chart),
            PatternKind::ElementalDominance => detect_elemental_dominance(chart),
        })
        .collect();
    log::debug!(
        "detect_patterns: {}/{} unlocked over {} points",
        patterns.iter().filter(|p| p.unlocked).count(),
        patterns.len(),
        chart.len()
    );
    patterns
}

/// Group points by a key, preserving first-seen key order.
fn group_by<F>(chart: &Chart, key: F) -> Vec<(String, Vec<&ChartPoint>)>
where
    F: Fn(&ChartPoint) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<&ChartPoint>)> = Vec::new();
    for point in &chart.points {
        let Some(k) = key(point) else { continue };
        match groups.iter_mut().find(|(gk, _)| *gk == k) {
            Some((_, members)) => members.push(point),
            None => groups.push((k, vec![point])),
        }
    }
    groups
}

/// Three or more points sharing a sign, or sharing a house. A qualifying
/// sign group takes precedence over a house group for the description.
fn detect_stellium(chart: &Chart) -> ChartPattern {
    let sign_groups = group_by(chart, |p| p.sign.clone());
    if let Some((sign, members)) = sign_groups.iter().find(|(_, m)| m.len() >= 3) {
        let names: Vec<String> = members.iter().map(|p| p.id.clone()).collect();
        let description = format!("Stellium in {}: {}", sign, names.join(", "));
        return ChartPattern::unlocked(PatternKind::Stellium, names, description);
    }

    let house_groups = group_by(chart, |p| p.house.map(|h| h.to_string()));
    if let Some((house, members)) = house_groups.iter().find(|(_, m)| m.len() >= 3) {
        let names: Vec<String> = members.iter().map(|p| p.id.clone()).collect();
        let description = format!("Stellium in house {}: {}", house, names.join(", "));
        return ChartPattern::unlocked(PatternKind::Stellium, names, description);
    }

    ChartPattern::locked(PatternKind::Stellium)
}

/// First triple (ascending index order) whose three pairwise distances are
/// all trines.
fn detect_grand_trine(chart: &Chart, orbs: &PatternOrbs) -> ChartPattern {
    let points = &chart.points;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if !within(distance(&points[i], &points[j]), 120.0, orbs.trine) {
                continue;
            }
            for k in (j + 1)..points.len() {
                if within(distance(&points[i], &points[k]), 120.0, orbs.trine)
                    && within(distance(&points[j], &points[k]), 120.0, orbs.trine)
                {
                    let names = vec![
                        points[i].id.clone(),
                        points[j].id.clone(),
                        points[k].id.clone(),
                    ];
                    let description =
                        format!("Grand Trine: {}", names.join(" - "));
                    return ChartPattern::unlocked(PatternKind::GrandTrine, names, description);
                }
            }
        }
    }
    ChartPattern::locked(PatternKind::GrandTrine)
}

/// An opposition pair squared by a third point; the apex is that third
/// point.
fn detect_t_square(chart: &Chart, orbs: &PatternOrbs) -> ChartPattern {
    let points = &chart.points;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if !within(distance(&points[i], &points[j]), 180.0, orbs.opposition) {
                continue;
            }
            for (k, apex) in points.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                if within(distance(&points[i], apex), 90.0, orbs.square)
                    && within(distance(&points[j], apex), 90.0, orbs.square)
                {
                    let names = vec![points[i].id.clone(), points[j].id.clone(), apex.id.clone()];
                    let description = format!(
                        "T-Square: {} opposite {}, apex {}",
                        points[i].id, points[j].id, apex.id
                    );
                    return ChartPattern::unlocked(PatternKind::TSquare, names, description);
                }
            }
        }
    }
    ChartPattern::locked(PatternKind::TSquare)
}

/// Two disjoint opposition pairs joined by squares. The only search that
/// is quadratic in pairs; n stays small enough that brute force is fine.
fn detect_grand_cross(chart: &Chart, orbs: &PatternOrbs) -> ChartPattern {
    let points = &chart.points;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if !within(distance(&points[i], &points[j]), 180.0, orbs.opposition) {
                continue;
            }
            for k in 0..points.len() {
                if k == i || k == j {
                    continue;
                }
                for l in (k + 1)..points.len() {
                    if l == i || l == j {
                        continue;
                    }
                    if within(distance(&points[k], &points[l]), 180.0, orbs.opposition)
                        && within(distance(&points[i], &points[k]), 90.0, orbs.square)
                        && within(distance(&points[j], &points[l]), 90.0, orbs.square)
                    {
                        let names = vec![
                            points[i].id.clone(),
                            points[j].id.clone(),
                            points[k].id.clone(),
                            points[l].id.clone(),
                        ];
                        let description = format!("Grand Cross: {}", names.join(" - "));
                        return ChartPattern::unlocked(PatternKind::GrandCross, names, description);
                    }
                }
            }
        }
    }
    ChartPattern::locked(PatternKind::GrandCross)
}

/// A sextile pair with a third point quincunx to both; the apex is that
/// third point.
fn detect_yod(chart: &Chart, orbs: &PatternOrbs) -> ChartPattern {
    let points = &chart.points;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if !within(distance(&points[i], &points[j]), 60.0, orbs.sextile) {
                continue;
            }
            for (k, apex) in points.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                if within(distance(&points[i], apex), 150.0, orbs.quincunx)
                    && within(distance(&points[j], apex), 150.0, orbs.quincunx)
                {
                    let names = vec![points[i].id.clone(), points[j].id.clone(), apex.id.clone()];
                    let description = format!(
                        "Yod: {} sextile {}, apex {}",
                        points[i].id, points[j].id, apex.id
                    );
                    return ChartPattern::unlocked(PatternKind::Yod, names, description);
                }
            }
        }
    }
    ChartPattern::locked(PatternKind::Yod)
}

/// Day/night chart by the sun's house number: houses 1-6 are "below the
/// horizon" (night), 7-12 above (day). A fixed convention, not horizon
/// geometry.
fn detect_sect(chart: &Chart) -> ChartPattern {
    let Some(sun) = chart.get("sun") else {
        return ChartPattern::locked(PatternKind::Sect);
    };
    let Some(house) = sun.house else {
        return ChartPattern::locked(PatternKind::Sect);
    };
    let description = if house <= 6 {
        "Night chart: Sun below the horizon".to_string()
    } else {
        "Day chart: Sun above the horizon".to_string()
    };
    ChartPattern::unlocked(PatternKind::Sect, vec![sun.id.clone()], description)
}

/// Three or more retrograde points.
fn detect_retrograde_heavy(chart: &Chart) -> ChartPattern {
    let names: Vec<String> = chart
        .points
        .iter()
        .filter(|p| p.retrograde)
        .map(|p| p.id.clone())
        .collect();
    if names.len() >= 3 {
        let description = format!("{} retrograde: {}", names.len(), names.join(", "));
        ChartPattern::unlocked(PatternKind::RetrogradeHeavy, names, description)
    } else {
        ChartPattern::locked(PatternKind::RetrogradeHeavy)
    }
}

/// Four or more points in one element. Ties for the highest tally break to
/// the first element in Fire, Earth, Air, Water order.
fn detect_elemental_dominance(chart: &Chart) -> ChartPattern {
    let mut tallies: [(Element, Vec<String>); 4] = [
        (Element::Fire, Vec::new()),
        (Element::Earth, Vec::new()),
        (Element::Air, Vec::new()),
        (Element::Water, Vec::new()),
    ];
    for point in &chart.points {
        let Some(element) = point.sign.as_deref().and_then(element_of) else {
            continue;
        };
        if let Some(slot) = tallies.iter_mut().find(|(e, _)| *e == element) {
            slot.1.push(point.id.clone());
        }
    }

    // max_by_key would keep the last maximum on a tie; the tie must go to
    // the first element in canonical order, so track the best by hand.
    let mut best = &tallies[0];
    for tally in &tallies[1..] {
        if tally.1.len() > best.1.len() {
            best = tally;
        }
    }
    if best.1.len() >= 4 {
        let description = format!(
            "Dominant element {}: {} points",
            best.0.as_str(),
            best.1.len()
        );
        ChartPattern::unlocked(PatternKind::ElementalDominance, best.1.clone(), description)
    } else {
        ChartPattern::locked(PatternKind::ElementalDominance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartPoint;

    fn chart(points: Vec<ChartPoint>) -> Chart {
        Chart::new(points).unwrap()
    }

    #[test]
    fn test_within() {
        assert!(within(120.0, 120.0, 8.0));
        assert!(within(127.9, 120.0, 8.0));
        assert!(!within(128.1, 120.0, 8.0));
    }

    #[test]
    fn test_empty_chart_all_locked() {
        let patterns = detect_patterns(&chart(vec![]), &PatternOrbs::default());
        assert_eq!(patterns.len(), PatternKind::ALL.len());
        assert!(patterns.iter().all(|p| !p.unlocked));
    }

    #[test]
    fn test_sect_night_chart() {
        let c = chart(vec![ChartPoint::new("sun", 10.0).with_house(3)]);
        let patterns = detect_patterns(&c, &PatternOrbs::default());
        let sect = patterns
            .iter()
            .find(|p| p.kind == PatternKind::Sect)
            .unwrap();
        assert!(sect.unlocked);
        assert!(sect.description.starts_with("Night chart"));
    }

    #[test]
    fn test_sect_locked_without_sun_house() {
        let c = chart(vec![ChartPoint::new("sun", 10.0)]);
        let patterns = detect_patterns(&c, &PatternOrbs::default());
        let sect = patterns
            .iter()
            .find(|p| p.kind == PatternKind::Sect)
            .unwrap();
        assert!(!sect.unlocked);
    }

    #[test]
    fn test_elemental_tie_breaks_to_canonical_order() {
        // Four water and four fire points; fire wins the tie because it
        // comes first in the canonical element order.
        let mut points = Vec::new();
        for (i, sign) in ["leo", "aries", "sagittarius", "leo"].iter().enumerate() {
            points.push(ChartPoint::new(format!("f{}", i), i as f64).with_sign(*sign));
        }
        for (i, sign) in ["cancer", "scorpio", "pisces", "cancer"].iter().enumerate() {
            points.push(ChartPoint::new(format!("w{}", i), 100.0 + i as f64).with_sign(*sign));
        }
        let patterns = detect_patterns(&chart(points), &PatternOrbs::default());
        let dominance = patterns
            .iter()
            .find(|p| p.kind == PatternKind::ElementalDominance)
            .unwrap();
        assert!(dominance.unlocked);
        assert!(dominance.description.contains("fire"));
    }
}
