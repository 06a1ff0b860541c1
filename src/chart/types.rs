use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised at the chart construction boundary.
///
/// The calculation components never fail on missing data; out-of-contract
/// input is rejected here instead of silently producing a wrong score.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Longitude for {point_id} is not finite: {value}")]
    NonFiniteLongitude { point_id: String, value: f64 },
    #[error("Duplicate point id in chart: {point_id}")]
    DuplicatePoint { point_id: String },
    #[error("Invalid house for {point_id}: {house} (valid: 1-12)")]
    InvalidHouse { point_id: String, house: u8 },
}

/// One charted body: a point on the 360° circle plus display attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Point id: "sun", "moon", "venus", etc. Unique within a chart.
    pub id: String,
    /// Longitude in degrees, normalized to [0, 360).
    pub lon: f64,
    /// Sign name ("aries".."pisces"), if the upstream step assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
    /// House number (1-12), if the upstream step assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
    /// Whether the body is retrograde.
    #[serde(default)]
    pub retrograde: bool,
}

impl ChartPoint {
    pub fn new(id: impl Into<String>, lon: f64) -> Self {
        Self {
            id: id.into(),
            lon: normalize_degrees(lon),
            sign: None,
            house: None,
            retrograde: false,
        }
    }

    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = Some(sign.into());
        self
    }

    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = retrograde;
        self
    }
}

/// An ordered set of chart points for one person or one moment.
///
/// Backed by a `Vec` so that pattern searches iterate in a stable,
/// caller-controlled order (first-match tie-breaks must be deterministic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub points: Vec<ChartPoint>,
}

impl Chart {
    /// Build a chart, normalizing longitudes and validating the input
    /// contract: finite longitudes, unique ids, houses within 1-12.
    pub fn new(points: Vec<ChartPoint>) -> Result<Self, ChartError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for point in &points {
            if !point.lon.is_finite() {
                return Err(ChartError::NonFiniteLongitude {
                    point_id: point.id.clone(),
                    value: point.lon,
                });
            }
            if !seen.insert(point.id.as_str()) {
                return Err(ChartError::DuplicatePoint {
                    point_id: point.id.clone(),
                });
            }
            if let Some(house) = point.house {
                if !(1..=12).contains(&house) {
                    return Err(ChartError::InvalidHouse {
                        point_id: point.id.clone(),
                        house,
                    });
                }
            }
        }
        let points = points
            .into_iter()
            .map(|mut p| {
                p.lon = normalize_degrees(p.lon);
                p
            })
            .collect();
        Ok(Self { points })
    }

    /// Look up a point by id.
    pub fn get(&self, id: &str) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_longitudes() {
        let chart = Chart::new(vec![ChartPoint::new("sun", 370.0)]).unwrap();
        assert_eq!(chart.get("sun").unwrap().lon, 10.0);
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = Chart::new(vec![ChartPoint::new("sun", f64::NAN)]);
        assert!(matches!(
            result,
            Err(ChartError::NonFiniteLongitude { .. })
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Chart::new(vec![
            ChartPoint::new("sun", 10.0),
            ChartPoint::new("sun", 20.0),
        ]);
        assert!(matches!(result, Err(ChartError::DuplicatePoint { .. })));
    }

    #[test]
    fn test_new_rejects_house_out_of_range() {
        let result = Chart::new(vec![ChartPoint::new("sun", 10.0).with_house(13)]);
        assert!(matches!(result, Err(ChartError::InvalidHouse { .. })));
    }
}
