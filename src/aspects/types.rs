use serde::{Deserialize, Serialize};

/// The aspect kinds this system recognizes.
///
/// Quincunx only participates in pattern detection (Yod apex legs); the
/// default classification catalog carries the five majors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
}

impl AspectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
            AspectKind::Quincunx => "quincunx",
        }
    }

    /// Display name with leading capital, for contributing-aspect strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
            AspectKind::Quincunx => "Quincunx",
        }
    }

    /// Exact angle in degrees.
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Quincunx => 150.0,
        }
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a classification catalog: an aspect kind with the orb
/// tolerance in force at this call site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AspectDef {
    pub kind: AspectKind,
    pub orb: f64,
}

/// A classified aspect between two named points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aspect {
    /// Id of the first point.
    pub a: String,
    /// Id of the second point.
    pub b: String,
    pub kind: AspectKind,
    /// Angular distance between the two longitudes, in [0, 180].
    pub distance: f64,
    /// Deviation from the exact angle.
    pub orb: f64,
}

impl Aspect {
    /// Human-readable form: "venus Trine mars".
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.a, self.kind.display_name(), self.b)
    }
}
