use serde::{Deserialize, Serialize};

/// The chart patterns this system recognizes, in the fixed order a
/// detection run reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Stellium,
    GrandTrine,
    TSquare,
    GrandCross,
    Yod,
    Sect,
    RetrogradeHeavy,
    ElementalDominance,
}

impl PatternKind {
    /// Detection/report order. One record per kind per run.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Stellium,
        PatternKind::GrandTrine,
        PatternKind::TSquare,
        PatternKind::GrandCross,
        PatternKind::Yod,
        PatternKind::Sect,
        PatternKind::RetrogradeHeavy,
        PatternKind::ElementalDominance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PatternKind::Stellium => "Stellium",
            PatternKind::GrandTrine => "Grand Trine",
            PatternKind::TSquare => "T-Square",
            PatternKind::GrandCross => "Grand Cross",
            PatternKind::Yod => "Yod",
            PatternKind::Sect => "Sect",
            PatternKind::RetrogradeHeavy => "Retrograde Season",
            PatternKind::ElementalDominance => "Elemental Dominance",
        }
    }
}

/// One pattern record. Locked records still carry the kind's static title
/// so callers can render a "locked" badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPattern {
    pub kind: PatternKind,
    pub unlocked: bool,
    /// Ids of the points forming the pattern; empty when locked.
    pub involved: Vec<String>,
    pub description: String,
}

impl ChartPattern {
    pub fn locked(kind: PatternKind) -> Self {
        Self {
            kind,
            unlocked: false,
            involved: Vec::new(),
            description: kind.title().to_string(),
        }
    }

    pub fn unlocked(kind: PatternKind, involved: Vec<String>, description: String) -> Self {
        Self {
            kind,
            unlocked: true,
            involved,
            description,
        }
    }
}

/// Orb tolerances for pattern geometry. Injected configuration, not
/// globals; defaults match the shipped behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternOrbs {
    pub trine: f64,
    pub opposition: f64,
    pub square: f64,
    pub sextile: f64,
    /// Quincunx legs of a Yod are held tighter than the majors.
    pub quincunx: f64,
}

impl Default for PatternOrbs {
    fn default() -> Self {
        Self {
            trine: 8.0,
            opposition: 8.0,
            square: 7.0,
            sextile: 6.0,
            quincunx: 3.0,
        }
    }
}
