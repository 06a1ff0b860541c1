use serde::{Deserialize, Serialize};

/// One compatibility category: a label plus the point ids drawn from each
/// side. The two groups may overlap or be identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub label: String,
    pub a_points: Vec<String>,
    pub b_points: Vec<String>,
}

impl CategorySpec {
    pub fn new(label: &str, a_points: &[&str], b_points: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            a_points: a_points.iter().map(|s| s.to_string()).collect(),
            b_points: b_points.iter().map(|s| s.to_string()).collect(),
        }
    }
}

lazy_static::lazy_static! {
    /// The shipped category catalog over the classic personal planets.
    pub static ref DEFAULT_CATEGORIES: Vec<CategorySpec> = vec![
        CategorySpec::new("Emotional", &["moon", "venus"], &["moon", "venus"]),
        CategorySpec::new("Communication", &["mercury", "moon"], &["mercury", "jupiter"]),
        CategorySpec::new("Passion", &["venus", "mars"], &["venus", "mars"]),
        CategorySpec::new("Stability", &["saturn", "sun"], &["saturn", "sun"]),
        CategorySpec::new("Growth", &["jupiter", "sun"], &["jupiter", "moon"]),
    ];
}

/// A scored category with the aspects that contributed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    /// 0-100.
    pub score: u8,
    /// Human-readable contributing aspects: "venus Trine mars".
    pub contributing: Vec<String>,
}

/// A full two-chart compatibility result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Unweighted mean of category scores, rounded. 0-100.
    pub overall: u8,
    pub categories: Vec<CategoryScore>,
}
