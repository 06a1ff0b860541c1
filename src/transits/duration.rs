use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Rates below this magnitude (degrees/day) are treated as stationary:
/// the division would produce estimates too unreliable to report.
pub const STATIONARY_RATE_EPSILON: f64 = 1e-3;

/// Hard cap on reported durations. Near-stationary slow movers would
/// otherwise report multi-year windows from a rate estimate that is not
/// trustworthy at that timescale.
pub const MAX_FORECAST_DAYS: f64 = 365.0;

/// Which tolerance window a transiting relationship uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitScope {
    /// A transit to one person's chart: tight window.
    Personal,
    /// A collective (mundane) transit: wider window.
    Collective,
}

impl TransitScope {
    /// Window half-width in degrees.
    pub fn window(&self) -> f64 {
        match self {
            TransitScope::Personal => 1.0,
            TransitScope::Collective => 3.0,
        }
    }
}

/// Days until a transiting relationship leaves its tolerance window.
///
/// Sign convention: a negative `orb_change_rate` means the orb is
/// shrinking (applying, still heading toward exact); positive means it is
/// growing (separating, already past exact).
///
/// - Applying: `(current_orb + window) / |rate|` — time to reach exact
///   plus time to traverse out the far side of the window.
/// - Separating: `(window - current_orb) / rate`, floored at zero when
///   the orb is already outside the window.
///
/// Returns `None` when the rate is effectively stationary. Results are
/// capped at [`MAX_FORECAST_DAYS`].
pub fn estimate_days(current_orb: f64, orb_change_rate: f64, window: f64) -> Option<f64> {
    if orb_change_rate.abs() < STATIONARY_RATE_EPSILON {
        log::debug!(
            "estimate_days: rate {:.5} below stationary epsilon, no estimate",
            orb_change_rate
        );
        return None;
    }

    let days = if orb_change_rate < 0.0 {
        (current_orb + window) / orb_change_rate.abs()
    } else {
        ((window - current_orb) / orb_change_rate).max(0.0)
    };

    Some(days.min(MAX_FORECAST_DAYS))
}

/// [`estimate_days`] with the window taken from the transit scope.
pub fn estimate_days_for_scope(
    current_orb: f64,
    orb_change_rate: f64,
    scope: TransitScope,
) -> Option<f64> {
    estimate_days(current_orb, orb_change_rate, scope.window())
}

/// Calendar end of the window, given the caller's reference instant.
pub fn estimate_end_date(
    now: DateTime<Utc>,
    current_orb: f64,
    orb_change_rate: f64,
    scope: TransitScope,
) -> Option<DateTime<Utc>> {
    let days = estimate_days_for_scope(current_orb, orb_change_rate, scope)?;
    // Whole-second resolution is plenty for a display-facing estimate.
    Some(now + Duration::seconds((days * 86_400.0) as i64))
}
