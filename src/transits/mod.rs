pub mod duration;

pub use duration::{
    estimate_days, estimate_days_for_scope, estimate_end_date, TransitScope,
    MAX_FORECAST_DAYS, STATIONARY_RATE_EPSILON,
};
