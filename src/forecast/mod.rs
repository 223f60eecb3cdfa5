//! Price imputation and schedule forecasting.
//!
//! [`BidImputer`] fills missing minimum bids with hierarchical group
//! medians; [`ForecastEngine`] turns a selection plus a time window
//! (and optionally a budget) into a per-screen play plan.
//!
//! # Usage
//!
//! ```
//! use screenplan::forecast::{ForecastEngine, ForecastRequest};
//! use screenplan::models::Screen;
//!
//! let screens = vec![
//!     Screen::new("a", 55.7, 37.6).with_format("BILLBOARD").with_min_bid(120.0),
//!     Screen::new("b", 55.8, 37.7).with_format("BILLBOARD"),
//! ];
//! let request = ForecastRequest::new().with_days(7).with_budget(100_000.0);
//! let plan = ForecastEngine::new().forecast(&screens, &request).unwrap();
//! assert!(plan.total_cost <= 100_000.0 + plan.avg_price);
//! ```

mod engine;
mod pricing;

pub use engine::{
    parse_hour_windows, ForecastEngine, ForecastError, ForecastRequest, DEFAULT_DAYS,
    DEFAULT_HOURS_PER_DAY, MAX_PLAYS_PER_HOUR,
};
pub use pricing::BidImputer;
