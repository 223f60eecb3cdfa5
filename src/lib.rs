//! Selection and forecasting engine for DOOH screen inventory.
//!
//! Selects subsets of geographically distributed advertising screens
//! under diversity, quota, and budget constraints, and forecasts the
//! cost and volume of a display schedule. The engine is pure and
//! in-memory: deterministic given its inputs and a seed, with no I/O —
//! vendor-API clients, spreadsheet export, and command parsing live in
//! the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Screen`, `QuotaSpec`, `SelectionResult`,
//!   `ForecastPlan`
//! - **`geo`**: Haversine distance, median point, radius filtering
//! - **`selection`**: `SpreadSelector` (greedy k-center) and `MixSelector`
//!   (category quotas)
//! - **`allocation`**: Quota spec → integer per-category targets
//! - **`forecast`**: `BidImputer` (hierarchical median imputation) and
//!   `ForecastEngine` (capacity/budget slot allocation)
//! - **`validation`**: Input integrity checks (coordinates, duplicate IDs)
//!
//! # Pipeline
//!
//! ```
//! use screenplan::forecast::{ForecastEngine, ForecastRequest};
//! use screenplan::models::{QuotaSpec, Screen};
//! use screenplan::selection::{MixSelector, SpreadSelector};
//!
//! let inventory = vec![
//!     Screen::new("b1", 55.70, 37.50).with_format("BILLBOARD").with_min_bid(120.0),
//!     Screen::new("b2", 55.80, 37.70).with_format("BILLBOARD").with_min_bid(140.0),
//!     Screen::new("c1", 55.90, 37.60).with_format("CITY_FORMAT_RC"),
//! ];
//!
//! let selector = MixSelector::new(SpreadSelector::new().with_seed(42));
//! let selection = selector.select(&inventory, 3, &QuotaSpec::parse("BILLBOARD:70%,CITY:30%"));
//!
//! let request = ForecastRequest::new().with_days(7).with_budget(250_000.0);
//! let plan = ForecastEngine::new()
//!     .forecast(&selection.to_screens(), &request)
//!     .unwrap();
//! assert!(plan.total_cost <= 250_000.0);
//! ```

pub mod allocation;
pub mod forecast;
pub mod geo;
pub mod models;
pub mod selection;
pub mod validation;
