//! Inventory and planning domain models.
//!
//! Provides the core data types consumed and produced by the selection
//! and forecasting engines. The engines see only this canonical schema;
//! mapping vendor feeds (field aliases, unit quirks) onto it is the
//! caller's job at the boundary.
//!
//! # Tables
//!
//! | Model | Role |
//! |-------|------|
//! | `Screen` | Input inventory row |
//! | `QuotaSpec` | Category mix constraint |
//! | `SelectionResult` | Selector output |
//! | `ForecastPlan` | Forecast engine output |

mod plan;
mod quota;
mod screen;
mod selection;

pub use plan::{ForecastPlan, PlanRow, PriceSource};
pub use quota::{format_matches, QuotaEntry, QuotaSpec, Share};
pub use screen::Screen;
pub use selection::{SelectedScreen, SelectionResult};
