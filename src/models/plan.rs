//! Forecast plan model.
//!
//! Output of the forecast engine: one row per screen in the input
//! selection, carrying the price actually used (imputed where missing),
//! where that price came from, and the planned slot count and cost.

use serde::{Deserialize, Serialize};

use super::Screen;

/// Which imputation tier supplied a screen's price.
///
/// Tiers widen from the screen's own value to the global median; the
/// first tier with any observed prices wins. [`PriceSource::None`] means
/// no price was resolvable anywhere — callers must treat the paired 0.0
/// as "unknown", not as a free screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceSource {
    /// The screen's own minimum bid.
    Raw,
    /// Median over screens sharing (city, format, owner).
    CityFormatOwner,
    /// Median over screens sharing (format, owner).
    FormatOwner,
    /// Median over screens sharing (format).
    Format,
    /// Median over all screens with an observed bid.
    Global,
    /// No observed price anywhere in the table.
    None,
}

impl PriceSource {
    /// Whether this source carries a real price.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, PriceSource::None)
    }
}

/// One planned screen: imputed price plus slot allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    /// The screen being planned (copied from the input selection).
    pub screen: Screen,
    /// Price per play used for this screen (imputed if missing).
    pub price_used: f64,
    /// Imputation tier that supplied `price_used`.
    pub price_source: PriceSource,
    /// Number of plays scheduled on this screen.
    pub planned_slots: u64,
    /// `planned_slots × price_used`, at this screen's own price.
    pub planned_cost: f64,
}

/// A complete schedule forecast.
///
/// Invariants: `total_slots` is the sum of row slot counts and equals
/// the capacity- or budget-derived target; when a budget was supplied,
/// `total_cost` stays within one average price unit of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPlan {
    /// Per-screen rows in input order.
    pub rows: Vec<PlanRow>,
    /// Sum of planned slots across rows.
    pub total_slots: u64,
    /// Sum of planned costs across rows.
    pub total_cost: f64,
    /// Mean of `price_used` across rows, the rate used for budgeting.
    pub avg_price: f64,
    /// The budget the plan was sized against: the caller's budget if one
    /// was given, otherwise `total_slots × avg_price`.
    pub effective_budget: f64,
    /// Campaign length in days.
    pub days: u32,
    /// Broadcast hours per day.
    pub hours_per_day: u32,
    /// Maximum plays per hour per screen.
    pub plays_per_hour_cap: u32,
}

impl ForecastPlan {
    /// Maximum slots the window allows across all rows.
    pub fn total_capacity(&self) -> u64 {
        self.rows.len() as u64
            * u64::from(self.days)
            * u64::from(self.hours_per_day)
            * u64::from(self.plays_per_hour_cap)
    }
}
