//! Capacity- and budget-constrained schedule forecasting.
//!
//! Turns a selected screen set plus a time window (and optionally a
//! budget) into a per-screen play schedule. Prices are imputed first
//! ([`BidImputer`]); the slot budget is derived from the average imputed
//! price and split evenly across screens, while each row's cost uses the
//! screen's own price.
//!
//! # Slot split
//!
//! The even split does not clip rows to their individual capacity: the
//! per-screen cap is uniform, so the target is already bounded by
//! `screens × per_screen_capacity` and no row can receive more than its
//! own capacity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forecast::BidImputer;
use crate::models::{ForecastPlan, PlanRow, Screen};

/// Default campaign length in days.
pub const DEFAULT_DAYS: u32 = 7;
/// Default broadcast hours per day.
pub const DEFAULT_HOURS_PER_DAY: u32 = 8;
/// Default maximum plays per hour on one screen.
pub const MAX_PLAYS_PER_HOUR: u32 = 6;

/// Forecast failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// A request parameter is out of range, or the selection is empty.
    InvalidInput(String),
    /// No screen resolved a price at any imputation tier; a plan would
    /// be a meaningless zero-cost schedule.
    InsufficientPriceData,
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidInput(msg) => write!(f, "invalid forecast input: {msg}"),
            ForecastError::InsufficientPriceData => {
                write!(f, "no screen has a resolvable minimum bid at any imputation tier")
            }
        }
    }
}

impl std::error::Error for ForecastError {}

/// Forecast parameters.
///
/// # Example
/// ```
/// use screenplan::forecast::ForecastRequest;
///
/// let request = ForecastRequest::new()
///     .with_days(14)
///     .with_budget(500_000.0);
/// assert_eq!(request.days, 14);
/// assert_eq!(request.hours_per_day, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Campaign length in days.
    pub days: u32,
    /// Broadcast hours per day.
    pub hours_per_day: u32,
    /// Spend ceiling. `None` = fill the whole capacity.
    pub budget: Option<f64>,
    /// Maximum plays per hour on one screen.
    pub plays_per_hour_cap: u32,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            budget: None,
            plays_per_hour_cap: MAX_PLAYS_PER_HOUR,
        }
    }
}

impl ForecastRequest {
    /// Creates a request with default window and cap, no budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the campaign length.
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets broadcast hours per day.
    pub fn with_hours_per_day(mut self, hours_per_day: u32) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }

    /// Sets broadcast hours per day from an hour-window string
    /// (see [`parse_hour_windows`]); unparsable input leaves the
    /// current value.
    pub fn with_hour_windows(mut self, windows: &str) -> Self {
        if let Some(hours) = parse_hour_windows(windows) {
            self.hours_per_day = hours;
        }
        self
    }

    /// Sets the budget ceiling.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Sets the per-screen hourly play cap.
    pub fn with_plays_per_hour_cap(mut self, cap: u32) -> Self {
        self.plays_per_hour_cap = cap;
        self
    }
}

/// Sums broadcast hours from a window list like `"07-10,17-21"`.
///
/// Windows may cross midnight (`"22-02"` counts 4 hours). Returns `None`
/// when nothing parses to a positive total.
pub fn parse_hour_windows(s: &str) -> Option<u32> {
    let mut total = 0u32;
    for part in s.split(',') {
        let part = part.trim();
        let Some((a, b)) = part.split_once('-') else {
            continue;
        };
        let (Ok(a), Ok(b)) = (a.trim().parse::<u32>(), b.trim().parse::<u32>()) else {
            continue;
        };
        if a > 23 || b > 23 {
            continue;
        }
        total += if b > a { b - a } else { 24 - a + b };
    }
    (total > 0).then_some(total)
}

/// Schedule forecast engine.
///
/// # Example
/// ```
/// use screenplan::forecast::{ForecastEngine, ForecastRequest};
/// use screenplan::models::Screen;
///
/// let screens = vec![
///     Screen::new("a", 55.7, 37.6).with_min_bid(100.0),
///     Screen::new("b", 55.8, 37.7).with_min_bid(100.0),
/// ];
/// let plan = ForecastEngine::new()
///     .forecast(&screens, &ForecastRequest::new())
///     .unwrap();
/// assert_eq!(plan.total_slots, 2 * 7 * 8 * 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine;

impl ForecastEngine {
    /// Creates a forecast engine.
    pub fn new() -> Self {
        Self
    }

    /// Builds a plan for the given selection.
    ///
    /// With a budget, total slots are `min(floor(budget / avg_price),
    /// capacity)`; without one the whole capacity is planned and the
    /// effective budget reported back as `slots × avg_price`.
    pub fn forecast(
        &self,
        selection: &[Screen],
        request: &ForecastRequest,
    ) -> Result<ForecastPlan, ForecastError> {
        validate_request(selection, request)?;

        let imputer = BidImputer::fit(selection);
        let prices: Vec<_> = selection.iter().map(|s| imputer.price_for(s)).collect();
        let avg_price = prices.iter().map(|(p, _)| p).sum::<f64>() / prices.len() as f64;
        if !imputer.has_any_price() || avg_price <= 0.0 {
            return Err(ForecastError::InsufficientPriceData);
        }

        let per_screen_capacity = u64::from(request.days)
            * u64::from(request.hours_per_day)
            * u64::from(request.plays_per_hour_cap);
        let total_capacity = per_screen_capacity * selection.len() as u64;

        let target_slots = match request.budget {
            Some(budget) => ((budget / avg_price).floor() as u64).min(total_capacity),
            None => total_capacity,
        };
        let effective_budget = request
            .budget
            .unwrap_or(target_slots as f64 * avg_price);

        let slots = distribute_evenly(selection.len(), target_slots);
        let rows: Vec<PlanRow> = selection
            .iter()
            .zip(prices)
            .zip(slots)
            .map(|((screen, (price_used, price_source)), planned_slots)| PlanRow {
                screen: screen.clone(),
                price_used,
                price_source,
                planned_slots,
                planned_cost: planned_slots as f64 * price_used,
            })
            .collect();

        Ok(ForecastPlan {
            total_slots: rows.iter().map(|r| r.planned_slots).sum(),
            total_cost: rows.iter().map(|r| r.planned_cost).sum(),
            avg_price,
            effective_budget,
            days: request.days,
            hours_per_day: request.hours_per_day,
            plays_per_hour_cap: request.plays_per_hour_cap,
            rows,
        })
    }
}

fn validate_request(selection: &[Screen], request: &ForecastRequest) -> Result<(), ForecastError> {
    if selection.is_empty() {
        return Err(ForecastError::InvalidInput("empty selection".to_string()));
    }
    if request.days == 0 {
        return Err(ForecastError::InvalidInput("days must be positive".to_string()));
    }
    if request.hours_per_day == 0 {
        return Err(ForecastError::InvalidInput(
            "hours_per_day must be positive".to_string(),
        ));
    }
    if request.plays_per_hour_cap == 0 {
        return Err(ForecastError::InvalidInput(
            "plays_per_hour_cap must be positive".to_string(),
        ));
    }
    if let Some(budget) = request.budget {
        if !budget.is_finite() || budget < 0.0 {
            return Err(ForecastError::InvalidInput(format!(
                "budget must be a non-negative number, got {budget}"
            )));
        }
    }
    Ok(())
}

/// Evenly splits `total_slots` across `n_items`; the first
/// `total_slots % n_items` rows receive one extra slot.
fn distribute_evenly(n_items: usize, total_slots: u64) -> Vec<u64> {
    if n_items == 0 {
        return Vec::new();
    }
    let base = total_slots / n_items as u64;
    let extra = (total_slots % n_items as u64) as usize;
    (0..n_items)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
