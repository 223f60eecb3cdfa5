//! Hierarchical minimum-bid imputation.
//!
//! Vendor feeds carry sparse pricing: many screens arrive without a
//! minimum bid. The imputer fills the gaps with the median bid over
//! progressively wider groups — (city, format, owner), then
//! (format, owner), then (format), then the whole table — and records
//! which tier supplied each value. Medians resist the outliers common
//! in mixed-format feeds; the tier order trades specificity for coverage.

use std::collections::HashMap;

use crate::models::{PriceSource, Screen};

/// Precomputed tier medians for one screen table.
///
/// Build once per run with [`BidImputer::fit`], then query per screen.
///
/// # Example
/// ```
/// use screenplan::forecast::BidImputer;
/// use screenplan::models::{PriceSource, Screen};
///
/// let screens = vec![
///     Screen::new("a", 0.0, 0.0)
///         .with_city("Moscow")
///         .with_format("BILLBOARD")
///         .with_owner("Gallery")
///         .with_min_bid(100.0),
///     Screen::new("b", 0.0, 0.0)
///         .with_city("Kazan")
///         .with_format("BILLBOARD")
///         .with_owner("Russ"),
/// ];
/// let imputer = BidImputer::fit(&screens);
/// assert_eq!(imputer.price_for(&screens[1]), (100.0, PriceSource::Format));
/// ```
#[derive(Debug, Clone)]
pub struct BidImputer {
    by_city_format_owner: HashMap<(String, String, String), f64>,
    by_format_owner: HashMap<(String, String), f64>,
    by_format: HashMap<String, f64>,
    global: Option<f64>,
}

impl BidImputer {
    /// Computes tier medians from every screen with an observed bid.
    pub fn fit(screens: &[Screen]) -> Self {
        let mut cfo: HashMap<(String, String, String), Vec<f64>> = HashMap::new();
        let mut fo: HashMap<(String, String), Vec<f64>> = HashMap::new();
        let mut f: HashMap<String, Vec<f64>> = HashMap::new();
        let mut all: Vec<f64> = Vec::new();

        for screen in screens {
            let Some(bid) = screen.observed_bid() else {
                continue;
            };
            let (city, format, owner) = group_key(screen);
            cfo.entry((city.clone(), format.clone(), owner.clone())).or_default().push(bid);
            fo.entry((format.clone(), owner)).or_default().push(bid);
            f.entry(format).or_default().push(bid);
            all.push(bid);
        }

        Self {
            by_city_format_owner: cfo.into_iter().map(|(k, v)| (k, median(v))).collect(),
            by_format_owner: fo.into_iter().map(|(k, v)| (k, median(v))).collect(),
            by_format: f.into_iter().map(|(k, v)| (k, median(v))).collect(),
            global: if all.is_empty() { None } else { Some(median(all)) },
        }
    }

    /// Whether any screen in the fitted table had an observed bid.
    ///
    /// When `false`, every lookup returns `(0.0, PriceSource::None)` and
    /// the caller must not treat the zeros as real prices.
    pub fn has_any_price(&self) -> bool {
        self.global.is_some()
    }

    /// The price to use for a screen, with the tier that supplied it.
    ///
    /// A screen's own bid always wins; group medians only ever fill
    /// holes, never overwrite observed values.
    pub fn price_for(&self, screen: &Screen) -> (f64, PriceSource) {
        if let Some(bid) = screen.observed_bid() {
            return (bid, PriceSource::Raw);
        }
        let (city, format, owner) = group_key(screen);
        if let Some(&m) = self.by_city_format_owner.get(&(city, format.clone(), owner.clone())) {
            return (m, PriceSource::CityFormatOwner);
        }
        if let Some(&m) = self.by_format_owner.get(&(format.clone(), owner)) {
            return (m, PriceSource::FormatOwner);
        }
        if let Some(&m) = self.by_format.get(&format) {
            return (m, PriceSource::Format);
        }
        match self.global {
            Some(m) => (m, PriceSource::Global),
            None => (0.0, PriceSource::None),
        }
    }

    /// Imputes the whole table in input order.
    pub fn impute(screens: &[Screen]) -> Vec<(f64, PriceSource)> {
        let imputer = Self::fit(screens);
        screens.iter().map(|s| imputer.price_for(s)).collect()
    }
}

/// Grouping key, case- and whitespace-normalized like format matching.
fn group_key(screen: &Screen) -> (String, String, String) {
    (
        screen.city.trim().to_uppercase(),
        screen.format.trim().to_uppercase(),
        screen.owner.trim().to_uppercase(),
    )
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
