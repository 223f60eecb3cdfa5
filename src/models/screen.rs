//! Screen (inventory item) model.
//!
//! A screen is a single advertising display: a geographic position plus
//! classification (format, city, owner) and an optional minimum bid.
//! Screens are immutable inputs — the engines never mutate the source
//! table, they produce derived result tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A digital advertising screen in the inventory.
///
/// Only `id`, `lat`, and `lon` are required for selection; `city`,
/// `format`, and `owner` drive quota matching and price imputation.
/// Vendor fields with no engine meaning ride along in `attributes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    /// Unique screen identifier (vendor GID).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Latitude, WGS84 degrees.
    pub lat: f64,
    /// Longitude, WGS84 degrees.
    pub lon: f64,
    /// Screen format (e.g. "BILLBOARD", "CITY_FORMAT_RC").
    pub format: String,
    /// City the screen is located in.
    pub city: String,
    /// Inventory owner / network operator.
    pub owner: String,
    /// Minimum bid per play. `None` = not provided by the vendor feed.
    pub min_bid: Option<f64>,
    /// Vendor-specific metadata passed through unchanged.
    pub attributes: HashMap<String, String>,
}

impl Screen {
    /// Creates a new screen at the given position.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            lat,
            lon,
            format: String::new(),
            city: String::new(),
            owner: String::new(),
            min_bid: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the screen name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the screen format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the minimum bid per play.
    pub fn with_min_bid(mut self, min_bid: f64) -> Self {
        self.min_bid = Some(min_bid);
        self
    }

    /// Adds a vendor-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether both coordinates are finite and inside the WGS84 ranges
    /// (|lat| ≤ 90, |lon| ≤ 180). Screens failing this are excluded
    /// from selection.
    pub fn has_valid_coords(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// The screen's position as a `(lat, lon)` pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Minimum bid if present and a usable number.
    pub fn observed_bid(&self) -> Option<f64> {
        self.min_bid.filter(|b| b.is_finite() && *b >= 0.0)
    }
}
