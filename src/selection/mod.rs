//! Screen selection engines.
//!
//! Provides geographically diverse sampling and its quota-constrained
//! orchestration.
//!
//! # Usage
//!
//! ```
//! use screenplan::models::{QuotaSpec, Screen};
//! use screenplan::selection::{MixSelector, SpreadSelector};
//!
//! let screens = vec![
//!     Screen::new("a", 55.70, 37.50).with_format("BILLBOARD"),
//!     Screen::new("b", 55.80, 37.70).with_format("BILLBOARD"),
//!     Screen::new("c", 55.90, 37.60).with_format("CITY_FORMAT_RC"),
//! ];
//!
//! // Plain diverse sample.
//! let spread = SpreadSelector::new().with_seed(42);
//! let diverse = spread.select(&screens, 2);
//! assert_eq!(diverse.len(), 2);
//!
//! // Quota-constrained sample.
//! let mix = MixSelector::new(spread);
//! let picked = mix.select(&screens, 2, &QuotaSpec::parse("BILLBOARD:50%,CITY:50%"));
//! assert_eq!(picked.len(), 2);
//! ```

mod mix;
mod spread;

pub use mix::MixSelector;
pub use spread::SpreadSelector;
