//! Category-quota-constrained selection.
//!
//! Splits the pool by format according to a [`QuotaSpec`], spread-selects
//! within each category in declared order, and backfills any shortfall
//! from the remaining quota-matching screens only. When the quota matches
//! nothing at all, the selector falls back to an unconstrained spread over
//! the full pool — a non-matching diverse result beats an empty one for an
//! interactive tool.

use std::collections::HashSet;

use crate::allocation::allocate_counts;
use crate::models::{format_matches, QuotaSpec, Screen, SelectionResult};
use crate::selection::spread::annotate_min_distances;
use crate::selection::SpreadSelector;

/// Dedup key for screens moving between the shared pool and the
/// selection: screen id, or rounded coordinates when the id is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ScreenKey {
    Id(String),
    Coords(i64, i64),
}

impl ScreenKey {
    fn of(screen: &Screen) -> Self {
        if screen.id.is_empty() {
            // 7 decimals ≈ centimeter precision.
            ScreenKey::Coords(
                (screen.lat * 1e7).round() as i64,
                (screen.lon * 1e7).round() as i64,
            )
        } else {
            ScreenKey::Id(screen.id.clone())
        }
    }
}

/// Quota-aware spread selector.
///
/// # Example
/// ```
/// use screenplan::models::{QuotaSpec, Screen};
/// use screenplan::selection::{MixSelector, SpreadSelector};
///
/// let screens = vec![
///     Screen::new("b1", 55.7, 37.5).with_format("BILLBOARD"),
///     Screen::new("b2", 55.8, 37.7).with_format("BILLBOARD"),
///     Screen::new("c1", 55.9, 37.6).with_format("CITY_FORMAT_RC"),
/// ];
/// let spec = QuotaSpec::parse("BILLBOARD:2,CITY:1");
/// let selector = MixSelector::new(SpreadSelector::new().with_seed(5));
/// assert_eq!(selector.select(&screens, 3, &spec).len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MixSelector {
    spread: SpreadSelector,
}

impl MixSelector {
    /// Creates a mix selector driving the given spread configuration.
    pub fn new(spread: SpreadSelector) -> Self {
        Self { spread }
    }

    /// Selects up to `n` screens honoring the quota spec.
    ///
    /// An empty (or all-invalid) spec degrades to a plain spread select.
    pub fn select(&self, screens: &[Screen], n: usize, spec: &QuotaSpec) -> SelectionResult {
        if spec.is_effectively_empty() {
            return self.spread.select(screens, n);
        }

        let base_pool: Vec<Screen> = screens
            .iter()
            .filter(|s| s.has_valid_coords() && spec.matches_format(&s.format))
            .cloned()
            .collect();
        if base_pool.is_empty() {
            // Nothing matches the requested formats; a diverse result is
            // still more useful than an empty answer.
            return self.spread.select(screens, n);
        }

        let targets = allocate_counts(n, spec);
        let mut pool = base_pool;
        let mut combined: Vec<Screen> = Vec::new();
        let mut used: HashSet<ScreenKey> = HashSet::new();

        for (token, need) in targets {
            if need == 0 || pool.is_empty() {
                continue;
            }
            let subset: Vec<Screen> = pool
                .iter()
                .filter(|s| format_matches(&s.format, &token))
                .cloned()
                .collect();
            if subset.is_empty() {
                continue;
            }
            let picked = self.spread.select(&subset, need.min(subset.len()));
            for sel in picked.screens {
                used.insert(ScreenKey::of(&sel.screen));
                combined.push(sel.screen);
            }
            pool.retain(|s| !used.contains(&ScreenKey::of(s)));
        }

        // Under-populated categories leave a shortfall; backfill from
        // whatever the quota still allows.
        let shortfall = n.saturating_sub(combined.len());
        if shortfall > 0 && !pool.is_empty() {
            let extra = self.spread.select(&pool, shortfall.min(pool.len()));
            for sel in extra.screens {
                used.insert(ScreenKey::of(&sel.screen));
                combined.push(sel.screen);
            }
        }

        combined.truncate(n);
        annotate_min_distances(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn city_mix() -> Vec<Screen> {
        let mut screens = Vec::new();
        for i in 0..12 {
            screens.push(
                Screen::new(format!("bb{i}"), 55.0 + i as f64 * 0.05, 37.0)
                    .with_format("BILLBOARD"),
            );
        }
        for i in 0..6 {
            screens.push(
                Screen::new(format!("cf{i}"), 55.0, 37.2 + i as f64 * 0.05)
                    .with_format("CITY_FORMAT_RC"),
            );
        }
        for i in 0..4 {
            screens.push(
                Screen::new(format!("ss{i}"), 55.4, 37.2 + i as f64 * 0.05)
                    .with_format("SUPERSITE"),
            );
        }
        screens
    }

    fn selector() -> MixSelector {
        MixSelector::new(SpreadSelector::new().with_seed(11))
    }

    #[test]
    fn test_empty_spec_degrades_to_spread() {
        let screens = city_mix();
        let result = selector().select(&screens, 5, &QuotaSpec::new());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_quota_shares_respected() {
        let screens = city_mix();
        let spec = QuotaSpec::parse("BILLBOARD:80%,CITY:20%");
        let result = selector().select(&screens, 10, &spec);
        assert_eq!(result.len(), 10);
        let billboards = result.iter_screens().filter(|s| s.format == "BILLBOARD").count();
        let city = result.iter_screens().filter(|s| s.format.starts_with("CITY_FORMAT")).count();
        assert_eq!(billboards, 8);
        assert_eq!(city, 2);
    }

    #[test]
    fn test_never_selects_outside_quota() {
        let screens = city_mix();
        let spec = QuotaSpec::parse("BILLBOARD:50%,CITY:50%");
        let result = selector().select(&screens, 14, &spec);
        assert!(result
            .iter_screens()
            .all(|s| s.format == "BILLBOARD" || s.format.starts_with("CITY_FORMAT")));
    }

    #[test]
    fn test_backfill_from_quota_pool_only() {
        // CITY can supply at most 6 of the asked 10; the shortfall comes
        // from BILLBOARD (the other quota token), never SUPERSITE.
        let screens = city_mix();
        let spec = QuotaSpec::parse("CITY:10,BILLBOARD:0");
        let result = selector().select(&screens, 10, &spec);
        assert_eq!(result.len(), 10);
        assert!(result.iter_screens().all(|s| s.format != "SUPERSITE"));
        let city = result.iter_screens().filter(|s| s.format.starts_with("CITY_FORMAT")).count();
        assert_eq!(city, 6);
    }

    #[test]
    fn test_unmatched_quota_falls_back_to_full_pool() {
        let screens = city_mix();
        let spec = QuotaSpec::parse("LED_WALL:100%");
        let result = selector().select(&screens, 5, &spec);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let screens = city_mix();
        let spec = QuotaSpec::parse("BILLBOARD:60%,CITY:40%");
        let result = selector().select(&screens, 15, &spec);
        let ids: HashSet<&str> = result.iter_screens().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), result.len());
    }

    #[test]
    fn test_coordinate_dedup_for_empty_ids() {
        let screens = vec![
            Screen::new("", 55.0, 37.0).with_format("BILLBOARD"),
            Screen::new("", 55.1, 37.1).with_format("BILLBOARD"),
            Screen::new("", 55.2, 37.2).with_format("BILLBOARD"),
        ];
        let spec = QuotaSpec::parse("BILLBOARD:100%");
        let result = selector().select(&screens, 3, &spec);
        assert_eq!(result.len(), 3);
        let keys: HashSet<(i64, i64)> = result
            .iter_screens()
            .map(|s| ((s.lat * 1e7).round() as i64, (s.lon * 1e7).round() as i64))
            .collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_truncates_to_n() {
        let screens = city_mix();
        let spec = QuotaSpec::parse("BILLBOARD:12,CITY:6");
        let result = selector().select(&screens, 4, &spec);
        assert_eq!(result.len(), 4);
    }
}
