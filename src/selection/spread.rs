//! Geographically diverse spread selection.
//!
//! # Algorithm
//!
//! Greedy k-center (farthest-point sampling, Gonzalez 1985): starting
//! from a seed screen, repeatedly add the screen farthest from everything
//! already chosen. Maximizes minimum pairwise separation within a factor
//! of 2 of optimal, in O(n·k) time and O(n) memory.
//!
//! Ties on the maximum frontier distance (exact float equality) are
//! broken uniformly at random, and the start screen may itself be random,
//! so repeated unseeded calls do not return a fixed selection; supplying
//! a seed makes the whole run reproducible.
//!
//! # Reference
//! Gonzalez (1985), "Clustering to minimize the maximum intercluster distance"

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::geo::{haversine_km, median_coords, round3};
use crate::models::{Screen, SelectedScreen, SelectionResult};

/// Farthest-point spread selector.
///
/// # Example
/// ```
/// use screenplan::models::Screen;
/// use screenplan::selection::SpreadSelector;
///
/// let screens = vec![
///     Screen::new("a", 55.70, 37.50),
///     Screen::new("b", 55.80, 37.70),
///     Screen::new("c", 55.75, 37.60),
/// ];
/// let result = SpreadSelector::new().with_seed(7).select(&screens, 2);
/// assert_eq!(result.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SpreadSelector {
    random_start: bool,
    seed: Option<u64>,
}

impl Default for SpreadSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadSelector {
    /// Creates a selector with a random start and no fixed seed.
    pub fn new() -> Self {
        Self {
            random_start: true,
            seed: None,
        }
    }

    /// Chooses the start screen at random (`true`, default) or as the
    /// screen closest to the coordinate-wise median of the pool (`false`).
    pub fn with_random_start(mut self, random_start: bool) -> Self {
        self.random_start = random_start;
        self
    }

    /// Fixes the RNG seed, making the selection reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects up to `n` screens maximizing spatial spread.
    ///
    /// Screens with invalid coordinates are excluded first. `n == 0` or
    /// an empty pool yields an empty result; `n ≥ pool size` returns the
    /// whole pool, still annotated with min-distance diagnostics.
    pub fn select(&self, screens: &[Screen], n: usize) -> SelectionResult {
        match self.seed {
            Some(seed) => self.select_with_rng(screens, n, &mut SmallRng::seed_from_u64(seed)),
            None => self.select_with_rng(screens, n, &mut SmallRng::from_os_rng()),
        }
    }

    /// Selects with a caller-owned RNG.
    pub fn select_with_rng<R: Rng>(&self, screens: &[Screen], n: usize, rng: &mut R) -> SelectionResult {
        let pool: Vec<&Screen> = screens.iter().filter(|s| s.has_valid_coords()).collect();
        if pool.is_empty() || n == 0 {
            return SelectionResult::empty();
        }
        let n = n.min(pool.len());
        let coords: Vec<(f64, f64)> = pool.iter().map(|s| s.coords()).collect();

        let start = if self.random_start {
            rng.random_range(0..pool.len())
        } else {
            // Closest screen to the coordinate-wise median of the pool.
            let center = median_coords(&coords).unwrap_or(coords[0]);
            argmin_distance(&coords, center)
        };

        let mut chosen: Vec<usize> = Vec::with_capacity(n);
        let mut selected = vec![false; pool.len()];
        chosen.push(start);
        selected[start] = true;

        // Frontier distance: each screen's distance to its nearest
        // already-chosen screen.
        let mut dists: Vec<f64> = coords.iter().map(|&c| haversine_km(coords[start], c)).collect();

        while chosen.len() < n {
            let maxd = dists
                .iter()
                .zip(&selected)
                .filter(|(_, &sel)| !sel)
                .map(|(&d, _)| d)
                .fold(f64::NEG_INFINITY, f64::max);
            let candidates: Vec<usize> = (0..pool.len())
                .filter(|&i| !selected[i] && dists[i] == maxd)
                .collect();
            let &next = candidates.choose(rng).unwrap();
            chosen.push(next);
            selected[next] = true;
            for i in 0..pool.len() {
                let d = haversine_km(coords[next], coords[i]);
                if d < dists[i] {
                    dists[i] = d;
                }
            }
        }

        annotate_min_distances(chosen.into_iter().map(|i| pool[i].clone()).collect())
    }
}

fn argmin_distance(coords: &[(f64, f64)], center: (f64, f64)) -> usize {
    let mut best = 0;
    let mut best_d = f64::INFINITY;
    for (i, &c) in coords.iter().enumerate() {
        let d = haversine_km(center, c);
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Builds a result from chosen screens, annotating each with the
/// distance to its nearest co-selected screen (0.0 for a singleton).
pub(crate) fn annotate_min_distances(chosen: Vec<Screen>) -> SelectionResult {
    let count = chosen.len();
    let screens = chosen
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let mut min_d = f64::INFINITY;
            for (j, other) in chosen.iter().enumerate() {
                if j != i {
                    min_d = min_d.min(haversine_km(screen.coords(), other.coords()));
                }
            }
            SelectedScreen {
                screen: screen.clone(),
                min_distance_km: if count > 1 { round3(min_d) } else { 0.0 },
            }
        })
        .collect();
    SelectionResult { screens }
}
