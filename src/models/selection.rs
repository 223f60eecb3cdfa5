//! Selection result model.
//!
//! Output of the spread and mix selectors: the chosen screens, each
//! annotated with the distance to its nearest co-selected screen. The
//! annotation is a diversity diagnostic for the caller, not an input to
//! any further computation.

use serde::{Deserialize, Serialize};

use super::Screen;

/// One selected screen with its diversity diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedScreen {
    /// The chosen screen (copied from the input table).
    pub screen: Screen,
    /// Haversine distance (km, 3 decimals) to the nearest other selected
    /// screen. 0.0 when the selection holds a single screen.
    pub min_distance_km: f64,
}

/// An ordered set of selected screens.
///
/// Invariant: no two entries share a screen `id` (screens with an empty
/// id are deduplicated by rounded coordinates instead).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Selected screens in pick order.
    pub screens: Vec<SelectedScreen>,
}

impl SelectionResult {
    /// Creates an empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of selected screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Iterates over the underlying screens.
    pub fn iter_screens(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter().map(|s| &s.screen)
    }

    /// Clones the underlying screens into a plain table, e.g. to feed
    /// the forecast engine.
    pub fn to_screens(&self) -> Vec<Screen> {
        self.iter_screens().cloned().collect()
    }
}
