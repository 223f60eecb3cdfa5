//! Geographic primitives.
//!
//! Haversine great-circle distance, coordinate-wise median, and radius
//! filtering over the screen table. All distances are kilometers.

use crate::models::Screen;

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two `(lat, lon)` points in kilometers.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Coordinate-wise median position of a set of screens.
///
/// Even counts take the midpoint of the two middle values. Returns
/// `None` for an empty slice.
pub fn median_point(screens: &[Screen]) -> Option<(f64, f64)> {
    median_coords(&screens.iter().map(Screen::coords).collect::<Vec<_>>())
}

/// Coordinate-wise median of a set of `(lat, lon)` points.
pub fn median_coords(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let lat = median(points.iter().map(|p| p.0));
    let lon = median(points.iter().map(|p| p.1));
    Some((lat, lon))
}

fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.total_cmp(b));
    let mid = v.len() / 2;
    if v.len() % 2 == 1 {
        v[mid]
    } else {
        (v[mid - 1] + v[mid]) / 2.0
    }
}

/// Screens within `radius_km` of `center`, paired with their distance
/// (km, 3 decimals), sorted ascending by distance.
pub fn within_radius(screens: &[Screen], center: (f64, f64), radius_km: f64) -> Vec<(Screen, f64)> {
    let mut out: Vec<(Screen, f64)> = screens
        .iter()
        .filter(|s| s.has_valid_coords())
        .filter_map(|s| {
            let d = haversine_km(center, s.coords());
            (d <= radius_km).then(|| (s.clone(), round3(d)))
        })
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1));
    out
}

/// Rounds to 3 decimals (meter precision for km distances).
pub(crate) fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = (55.7558, 37.6173);
        assert!(haversine_km(p, p).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_moscow_spb() {
        // Moscow ↔ Saint Petersburg, roughly 634 km.
        let moscow = (55.7558, 37.6173);
        let spb = (59.9311, 30.3609);
        let d = haversine_km(moscow, spb);
        assert!((d - 634.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn test_haversine_symmetry() {
        let a = (41.0, 29.0);
        let b = (48.8, 2.3);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_median_point_odd_and_even() {
        let screens = vec![
            Screen::new("a", 0.0, 0.0),
            Screen::new("b", 2.0, 4.0),
            Screen::new("c", 10.0, 8.0),
        ];
        assert_eq!(median_point(&screens), Some((2.0, 4.0)));

        let screens = vec![Screen::new("a", 0.0, 0.0), Screen::new("b", 2.0, 6.0)];
        assert_eq!(median_point(&screens), Some((1.0, 3.0)));

        assert_eq!(median_point(&[]), None);
    }

    #[test]
    fn test_within_radius_sorted_and_filtered() {
        let screens = vec![
            Screen::new("far", 56.5, 37.6),
            Screen::new("near", 55.76, 37.62),
            Screen::new("bad", f64::NAN, 37.6),
        ];
        let center = (55.7558, 37.6173);
        let hits = within_radius(&screens, center, 50.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.id, "near");

        let hits = within_radius(&screens, center, 200.0);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].1 <= hits[1].1);
    }
}
