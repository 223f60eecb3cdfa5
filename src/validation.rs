//! Input validation for inventory tables.
//!
//! Checks structural integrity of a screen table before selection or
//! forecasting. Detects:
//! - Out-of-range or non-finite coordinates
//! - Duplicate screen IDs
//! - Missing minimum bids (advisory — imputation handles these)
//!
//! Selection itself silently drops invalid-coordinate screens (a
//! documented fallback); this module is for callers that want the
//! problems reported instead.

use std::collections::HashSet;

use crate::models::Screen;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Latitude/longitude is non-finite or outside WGS84 ranges.
    InvalidCoordinate,
    /// Two screens share the same ID.
    DuplicateId,
    /// Screen has no observed minimum bid (advisory).
    MissingPrice,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a screen table.
///
/// Checks:
/// 1. Every screen has finite, in-range coordinates
/// 2. No duplicate screen IDs (empty IDs are exempt — coordinate
///    fallback keys cover them)
/// 3. Every screen has an observed minimum bid (advisory only)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_screens(screens: &[Screen]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for screen in screens {
        if !screen.has_valid_coords() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCoordinate,
                format!(
                    "Screen {}: invalid coordinates ({}, {})",
                    screen.id, screen.lat, screen.lon
                ),
            ));
        }
        if !screen.id.is_empty() && !seen_ids.insert(screen.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate screen ID: {}", screen.id),
            ));
        }
        if screen.observed_bid().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPrice,
                format!("Screen {}: no observed minimum bid", screen.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like [`validate_screens`] but ignores advisory `MissingPrice` errors.
pub fn validate_screens_strict_coords(screens: &[Screen]) -> ValidationResult {
    match validate_screens(screens) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let hard: Vec<ValidationError> = errors
                .into_iter()
                .filter(|e| e.kind != ValidationErrorKind::MissingPrice)
                .collect();
            if hard.is_empty() {
                Ok(())
            } else {
                Err(hard)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_screen(id: &str) -> Screen {
        Screen::new(id, 55.0, 37.0).with_min_bid(100.0)
    }

    #[test]
    fn test_valid_table_passes() {
        let screens = vec![valid_screen("a"), valid_screen("b")];
        assert!(validate_screens(&screens).is_ok());
    }

    #[test]
    fn test_invalid_coordinates_reported() {
        let screens = vec![
            valid_screen("a"),
            Screen::new("b", 99.0, 37.0).with_min_bid(100.0),
        ];
        let errors = validate_screens(&screens).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCoordinate));
    }

    #[test]
    fn test_duplicate_ids_reported() {
        let screens = vec![valid_screen("a"), valid_screen("a")];
        let errors = validate_screens(&screens).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_ids_not_duplicates() {
        let screens = vec![
            Screen::new("", 55.0, 37.0).with_min_bid(1.0),
            Screen::new("", 55.1, 37.1).with_min_bid(1.0),
        ];
        assert!(validate_screens(&screens).is_ok());
    }

    #[test]
    fn test_missing_price_is_advisory() {
        let screens = vec![Screen::new("a", 55.0, 37.0)];
        let errors = validate_screens(&screens).unwrap_err();
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::MissingPrice));
        assert!(validate_screens_strict_coords(&screens).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let screens = vec![
            Screen::new("a", f64::INFINITY, 37.0),
            valid_screen("a"),
        ];
        let errors = validate_screens(&screens).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
