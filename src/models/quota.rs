//! Category quota (mix) specification.
//!
//! A quota spec splits a total selection count across screen formats,
//! e.g. `"BILLBOARD:70%,SUPERSITE:30%"` or `"CITY_FORMAT_RC:5,CITY_FORMAT_WD:15"`.
//! Values ending in `%` are percentage shares of the remainder left after
//! fixed counts; bare integers are fixed counts. Entries that parse as
//! neither are kept as [`Share::Invalid`] and skipped by allocation —
//! a lenient-parsing policy made explicit in the data model.

use serde::{Deserialize, Serialize};

/// One parsed quota value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Share {
    /// Fixed number of screens.
    Fixed(u32),
    /// Percentage of the remainder after fixed counts.
    Percent(f64),
    /// Unparsable value, preserved verbatim. Ignored by allocation.
    Invalid(String),
}

/// A single `token:value` quota entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaEntry {
    /// Format token (matched case-insensitively, see [`format_matches`]).
    pub token: String,
    /// Parsed share.
    pub share: Share,
}

/// An ordered category quota specification.
///
/// Order matters: per-category selection runs in declared order, and
/// allocation resolves fixed entries before percentage entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaSpec {
    /// Entries in declared order.
    pub entries: Vec<QuotaEntry>,
}

impl QuotaSpec {
    /// Creates an empty spec (no quota constraints).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn with_entry(mut self, token: impl Into<String>, share: Share) -> Self {
        self.entries.push(QuotaEntry {
            token: token.into(),
            share,
        });
        self
    }

    /// Parses the wire format: `token:value` pairs separated by `,`, `;`,
    /// or `|`. Pairs without a `:` are skipped; values are parsed into
    /// [`Share`] without dropping anything (unparsable values become
    /// [`Share::Invalid`]).
    ///
    /// # Example
    /// ```
    /// use screenplan::models::{QuotaSpec, Share};
    ///
    /// let spec = QuotaSpec::parse("BILLBOARD:70%, SUPERSITE:30%");
    /// assert_eq!(spec.entries.len(), 2);
    /// assert_eq!(spec.entries[0].share, Share::Percent(70.0));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace(['|', ';'], ",");
        let mut entries = Vec::new();
        for part in normalized.split(',') {
            let part = part.trim();
            let Some((token, value)) = part.split_once(':') else {
                continue;
            };
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            entries.push(QuotaEntry {
                token: token.to_string(),
                share: parse_share(value.trim()),
            });
        }
        Self { entries }
    }

    /// Whether the spec has no usable (non-[`Share::Invalid`]) entries.
    pub fn is_effectively_empty(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|e| !matches!(e.share, Share::Invalid(_)))
    }

    /// Whether a screen format matches any token in the spec.
    pub fn matches_format(&self, format: &str) -> bool {
        self.entries.iter().any(|e| format_matches(format, &e.token))
    }
}

fn parse_share(value: &str) -> Share {
    if let Some(pct) = value.strip_suffix('%') {
        match pct.trim().parse::<f64>() {
            Ok(p) if p.is_finite() => Share::Percent(p),
            _ => Share::Invalid(value.to_string()),
        }
    } else {
        match value.parse::<u32>() {
            Ok(n) => Share::Fixed(n),
            Err(_) => Share::Invalid(value.to_string()),
        }
    }
}

/// Whether a screen format matches a quota token.
///
/// Matching is case- and whitespace-insensitive. Two alias classes exist:
/// the city-light family (`CITY`, `CITY_FORMAT`, `CITYFORMAT`, `CITYLIGHT`)
/// matches any format with the `CITY_FORMAT` prefix, and `BB` is shorthand
/// for `BILLBOARD`. Everything else compares exactly.
pub fn format_matches(format: &str, token: &str) -> bool {
    let fmt = format.trim().to_uppercase();
    let tok = token.trim().to_uppercase();
    match tok.as_str() {
        "CITY" | "CITY_FORMAT" | "CITYFORMAT" | "CITYLIGHT" => fmt.starts_with("CITY_FORMAT"),
        "BILLBOARD" | "BB" => fmt == "BILLBOARD",
        _ => fmt == tok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_and_fixed() {
        let spec = QuotaSpec::parse("BILLBOARD:70%,SUPERSITE:30");
        assert_eq!(spec.entries[0].share, Share::Percent(70.0));
        assert_eq!(spec.entries[1].share, Share::Fixed(30));
    }

    #[test]
    fn test_parse_alternate_separators() {
        let a = QuotaSpec::parse("A:1|B:2");
        let b = QuotaSpec::parse("A:1;B:2");
        let c = QuotaSpec::parse("A:1,B:2");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.entries.len(), 2);
    }

    #[test]
    fn test_parse_keeps_invalid_entries() {
        let spec = QuotaSpec::parse("A:abc,B:50%");
        assert_eq!(spec.entries[0].share, Share::Invalid("abc".to_string()));
        assert_eq!(spec.entries[1].share, Share::Percent(50.0));
        assert!(!spec.is_effectively_empty());
    }

    #[test]
    fn test_parse_skips_pairs_without_colon() {
        let spec = QuotaSpec::parse("A:1, junk ,B:2");
        assert_eq!(spec.entries.len(), 2);
    }

    #[test]
    fn test_effectively_empty() {
        assert!(QuotaSpec::parse("").is_effectively_empty());
        assert!(QuotaSpec::parse("A:x,B:y").is_effectively_empty());
        assert!(!QuotaSpec::parse("A:1").is_effectively_empty());
    }

    #[test]
    fn test_format_matching_aliases() {
        assert!(format_matches("CITY_FORMAT_RC", "city"));
        assert!(format_matches("CITY_FORMAT_WD", "CITY_FORMAT"));
        assert!(!format_matches("BILLBOARD", "city"));
        assert!(format_matches("BILLBOARD", "bb"));
        assert!(format_matches("billboard", "BILLBOARD"));
        assert!(format_matches(" SUPERSITE ", "supersite"));
        assert!(!format_matches("SUPERSITE", "BILLBOARD"));
    }

    #[test]
    fn test_spec_matches_format() {
        let spec = QuotaSpec::parse("BILLBOARD:70%,CITY:30%");
        assert!(spec.matches_format("BILLBOARD"));
        assert!(spec.matches_format("CITY_FORMAT_RC"));
        assert!(!spec.matches_format("SUPERSITE"));
    }
}
