//! Quota allocation.
//!
//! Resolves a [`QuotaSpec`] into integer per-category targets for a
//! requested total. Fixed counts are honored first; percentage shares
//! split whatever remains using largest-remainder apportionment
//! (floor each share, then hand out leftover units by descending
//! fractional part, ties by input order).
//!
//! Invalid entries are skipped, and a percentage block whose declared
//! shares sum to zero or less sends the whole remainder to its first
//! entry. Both are documented fallback policies, not errors: the caller
//! is an interactive tool that prefers a best-effort split to a refusal.

use crate::models::{QuotaSpec, Share};

/// Resolves per-category integer targets.
///
/// Output order: fixed entries first (input order), then percentage
/// entries (input order). The counts sum to at most `total_n`; if
/// malformed fixed entries alone exceed it, counts are trimmed from the
/// end of the list, never below zero.
///
/// # Example
/// ```
/// use screenplan::allocation::allocate_counts;
/// use screenplan::models::QuotaSpec;
///
/// let spec = QuotaSpec::parse("A:60%,B:40%");
/// assert_eq!(
///     allocate_counts(100, &spec),
///     vec![("A".to_string(), 60), ("B".to_string(), 40)],
/// );
/// ```
pub fn allocate_counts(total_n: usize, spec: &QuotaSpec) -> Vec<(String, usize)> {
    let mut fixed: Vec<(String, usize)> = Vec::new();
    let mut percent: Vec<(String, f64)> = Vec::new();

    for entry in &spec.entries {
        match &entry.share {
            Share::Fixed(n) => fixed.push((entry.token.clone(), *n as usize)),
            Share::Percent(p) => percent.push((entry.token.clone(), *p)),
            Share::Invalid(_) => {}
        }
    }

    let fixed_sum: usize = fixed.iter().map(|(_, n)| n).sum();
    let remaining = total_n.saturating_sub(fixed_sum);

    let mut out = fixed;
    if remaining > 0 && !percent.is_empty() {
        out.extend(apportion(remaining, &percent));
    } else {
        // Keep zero-count rows so every declared category appears.
        out.extend(percent.into_iter().map(|(tok, _)| (tok, 0)));
    }

    trim_overflow(&mut out, total_n);
    out
}

/// Largest-remainder apportionment of `remaining` units across
/// percentage shares.
fn apportion(remaining: usize, percent: &[(String, f64)]) -> Vec<(String, usize)> {
    let share_sum: f64 = percent.iter().map(|(_, p)| p).sum();
    if share_sum <= 0.0 {
        // Declared but unusable shares: everything to the first entry.
        let mut out: Vec<(String, usize)> = percent.iter().map(|(tok, _)| (tok.clone(), 0)).collect();
        out[0].1 = remaining;
        return out;
    }

    let raw: Vec<f64> = percent.iter().map(|(_, p)| remaining as f64 * p / share_sum).collect();
    let mut counts: Vec<usize> = raw.iter().map(|x| x.floor() as usize).collect();
    let mut leftover = remaining - counts.iter().sum::<usize>();

    // Indices by descending fractional part; stable sort keeps input
    // order on ties.
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| (raw[b] - raw[b].floor()).total_cmp(&(raw[a] - raw[a].floor())));

    let mut i = 0;
    while leftover > 0 {
        counts[order[i % order.len()]] += 1;
        leftover -= 1;
        i += 1;
    }

    percent
        .iter()
        .zip(counts)
        .map(|((tok, _), n)| (tok.clone(), n))
        .collect()
}

/// Trims counts from the end of the list until their sum fits `total_n`.
fn trim_overflow(out: &mut [(String, usize)], total_n: usize) {
    let mut total: usize = out.iter().map(|(_, n)| n).sum();
    for entry in out.iter_mut().rev() {
        if total <= total_n {
            break;
        }
        let cut = (total - total_n).min(entry.1);
        entry.1 -= cut;
        total -= cut;
    }
}
