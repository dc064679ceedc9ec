//! Numeric version comparison
//!
//! Cursor versions are plain dotted numerics ("1.2.3", occasionally with a
//! fourth component), so ordering compares integer component tuples rather
//! than strings. Shorter tuples are padded with trailing zeros before
//! comparison, which makes "1.10.0" sort above "1.9.0".

use std::cmp::Ordering;

/// Parse a dotted version into its integer components.
///
/// Returns `None` if any component is not a plain integer.
pub fn parse_components(version: &str) -> Option<Vec<u64>> {
    version.split('.').map(|part| part.parse().ok()).collect()
}

/// Compare two version strings by numeric components.
///
/// Unparseable versions fall back to string comparison so the sort stays
/// total; they never appear in URLs matched by the extraction patterns.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_components(a), parse_components(b)) {
        (Some(mut left), Some(mut right)) => {
            let len = left.len().max(right.len());
            left.resize(len, 0);
            right.resize(len, 0);
            left.cmp(&right)
        }
        _ => a.cmp(b),
    }
}
