//! Total orderings over `f64` that place NaN last.
//!
//! Priority scores and edge weights come from caller data and may contain
//! NaN. Every sort in the allocator goes through these helpers so that a NaN
//! always sorts after every number, in both directions. Two NaNs compare
//! equal, which leaves them in input order under a stable sort. The same
//! goes for `0.0` and `-0.0`.

use core::cmp::Ordering;

/// Ascending order, NaN last.
pub fn ascending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Descending order, NaN still last.
pub fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<f64>, cmp: fn(f64, f64) -> Ordering) -> Vec<String> {
        values.sort_by(|a, b| cmp(*a, *b));
        values.iter().map(|v| format!("{v}")).collect()
    }

    #[test]
    fn ascending_puts_nan_last() {
        let out = sorted(vec![3.0, f64::NAN, -1.0, f64::INFINITY, 0.5], ascending_nan_last);
        assert_eq!(out, vec!["-1", "0.5", "3", "inf", "NaN"]);
    }

    #[test]
    fn descending_puts_nan_last() {
        let out = sorted(vec![3.0, f64::NAN, -1.0, f64::NEG_INFINITY, 0.5], descending_nan_last);
        assert_eq!(out, vec!["3", "0.5", "-1", "-inf", "NaN"]);
    }

    #[test]
    fn signed_zeros_tie() {
        assert_eq!(ascending_nan_last(0.0, -0.0), Ordering::Equal);
        assert_eq!(descending_nan_last(-0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn nans_tie_with_each_other() {
        assert_eq!(ascending_nan_last(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(descending_nan_last(f64::NAN, -f64::NAN), Ordering::Equal);
    }
}
