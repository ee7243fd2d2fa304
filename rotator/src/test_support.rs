//! Test-only helpers for building sequences.

/// `[1, 2, ..., n]`.
pub fn one_to(n: i64) -> Vec<i64> {
    (1..=n).collect()
}

/// `[0, 1, ..., len - 1]`.
pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}
