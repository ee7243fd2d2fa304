//! Left rotation of slices.

use crate::error::RotateError;

/// Reduce `shift` modulo `len`.
///
/// Returns `None` for a negative shift. An empty sequence always yields `0`.
pub fn effective_shift(len: usize, shift: i64) -> Option<usize> {
    let shift = u64::try_from(shift).ok()?;
    if len == 0 {
        return Some(0);
    }
    // `len` fits in u64 and the remainder is < len, so both casts are lossless.
    Some((shift % len as u64) as usize)
}

/// Rotate `sequence` left by `shift` positions into a new vector.
///
/// The first `shift mod len` elements move to the end; relative order within
/// both parts is preserved. Shifts larger than the length wrap around.
///
/// # Errors
///
/// [`RotateError::InvalidArgumentValue`] if `shift` is negative.
///
/// # Example
/// ```
/// let rotated = rotator::rotate_left(&[1, 2, 3, 4, 5, 6, 7], 2).unwrap();
/// assert_eq!(rotated, vec![3, 4, 5, 6, 7, 1, 2]);
/// ```
pub fn rotate_left<T: Clone>(sequence: &[T], shift: i64) -> Result<Vec<T>, RotateError> {
    let effective = effective_shift(sequence.len(), shift)
        .ok_or_else(|| RotateError::negative_shift(shift.to_string()))?;
    Ok(rotate_at(sequence, effective))
}

/// Move the first `effective mod len` elements to the end.
pub(crate) fn rotate_at<T: Clone>(sequence: &[T], effective: usize) -> Vec<T> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let effective = effective % sequence.len();
    if effective == 0 {
        return sequence.to_vec();
    }

    let (head, tail) = sequence.split_at(effective);
    let mut rotated = Vec::with_capacity(sequence.len());
    rotated.extend_from_slice(tail);
    rotated.extend_from_slice(head);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::one_to;

    #[test]
    fn rotates_by_two() {
        let rotated = rotate_left(&one_to(7), 2).expect("rotate");
        assert_eq!(rotated, vec![3, 4, 5, 6, 7, 1, 2]);
    }

    #[test]
    fn shift_beyond_length_wraps() {
        let rotated = rotate_left(&one_to(7), 8).expect("rotate");
        assert_eq!(rotated, vec![2, 3, 4, 5, 6, 7, 1]);
    }

    #[test]
    fn zero_shift_returns_copy() {
        let input = vec![1, 2, 3];
        let mut rotated = rotate_left(&input, 0).expect("rotate");
        assert_eq!(rotated, input);
        rotated[0] = 99;
        assert_eq!(input, vec![1, 2, 3]);
    }

    #[test]
    fn full_rotation_is_identity() {
        let input = one_to(7);
        assert_eq!(rotate_left(&input, 7).expect("rotate"), input);
        assert_eq!(rotate_left(&input, 21).expect("rotate"), input);
    }

    #[test]
    fn empty_sequence_stays_empty() {
        let empty: Vec<i64> = Vec::new();
        assert!(rotate_left(&empty, 3).expect("rotate").is_empty());
        assert!(rotate_left(&empty, 0).expect("rotate").is_empty());
    }

    #[test]
    fn single_element_is_unchanged() {
        assert_eq!(rotate_left(&[1], 5).expect("rotate"), vec![1]);
    }

    #[test]
    fn negative_shift_is_invalid_value() {
        let err = rotate_left(&[1, 2, 3], -1).expect_err("negative shift");
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);
        assert_eq!(err.to_string(), "shift must be non-negative, got -1");
    }

    #[test]
    fn negative_shift_rejected_even_when_empty() {
        let empty: Vec<i64> = Vec::new();
        let err = rotate_left(&empty, -3).expect_err("negative shift");
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);
    }

    #[test]
    fn extreme_shift_does_not_overflow() {
        assert_eq!(effective_shift(10, i64::MAX), Some((i64::MAX % 10) as usize));
        let rotated = rotate_left(&one_to(10), i64::MAX).expect("rotate");
        assert_eq!(rotated[0], 8);
    }

    #[test]
    fn works_for_non_integer_elements() {
        let words = ["a", "b", "c"];
        assert_eq!(rotate_left(&words, 1).expect("rotate"), vec!["b", "c", "a"]);
    }

    #[test]
    fn rotate_at_wraps_offsets_past_the_end() {
        assert_eq!(rotate_at(&one_to(4), 6), vec![3, 4, 1, 2]);
        assert!(rotate_at::<i64>(&[], 9).is_empty());
    }

    #[test]
    fn effective_shift_rejects_negative() {
        assert_eq!(effective_shift(3, -1), None);
        assert_eq!(effective_shift(0, 7), Some(0));
        assert_eq!(effective_shift(4, 6), Some(2));
    }
}
