//! Peak search over a complete slice
//!
//! These are simple, non-streaming searches. They are useful on their own for
//! small buffers and serve as the obviously-correct reference against which
//! the streaming finder is verified.

/// Find the largest peak in `data`
///
/// The peak is the first largest element, or the middle of the plateau of
/// first largest elements. It only counts if it is strictly surrounded by
/// smaller elements inside `data`.
///
/// # Returns
/// Index of the peak, or `None` for empty or constant data and for maxima
/// touching either end
pub fn find_peak<T: PartialOrd>(data: &[T]) -> Option<usize> {
    let mut max_index = 0;
    for (i, value) in data.iter().enumerate().skip(1) {
        if *value > data[max_index] {
            max_index = i;
        }
    }
    let max_value = data.get(max_index)?;

    let left = max_index;
    let mut right = max_index;
    while right + 1 < data.len() && data[right + 1] == *max_value {
        right += 1;
    }

    if left == 0 || right + 1 == data.len() {
        return None;
    }
    Some(left + (right - left) / 2)
}

/// Find a peak that dominates the following `lockout_distance` samples
///
/// Like [`find_peak`] on the first `2 * lockout_distance` elements, but only
/// accepts a peak among the first `lockout_distance` of them. The previous
/// peak is assumed to lie before `data`, at least `lockout_distance` away.
pub fn find_peak_with_lockout<T: PartialOrd>(data: &[T], lockout_distance: usize) -> Option<usize> {
    debug_assert!(
        data.len() >= 2 * lockout_distance,
        "need {} samples, got {}",
        2 * lockout_distance,
        data.len()
    );
    let window = &data[..(2 * lockout_distance).min(data.len())];
    find_peak(window).filter(|&index| index < lockout_distance)
}
