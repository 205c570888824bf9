/// Find the tight bracket around `value` in an ascending slice of distinct values.
///
/// Returns the indices `(below, above)` of the largest element <= `value` and
/// the smallest element >= `value`. They are equal when `value` is present.
/// Returns `None` when `value` falls outside of the slice's range.
pub(crate) fn bracketing_indices(sorted: &[i64], value: i64) -> Option<(usize, usize)> {
    let (first, last) = (*sorted.first()?, *sorted.last()?);
    if value < first || last < value {
        return None;
    }

    // sorted[low] <= value <= sorted[high]
    let mut low = 0;
    let mut high = sorted.len() - 1;
    while 1 < high - low {
        let middle = low + (high - low) / 2;
        if sorted[middle] <= value {
            low = middle;
        } else {
            high = middle;
        }
    }

    if sorted[low] == value {
        Some((low, low))
    } else if sorted[high] == value {
        Some((high, high))
    } else {
        Some((low, high))
    }
}

/// Linear interpolation of `y` at `x`, between `(x0, y0)` and `(x1, y1)`.
pub(crate) fn interpolate(x: i64, (x0, y0): (i64, f64), (x1, y1): (i64, f64)) -> f64 {
    if x0 == x1 {
        return y0;
    }
    // -> widen so that a bracket spanning the whole i64 range can't overflow
    let offset = (i128::from(x) - i128::from(x0)) as f64;
    let width = (i128::from(x1) - i128::from(x0)) as f64;
    y0 + (y1 - y0) * (offset / width)
}
