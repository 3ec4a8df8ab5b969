use std::cmp::Ordering;

/// Indices of `values` sorted by value in descending order.
///
/// The sort is stable, so ties resolve to the lower original index. NaN
/// orders via IEEE total ordering (after positive infinity), which keeps the
/// result deterministic even for degenerate inputs.
pub(crate) fn argsort_desc(values: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

/// Index of the largest value under IEEE total ordering; the first such
/// index wins ties. Returns `None` for an empty slice.
pub(crate) fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, v) in values.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                if v.total_cmp(&values[b]) == Ordering::Greater {
                    best = Some(i);
                }
            }
        }
    }
    best
}
