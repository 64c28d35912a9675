/// Mean and max of absolute differences; `None` when `diffs` is empty.
pub(crate) fn mean_max(diffs: &[f64]) -> Option<(f64, f64)> {
    if diffs.is_empty() {
        return None;
    }

    let sum: f64 = diffs.iter().sum();
    let max = diffs.iter().copied().fold(0.0_f64, f64::max);

    Some((sum / diffs.len() as f64, max))
}
