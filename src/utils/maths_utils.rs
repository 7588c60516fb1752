use argminmax::ArgMinMax;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// (min, max) of `values` widened by `pad` of their span on each side, for
/// chart bounds. A flat series gets a span of 1.
pub fn padded_range(values: &[f64], pad: f64) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (lo, hi) = (get_min(values), get_max(values));
    let span = if hi > lo { hi - lo } else { 1.0 };
    Some((lo - span * pad, hi + span * pad))
}
