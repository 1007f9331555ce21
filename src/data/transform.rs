/// Min-max scale `value` into `[0, 1]` for the range `(min, max)`.
/// A degenerate range maps every value to 0.5 so flat axes stay centred.
pub fn min_max(value: f64, (min, max): (f64, f64)) -> f64 {
    let range = max - min;
    if range.abs() < f64::EPSILON {
        0.5
    } else {
        (value - min) / range
    }
}
