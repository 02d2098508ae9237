/// Linear interpolation percentile over an ascending-sorted slice.
///
/// `p` is clamped to `[0, 100]`: values at or below 0 return the first
/// element, values at or above 100 return the last. An empty slice yields
/// `NaN` so "no data" is distinguishable from any real latency.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return sorted_values[0];
    }
    if p >= 100.0 {
        return sorted_values[sorted_values.len() - 1];
    }

    let rank = (sorted_values.len() - 1) as f64 * (p / 100.0);
    let floor = rank.floor() as usize;
    let ceil = (floor + 1).min(sorted_values.len() - 1);
    if ceil == floor {
        return sorted_values[floor];
    }

    sorted_values[floor] * (ceil as f64 - rank) + sorted_values[ceil] * (rank - floor as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolates_between_ranks() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&values, 50.0), 2.5);
        assert_eq!(percentile(&values, 25.0), 1.75);
    }

    #[test]
    fn test_empty_input_is_nan() {
        for p in [0.0, 50.0, 100.0] {
            assert!(percentile(&[], p).is_nan());
        }
    }

    #[test]
    fn test_clamps_to_min_and_max() {
        let values = [3.0, 7.0, 11.0];
        assert_eq!(percentile(&values, 0.0), 3.0);
        assert_eq!(percentile(&values, -5.0), 3.0);
        assert_eq!(percentile(&values, 100.0), 11.0);
        assert_eq!(percentile(&values, 250.0), 11.0);
    }

    #[test]
    fn test_exact_rank_needs_no_interpolation() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 50.0), 3.0);
    }

    #[test]
    fn test_single_element() {
        let values = [42.0];
        assert_eq!(percentile(&values, 50.0), 42.0);
        assert_eq!(percentile(&values, 99.0), 42.0);
    }
}
