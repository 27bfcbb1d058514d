//! Aggregates over a single numeric column.
//!
//! Empty input is not an error here; every function returns `None` instead.

pub fn calculate_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest value and its position. On ties the last position wins.
pub fn find_min<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, usize)> {
    find_extreme(values, |value, current| value <= current)
}

/// Largest value and its position. On ties the last position wins.
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, usize)> {
    find_extreme(values, |value, current| value >= current)
}

fn find_extreme<T: PartialOrd + Copy>(
    values: &[T],
    replaces: impl Fn(&T, &T) -> bool,
) -> Option<(T, usize)> {
    let (&first, rest) = values.split_first()?;

    let mut best = (first, 0);
    for (offset, value) in rest.iter().enumerate() {
        if replaces(value, &best.0) {
            best = (*value, offset + 1);
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(calculate_mean(&[]), None);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(calculate_mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(calculate_mean(&[2.0, 0.0]), Some(1.0));
        assert_eq!(calculate_mean(&[-4.5]), Some(-4.5));
    }

    #[test]
    fn min_prefers_last_occurrence() {
        assert_eq!(find_min(&[3, 1, 1, 2]), Some((1, 2)));
        assert_eq!(find_min(&[5.0, 5.0, 5.0]), Some((5.0, 2)));
        assert_eq!(find_min(&[-1.5, 0.0, 2.0]), Some((-1.5, 0)));
    }

    #[test]
    fn max_prefers_last_occurrence() {
        assert_eq!(find_max(&[3, 1, 3, 2]), Some((3, 2)));
        assert_eq!(find_max(&[1.0, 2.0, 30.0]), Some((30.0, 2)));
        assert_eq!(find_max(&[7]), Some((7, 0)));
    }

    #[test]
    fn extremes_of_empty_are_none() {
        assert_eq!(find_min::<f64>(&[]), None);
        assert_eq!(find_max::<f64>(&[]), None);
    }
}
