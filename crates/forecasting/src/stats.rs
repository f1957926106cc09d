//! Small deterministic numeric helpers shared by the planners.

/// Relative tolerance used when snapping a bound to a nearby whole number.
const WHOLE_NUMBER_TOLERANCE: f64 = 1e-9;

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Population standard deviation (divides by n), deterministic.
pub fn stddev_population(xs: &[f64], mean: f64) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / (xs.len() as f64);
    var.sqrt()
}

/// `floor`, treating values within rounding noise of a whole number as that number.
///
/// `100.0 * 0.9` must floor to 90 even when the product lands a few ulps below it.
pub fn floor_whole(x: f64) -> f64 {
    snap_to_whole(x).floor()
}

/// `ceil`, treating values within rounding noise of a whole number as that number.
///
/// `100.0 * 1.1` evaluates to `110.00000000000001`; this returns 110.
pub fn ceil_whole(x: f64) -> f64 {
    snap_to_whole(x).ceil()
}

fn snap_to_whole(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() <= WHOLE_NUMBER_TOLERANCE * r.abs().max(1.0) {
        r
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_stddev_of_symmetric_series() {
        let xs = [80.0, 100.0, 120.0];
        let m = mean(&xs);
        assert_eq!(m, 100.0);
        let sd = stddev_population(&xs, m);
        assert!((sd - (800.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let xs = [42.5];
        assert_eq!(stddev_population(&xs, mean(&xs)), 0.0);
    }

    #[test]
    fn empty_series_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(stddev_population(&[], 0.0), 0.0);
    }

    #[test]
    fn whole_rounding_absorbs_representation_error() {
        assert_eq!(100.0 * 1.1, 110.00000000000001);
        assert_eq!(ceil_whole(100.0 * 1.1), 110.0);
        assert_eq!(floor_whole(100.0 * 0.9), 90.0);
    }

    #[test]
    fn whole_rounding_leaves_real_fractions_alone() {
        assert_eq!(ceil_whole(110.2), 111.0);
        assert_eq!(floor_whole(89.7), 89.0);
        assert_eq!(ceil_whole(0.0), 0.0);
    }
}
