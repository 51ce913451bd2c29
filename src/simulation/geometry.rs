//! Small geometric helpers shared by the cache and the compositor.

/// Smaller of two values; returns `a` when they compare equal.
#[inline]
pub fn minimum(a: f64, b: f64) -> f64 {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two values; returns `b` when they compare equal.
#[inline]
pub fn maximum(a: f64, b: f64) -> f64 {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
pub fn square(a: f64) -> f64 {
    a * a
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (square(x2 - x1) + square(y2 - y1)).sqrt()
}

/// Euclidean distance of an integer offset from (0, 0)
#[inline]
pub fn distance_to_origin(x: i32, y: i32) -> f64 {
    distance(0.0, 0.0, x as f64, y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_works_as_expected() {
        assert_eq!(minimum(-1.0, -1.0), -1.0);

        assert_eq!(minimum(-1.0, 0.0), -1.0);
        assert_eq!(minimum(0.0, -1.0), -1.0);

        assert_eq!(minimum(0.0, 0.0), 0.0);

        assert_eq!(minimum(0.0, 1.0), 0.0);
        assert_eq!(minimum(1.0, 0.0), 0.0);

        assert_eq!(minimum(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_maximum_works_as_expected() {
        assert_eq!(maximum(-1.0, -1.0), -1.0);

        assert_eq!(maximum(-1.0, 0.0), 0.0);
        assert_eq!(maximum(0.0, -1.0), 0.0);

        assert_eq!(maximum(0.0, 0.0), 0.0);

        assert_eq!(maximum(0.0, 1.0), 1.0);
        assert_eq!(maximum(1.0, 0.0), 1.0);

        assert_eq!(maximum(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_equal_operands_pick_documented_side() {
        // Signed zeros compare equal but are distinguishable by sign.
        assert!(minimum(-0.0, 0.0).is_sign_negative());
        assert!(minimum(0.0, -0.0).is_sign_positive());
        assert!(maximum(-0.0, 0.0).is_sign_positive());
        assert!(maximum(0.0, -0.0).is_sign_negative());
    }

    #[test]
    fn test_min_max_bracket_operands() {
        let pairs = [(-3.5, 2.0), (7.0, 7.0), (0.25, -0.25), (1e9, 1e-9)];
        for (a, b) in pairs {
            assert_eq!(minimum(a, b), minimum(b, a));
            assert_eq!(maximum(a, b), maximum(b, a));
            assert!(minimum(a, b) <= a && minimum(a, b) <= b);
            assert!(maximum(a, b) >= a && maximum(a, b) >= b);
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
        assert_eq!(distance_to_origin(-3, 4), 5.0);
        assert_eq!(square(-1.5), 2.25);
    }
}
