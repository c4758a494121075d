use std::ops::Mul;

/// `x * x`.
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

/// `x * x * x`, evaluated left to right.
pub fn cube<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_known_values() {
        assert_eq!(square(0.0_f32), 0.0);
        assert_eq!(square(-2.0_f32), 4.0);
        assert_eq!(square(1.5_f32), 2.25);
        assert_eq!(square(3_i64), 9);
    }

    #[test]
    fn cube_known_values() {
        assert_eq!(cube(0.0_f32), 0.0);
        assert_eq!(cube(-2.0_f32), -8.0);
        assert_eq!(cube(1.5_f32), 3.375);
        assert_eq!(cube(-3_i64), -27);
    }

    #[test]
    fn cube_matches_repeated_multiplication() {
        for x in [0.1_f32, -7.25, 123.456, 1.0e-3, f32::MIN_POSITIVE] {
            assert_eq!(cube(x), (x * x) * x);
            assert_eq!(cube(x), square(x) * x);
        }
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(square(f32::NAN).is_nan());
        assert_eq!(square(f32::NEG_INFINITY), f32::INFINITY);
        assert_eq!(cube(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }
}
