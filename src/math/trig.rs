//! Scalar trig helpers.
//!
//! Out-of-domain inputs return a defined fallback value, never NaN, inf or
//! a panic. The rendering path treats a momentarily wrong value as cheaper
//! than a stall.

/// Degrees-to-radians factor (pi / 180).
pub const DEG_TO_RAD: f32 = 0.017_453_292_519_943_295;

/// Radians-to-degrees factor (180 / pi).
pub const RAD_TO_DEG: f32 = 57.295_779_513_082_32;

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Inverse hyperbolic cosine. Returns 0 for inputs below the domain (x < 1).
pub fn acosh(x: f32) -> f32 {
    if x < 1.0 {
        return 0.0;
    }
    (x + (x * x - 1.0).sqrt()).ln()
}

/// Inverse hyperbolic sine, branchless over the sign: `sign(x) * ln(|x| + sqrt(1 + x^2))`.
pub fn asinh(x: f32) -> f32 {
    sign(x) * (x.abs() + (1.0 + x * x).sqrt()).ln()
}

/// Inverse hyperbolic tangent. Returns 0 for |x| >= 1 instead of +/-inf or NaN.
pub fn atanh(x: f32) -> f32 {
    if x.abs() >= 1.0 {
        return 0.0;
    }
    0.5 * ((1.0 + x) / (1.0 - x)).ln()
}

/// Sign of `x` as -1, 0 or 1, with `sign(0) == 0`.
#[inline]
fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_quarter_turn() {
        let r = radians(90.0);
        assert!((r - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_degrees_round_trip() {
        let d = degrees(radians(45.0));
        assert!((d - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_acosh_below_domain_is_zero() {
        assert_eq!(acosh(0.5), 0.0);
        assert_eq!(acosh(-10.0), 0.0);
    }

    #[test]
    fn test_acosh_at_one() {
        assert_eq!(acosh(1.0), 0.0);
    }

    #[test]
    fn test_acosh_matches_cosh() {
        let x = 2.5_f32;
        assert!((acosh(x.cosh()) - x).abs() < 1e-5);
    }

    #[test]
    fn test_asinh_zero() {
        assert_eq!(asinh(0.0), 0.0);
    }

    #[test]
    fn test_asinh_odd_symmetry() {
        let a = asinh(1.5);
        let b = asinh(-1.5);
        assert!((a + b).abs() < 1e-6);
        assert!(a > 0.0);
    }

    #[test]
    fn test_asinh_matches_sinh() {
        let x = 1.25_f32;
        assert!((asinh(x.sinh()) - x).abs() < 1e-5);
    }

    #[test]
    fn test_atanh_out_of_domain_is_zero() {
        assert_eq!(atanh(1.5), 0.0);
        assert_eq!(atanh(-1.0), 0.0);
        assert_eq!(atanh(1.0), 0.0);
    }

    #[test]
    fn test_atanh_zero() {
        assert_eq!(atanh(0.0), 0.0);
    }

    #[test]
    fn test_atanh_matches_tanh() {
        let x = 0.5_f32;
        assert!((atanh(x.tanh()) - x).abs() < 1e-5);
    }
}
