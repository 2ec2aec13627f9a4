//! Representation types a quantity value can use.
//!
//! The conversion engine needs to know three things about a representation:
//! whether it is floating point, whether it is signed, and how wide it is.
//! [`Scalar`] captures those plus the handful of checked and lossy casts the
//! engine routes every value through.

use crate::ratio::Ratio;

/// A concrete numeric representation usable for quantity values.
///
/// Implemented for the fixed-width integers up to 64 bits and for `f32` /
/// `f64`. Integer arithmetic inside the engine always widens to `i128`, so
/// 128-bit representations are deliberately not offered.
pub trait Scalar: Copy + PartialOrd {
    /// True for floating-point representations.
    const FLOATING: bool;
    /// True for signed representations (floats count as signed).
    const SIGNED: bool;
    /// Width in bits.
    const BITS: u32;

    /// The closest `f64` approximation of the value.
    fn to_f64(self) -> f64;

    /// The exact widened value; `None` for floats with a fractional part or
    /// out of `i128` range.
    fn to_i128(self) -> Option<i128>;

    /// Narrows from the widened computation type, `None` when out of range.
    fn checked_from_i128(wide: i128) -> Option<Self>;

    /// Truncates an `f64` into this representation. Only reachable through
    /// the crate's single audited truncation point; everything else converts
    /// checked.
    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const FLOATING: bool = false;
            const SIGNED: bool = <$t>::MIN != 0;
            const BITS: u32 = <$t>::BITS;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn to_i128(self) -> Option<i128> {
                Some(i128::from(self))
            }

            fn checked_from_i128(wide: i128) -> Option<Self> {
                Self::try_from(wide).ok()
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const FLOATING: bool = true;
            const SIGNED: bool = true;
            const BITS: u32 = (core::mem::size_of::<$t>() * 8) as u32;

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn to_i128(self) -> Option<i128> {
                // 2^127, the first f64 past the i128 range.
                const BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
                let wide = f64::from(self);
                if wide.is_finite() && wide == fp::trunc(wide) && wide < BOUND && wide >= -BOUND {
                    Some(wide as i128)
                } else {
                    None
                }
            }

            fn checked_from_i128(wide: i128) -> Option<Self> {
                Some(wide as $t)
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);

/// The single audited truncation point.
///
/// Every lossy narrowing in the crate goes through here; call sites decide
/// whether truncation is permitted, this function only performs it.
pub(crate) fn lossy_cast<T: Scalar>(value: f64) -> T {
    T::from_f64_lossy(value)
}

/// Float math that works with and without `std`.
pub(crate) mod fp {
    use super::Ratio;

    #[cfg(feature = "std")]
    pub(crate) fn powf(base: f64, exp: f64) -> f64 {
        base.powf(exp)
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn powf(base: f64, exp: f64) -> f64 {
        libm::pow(base, exp)
    }

    #[cfg(feature = "std")]
    pub(crate) fn powi(base: f64, exp: i32) -> f64 {
        base.powi(exp)
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn powi(base: f64, exp: i32) -> f64 {
        libm::pow(base, f64::from(exp))
    }

    #[cfg(feature = "std")]
    pub(crate) fn trunc(value: f64) -> f64 {
        value.trunc()
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn trunc(value: f64) -> f64 {
        libm::trunc(value)
    }

    /// `base` raised to a rational exponent; exact `powi` for integral
    /// exponents that fit `i32`.
    pub(crate) fn pow_ratio(base: f64, exp: Ratio) -> f64 {
        if exp.is_integral() {
            if let Ok(small) = i32::try_from(exp.numerator()) {
                return powi(base, small);
            }
        }
        powf(base, exp.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_constants() {
        assert!(!i64::FLOATING);
        assert!(i64::SIGNED);
        assert!(!u32::SIGNED);
        assert!(f64::FLOATING);
        assert!(f32::SIGNED);
        assert_eq!(u16::BITS, 16);
        assert_eq!(f32::BITS, 32);
    }

    #[test]
    fn integer_round_trips() {
        assert_eq!(i64::checked_from_i128(1234), Some(1234i64));
        assert_eq!(u8::checked_from_i128(255), Some(255u8));
        assert_eq!(u8::checked_from_i128(256), None);
        assert_eq!(u8::checked_from_i128(-1), None);
        assert_eq!(i64::checked_from_i128(i128::from(i64::MAX) + 1), None);
        assert_eq!((-7i32).to_i128(), Some(-7));
    }

    #[test]
    fn float_to_i128_requires_an_integer() {
        assert_eq!(2.0f64.to_i128(), Some(2));
        assert_eq!(2.5f64.to_i128(), None);
        assert_eq!(f64::NAN.to_i128(), None);
        assert_eq!(f64::INFINITY.to_i128(), None);
        assert_eq!((-3.0f32).to_i128(), Some(-3));
    }

    #[test]
    fn lossy_cast_truncates_toward_zero() {
        assert_eq!(lossy_cast::<i32>(2.9), 2);
        assert_eq!(lossy_cast::<i32>(-2.9), -2);
        assert_eq!(lossy_cast::<u8>(300.0), 255); // saturating `as` semantics
        assert_eq!(lossy_cast::<f32>(0.5), 0.5f32);
    }

    #[test]
    fn pow_ratio_matches_expectations() {
        use approx::assert_relative_eq;

        assert_relative_eq!(fp::pow_ratio(2.0, Ratio::from_integer(10)), 1024.0);
        assert_relative_eq!(fp::pow_ratio(2.0, Ratio::new(1, 2)), core::f64::consts::SQRT_2);
        assert_relative_eq!(fp::pow_ratio(10.0, Ratio::from_integer(-2)), 0.01);
    }
}
