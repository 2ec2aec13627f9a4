//! The conversion engine: turns a symbolic unit ratio into a numerically
//! safe rescaling of a concrete value.
//!
//! A [`ConversionPlan`] decomposes the ratio between two units once, into an
//! integer numerator, an integer denominator, and an irrational residue, and
//! can then be applied to any number of values. The decomposition picks the
//! computation type (widened integers or `f64`) and the operation order so
//! that exact conversions stay exact: `2000 m` becomes exactly `2 km` in
//! `i64`, with no float round trip.

use crate::error::ConversionError;
use crate::magnitude::Magnitude;
use crate::repr::{fp, lossy_cast, Scalar};

/// What to do when a conversion cannot represent the result exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Refuse the conversion with [`ConversionError::PrecisionLoss`].
    #[default]
    Forbid,
    /// Truncate toward zero through the engine's single audited cast.
    Truncate,
}

/// The identity of a unit as the engine sees it: a dimension name, a symbol
/// for diagnostics, and the unit's magnitude relative to the dimension's
/// canonical unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitScale {
    /// Dimension the unit measures, e.g. `"length"`. Two units convert only
    /// when their dimension strings match.
    pub dimension: &'static str,
    /// Display symbol, e.g. `"km"`.
    pub symbol: &'static str,
    /// Ratio of this unit to the dimension's canonical unit.
    pub magnitude: Magnitude,
}

impl UnitScale {
    /// Defines a unit identity.
    #[must_use]
    pub fn new(dimension: &'static str, symbol: &'static str, magnitude: Magnitude) -> Self {
        Self {
            dimension,
            symbol,
            magnitude,
        }
    }
}

/// A prepared conversion between two units of the same dimension.
///
/// Construction validates compatibility and decomposes the ratio once;
/// [`ConversionPlan::apply`] is then cheap and allocation-free, so a plan can
/// be cached next to a hot loop.
///
/// ```rust
/// use exmag_core::{ConversionPlan, Magnitude, Policy, UnitScale};
///
/// let m = UnitScale::new("length", "m", Magnitude::ONE);
/// let km = UnitScale::new("length", "km", Magnitude::from_integer(1000)?);
///
/// let plan = ConversionPlan::new(&m, &km, Policy::Forbid)?;
/// assert_eq!(plan.apply::<i64, i64>(2000)?, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConversionPlan {
    from_symbol: &'static str,
    to_symbol: &'static str,
    policy: Policy,
    ratio: Magnitude,
    /// True when the ratio is a pure rational (no irrational residue).
    pub(crate) rational: bool,
    /// Exact numerator, signed; `None` when it exceeds `i128`.
    pub(crate) num: Option<i128>,
    /// Exact denominator, positive; `None` when it exceeds `i128`.
    pub(crate) den: Option<i128>,
    /// Precomputed `num * irr / den` for the float path.
    pub(crate) factor: f64,
}

impl ConversionPlan {
    /// Prepares the conversion from `from` to `to`.
    ///
    /// # Errors
    ///
    /// [`ConversionError::IncompatibleUnits`] when the dimensions differ.
    pub fn new(from: &UnitScale, to: &UnitScale, policy: Policy) -> Result<Self, ConversionError> {
        if from.dimension != to.dimension {
            return Err(ConversionError::IncompatibleUnits {
                from_symbol: from.symbol,
                from_dimension: from.dimension,
                from_magnitude: from.magnitude.clone(),
                to_symbol: to.symbol,
                to_dimension: to.dimension,
                to_magnitude: to.magnitude.clone(),
            });
        }
        let ratio = &from.magnitude / &to.magnitude;
        Ok(Self::for_ratio(ratio, from.symbol, to.symbol, policy))
    }

    fn for_ratio(
        ratio: Magnitude,
        from_symbol: &'static str,
        to_symbol: &'static str,
        policy: Policy,
    ) -> Self {
        let num_mag = ratio.numerator();
        let den_mag = ratio.denominator();
        // irr = ratio * den / num; positive because the sign sits in num.
        let irr_mag = &(&ratio * &den_mag) / &num_mag;
        let factor = num_mag.as_f64() * irr_mag.as_f64() / den_mag.as_f64();
        Self {
            from_symbol,
            to_symbol,
            policy,
            rational: irr_mag.is_one(),
            num: num_mag.as_i128().ok(),
            den: den_mag.as_i128().ok(),
            factor,
            ratio,
        }
    }

    /// The exact symbolic ratio `from / to` this plan applies.
    #[must_use]
    pub fn ratio(&self) -> &Magnitude {
        &self.ratio
    }

    /// The policy the plan was built with.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Rescales one value from the source unit into the target unit.
    ///
    /// The computation widens to `f64` when either representation is
    /// floating, otherwise to `i128`. Rational ratios on the integer path
    /// multiply by the numerator before dividing by the denominator, both
    /// checked.
    ///
    /// # Errors
    ///
    /// [`ConversionError::PrecisionLoss`] when the result would truncate and
    /// the policy is [`Policy::Forbid`]; [`ConversionError::Overflow`] when
    /// the widened computation or the target representation overflows.
    pub fn apply<S: Scalar, T: Scalar>(&self, value: S) -> Result<T, ConversionError> {
        if S::FLOATING || T::FLOATING {
            return self.apply_float(value.to_f64());
        }
        // Integer representations always widen exactly.
        let wide = value.to_i128().ok_or_else(|| self.overflow())?;
        if self.rational {
            self.apply_rational(wide)
        } else {
            // Irrational factor against an integer value: only representable
            // approximately, so route through the float path on request.
            match self.policy {
                Policy::Forbid => Err(self.precision_loss("conversion factor is irrational")),
                Policy::Truncate => self.apply_float(wide as f64),
            }
        }
    }

    fn apply_rational<T: Scalar>(&self, wide: i128) -> Result<T, ConversionError> {
        let num = self.num.ok_or_else(|| self.overflow())?;
        let den = self.den.ok_or_else(|| self.overflow())?;
        // Multiply first so quotients like 2000 * 1 / 1000 stay exact.
        let scaled = if num == 1 {
            wide
        } else {
            wide.checked_mul(num).ok_or_else(|| self.overflow())?
        };
        let quotient = scaled / den;
        if scaled % den != 0 {
            match self.policy {
                Policy::Forbid => {
                    return Err(self.precision_loss("integer division leaves a remainder"))
                }
                Policy::Truncate => {}
            }
        }
        T::checked_from_i128(quotient).ok_or_else(|| self.overflow())
    }

    fn apply_float<T: Scalar>(&self, value: f64) -> Result<T, ConversionError> {
        self.finish_float(value * self.factor)
    }

    // Narrows a finished floating intermediate into the target
    // representation, honouring the plan's policy.
    pub(crate) fn finish_float<T: Scalar>(&self, scaled: f64) -> Result<T, ConversionError> {
        if T::FLOATING {
            return Ok(lossy_cast(scaled));
        }
        // Narrowing a floating intermediate into an integer representation
        // always counts as lossy.
        match self.policy {
            Policy::Forbid => Err(self.precision_loss(
                "floating-point intermediate cannot narrow to an integer exactly",
            )),
            Policy::Truncate => {
                if !scaled.is_finite() {
                    return Err(self.overflow());
                }
                // Truncation must still land inside the target's range.
                let whole = fp::trunc(scaled);
                if whole.to_i128().and_then(T::checked_from_i128).is_none() {
                    return Err(self.overflow());
                }
                Ok(lossy_cast(scaled))
            }
        }
    }

    pub(crate) fn precision_loss(&self, reason: &'static str) -> ConversionError {
        ConversionError::PrecisionLoss {
            from_symbol: self.from_symbol,
            to_symbol: self.to_symbol,
            reason,
        }
    }

    pub(crate) fn overflow(&self) -> ConversionError {
        ConversionError::Overflow {
            from_symbol: self.from_symbol,
            to_symbol: self.to_symbol,
        }
    }
}

/// One-shot conversion without keeping the plan around.
///
/// # Errors
///
/// Propagates every [`ConversionError`] from planning and application.
pub fn convert<S: Scalar, T: Scalar>(
    value: S,
    from: &UnitScale,
    to: &UnitScale,
    policy: Policy,
) -> Result<T, ConversionError> {
    ConversionPlan::new(from, to, policy)?.apply(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::PI;
    use approx::assert_relative_eq;

    fn metre() -> UnitScale {
        UnitScale::new("length", "m", Magnitude::ONE)
    }

    fn kilometre() -> UnitScale {
        UnitScale::new("length", "km", Magnitude::from_integer(1000).unwrap())
    }

    fn foot() -> UnitScale {
        UnitScale::new("length", "ft", Magnitude::from_ratio(3048, 10_000).unwrap())
    }

    fn radian() -> UnitScale {
        UnitScale::new("angle", "rad", Magnitude::ONE)
    }

    fn revolution() -> UnitScale {
        let two_pi =
            &Magnitude::from_integer(2).unwrap() * &Magnitude::from_constant(PI);
        UnitScale::new("angle", "rev", two_pi)
    }

    #[test]
    fn exact_integer_downscale() {
        let plan = ConversionPlan::new(&metre(), &kilometre(), Policy::Forbid).unwrap();
        assert_eq!(plan.apply::<i64, i64>(2000).unwrap(), 2);
        assert_eq!(plan.apply::<i64, i64>(-3000).unwrap(), -3);
    }

    #[test]
    fn exact_integer_upscale() {
        let plan = ConversionPlan::new(&kilometre(), &metre(), Policy::Forbid).unwrap();
        assert_eq!(plan.apply::<i64, i64>(2).unwrap(), 2000);
        assert_eq!(plan.apply::<i16, i32>(-7).unwrap(), -7000);
    }

    #[test]
    fn plan_is_reusable() {
        let plan = ConversionPlan::new(&metre(), &kilometre(), Policy::Forbid).unwrap();
        for n in 1..=5i64 {
            assert_eq!(plan.apply::<i64, i64>(n * 1000).unwrap(), n);
        }
    }

    #[test]
    fn inexact_division_respects_the_policy() {
        let strict = ConversionPlan::new(&metre(), &kilometre(), Policy::Forbid).unwrap();
        assert!(matches!(
            strict.apply::<i64, i64>(1500),
            Err(ConversionError::PrecisionLoss { .. })
        ));

        let lossy = ConversionPlan::new(&metre(), &kilometre(), Policy::Truncate).unwrap();
        assert_eq!(lossy.apply::<i64, i64>(1500).unwrap(), 1);
        assert_eq!(lossy.apply::<i64, i64>(-1500).unwrap(), -1);
        assert_eq!(lossy.apply::<i64, i64>(999).unwrap(), 0);
    }

    #[test]
    fn negative_ratio_keeps_its_sign_on_the_integer_path() {
        let forward = UnitScale::new("charge", "e", Magnitude::from_integer(-2).unwrap());
        let canon = UnitScale::new("charge", "C", Magnitude::ONE);
        let plan = ConversionPlan::new(&forward, &canon, Policy::Forbid).unwrap();
        assert_eq!(plan.apply::<i64, i64>(3).unwrap(), -6);

        let back = ConversionPlan::new(&canon, &forward, Policy::Forbid).unwrap();
        assert_eq!(back.apply::<i64, i64>(-6).unwrap(), 3);
    }

    #[test]
    fn rational_ratio_multiplies_before_dividing() {
        // 381/1250 per foot: 1250 ft are exactly 381 m.
        let plan = ConversionPlan::new(&foot(), &metre(), Policy::Forbid).unwrap();
        assert_eq!(plan.apply::<i64, i64>(1250).unwrap(), 381);
        assert!(matches!(
            plan.apply::<i64, i64>(1),
            Err(ConversionError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn float_path_uses_a_single_factor() {
        let plan = ConversionPlan::new(&foot(), &metre(), Policy::Forbid).unwrap();
        assert_relative_eq!(plan.apply::<f64, f64>(1.0).unwrap(), 0.3048);
        assert_relative_eq!(plan.apply::<i64, f64>(10).unwrap(), 3.048);

        let plan = ConversionPlan::new(&radian(), &revolution(), Policy::Forbid).unwrap();
        assert_relative_eq!(
            plan.apply::<f64, f64>(core::f64::consts::TAU).unwrap(),
            1.0
        );
    }

    #[test]
    fn irrational_ratio_needs_truncate_for_integers() {
        let strict = ConversionPlan::new(&revolution(), &radian(), Policy::Forbid).unwrap();
        assert!(matches!(
            strict.apply::<i64, i64>(1),
            Err(ConversionError::PrecisionLoss { .. })
        ));

        let lossy = ConversionPlan::new(&revolution(), &radian(), Policy::Truncate).unwrap();
        assert_eq!(lossy.apply::<i64, i64>(1).unwrap(), 6);
    }

    #[test]
    fn float_source_into_integer_target() {
        let plan = ConversionPlan::new(&kilometre(), &metre(), Policy::Forbid).unwrap();
        assert!(matches!(
            plan.apply::<f64, i64>(2.0),
            Err(ConversionError::PrecisionLoss { .. })
        ));

        let lossy = ConversionPlan::new(&kilometre(), &metre(), Policy::Truncate).unwrap();
        assert_eq!(lossy.apply::<f64, i64>(2.0).unwrap(), 2000);
        assert_eq!(lossy.apply::<f64, i64>(2.0004).unwrap(), 2000);
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let plan = ConversionPlan::new(&kilometre(), &metre(), Policy::Forbid).unwrap();
        assert!(matches!(
            plan.apply::<i64, i64>(i64::MAX),
            Err(ConversionError::Overflow { .. })
        ));
        // The same value fits a wider story on the float path.
        assert!(plan.apply::<i64, f64>(i64::MAX).is_ok());

        assert!(matches!(
            plan.apply::<i64, i16>(1000),
            Err(ConversionError::Overflow { .. })
        ));
    }

    #[test]
    fn incompatible_dimensions_are_rejected_up_front() {
        let err = ConversionPlan::new(&metre(), &radian(), Policy::Forbid).unwrap_err();
        match err {
            ConversionError::IncompatibleUnits {
                from_symbol,
                to_symbol,
                from_dimension,
                to_dimension,
                ..
            } => {
                assert_eq!(from_symbol, "m");
                assert_eq!(to_symbol, "rad");
                assert_eq!(from_dimension, "length");
                assert_eq!(to_dimension, "angle");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn one_shot_convert_helper() {
        let v: i64 = convert(5, &kilometre(), &metre(), Policy::Forbid).unwrap();
        assert_eq!(v, 5000);
    }
}
