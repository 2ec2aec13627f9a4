//! Affine conversion between units whose zero points differ.
//!
//! A plain [`ConversionPlan`](crate::ConversionPlan) rescales differences; a
//! point on a scale (a temperature reading, a calendar instant) also needs
//! the offset between the two units' origins. [`Anchor`] pairs a unit with
//! its origin and [`convert_point`] applies both the offset and the scale,
//! keeping integer conversions exact whenever the mathematics allows it:
//! `212 °F` becomes exactly `100 °C` in `i64`.

use crate::convert::{ConversionPlan, Policy, UnitScale};
use crate::error::ConversionError;
use crate::magnitude::Magnitude;
use crate::ratio::Ratio;
use crate::repr::Scalar;

/// A unit together with the position of its zero.
///
/// `origin` is the offset of the unit's zero from the dimension's absolute
/// origin, measured in the dimension's canonical unit, as an exact rational.
/// The Celsius scale over kelvins has `origin == 5463/20` (273.15 K).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    /// The unit identity.
    pub scale: UnitScale,
    /// Offset of this unit's zero from the absolute origin, in canonical
    /// units.
    pub origin: Ratio,
}

impl Anchor {
    /// Defines an anchored unit.
    #[must_use]
    pub fn new(scale: UnitScale, origin: Ratio) -> Self {
        Self { scale, origin }
    }
}

/// Converts a point reading from one anchored unit to another.
///
/// Shared origins delegate to the plain engine. Otherwise the integer path
/// folds the origin offset into one exact rational computation, and the
/// float path orders its two steps to keep intermediates small: a magnifying
/// ratio applies the offset in source units before scaling, a shrinking one
/// scales first and applies the offset in target units.
///
/// # Errors
///
/// [`ConversionError::IncompatibleUnits`] for mismatched dimensions,
/// [`ConversionError::PrecisionLoss`] when the result would truncate under
/// [`Policy::Forbid`], and [`ConversionError::Overflow`] when the widened
/// computation or the target representation overflows.
pub fn convert_point<S: Scalar, T: Scalar>(
    value: S,
    from: &Anchor,
    to: &Anchor,
    policy: Policy,
) -> Result<T, ConversionError> {
    let plan = ConversionPlan::new(&from.scale, &to.scale, policy)?;
    if from.origin == to.origin {
        return plan.apply(value);
    }
    let delta = from.origin - to.origin;

    if S::FLOATING || T::FLOATING {
        return plan.finish_float(shift_and_scale(value.to_f64(), &plan, from, to, delta));
    }

    let wide = value.to_i128().ok_or_else(|| plan.overflow())?;
    let offset = &Magnitude::from_nonzero_ratio(delta) / &to.scale.magnitude;
    if !plan.rational || !offset.is_rational() {
        return match policy {
            Policy::Forbid => {
                Err(plan.precision_loss("affine conversion factor is irrational"))
            }
            Policy::Truncate => {
                plan.finish_float(shift_and_scale(wide as f64, &plan, from, to, delta))
            }
        };
    }

    // Exact rational evaluation of value * num/den + d_num/d_den over a
    // common denominator, all checked in i128.
    let num = plan.num.ok_or_else(|| plan.overflow())?;
    let den = plan.den.ok_or_else(|| plan.overflow())?;
    let d_num = offset
        .numerator()
        .as_i128()
        .map_err(|_| plan.overflow())?;
    let d_den = offset
        .denominator()
        .as_i128()
        .map_err(|_| plan.overflow())?;

    let scaled = wide
        .checked_mul(num)
        .and_then(|v| v.checked_mul(d_den))
        .and_then(|v| d_num.checked_mul(den).and_then(|d| v.checked_add(d)))
        .ok_or_else(|| plan.overflow())?;
    let divisor = den.checked_mul(d_den).ok_or_else(|| plan.overflow())?;

    let quotient = scaled / divisor;
    if scaled % divisor != 0 {
        match policy {
            Policy::Forbid => {
                return Err(plan.precision_loss("affine result leaves a remainder"))
            }
            Policy::Truncate => {}
        }
    }
    T::checked_from_i128(quotient).ok_or_else(|| plan.overflow())
}

// Floating evaluation, ordered by the size of the conversion factor. With a
// magnifying factor the value is smallest before scaling, so the offset goes
// in first; with a shrinking factor it goes in after.
fn shift_and_scale(value: f64, plan: &ConversionPlan, from: &Anchor, to: &Anchor, delta: Ratio) -> f64 {
    let offset_mag = Magnitude::from_nonzero_ratio(delta);
    if plan.factor > 1.0 || plan.factor < -1.0 {
        let in_source = (&offset_mag / &from.scale.magnitude).as_f64();
        (value + in_source) * plan.factor
    } else {
        let in_target = (&offset_mag / &to.scale.magnitude).as_f64();
        value * plan.factor + in_target
    }
}
