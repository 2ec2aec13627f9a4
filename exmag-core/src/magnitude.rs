//! Canonical symbolic magnitudes and their exact algebra.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::base::{Base, MagConstant};
use crate::error::MagnitudeError;
use crate::prime;
use crate::ratio::Ratio;
use crate::repr::{fp, Scalar};

/// One basis element raised to a rational power.
///
/// The exponent is never zero; a factor that would cancel is removed from its
/// magnitude instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Factor {
    /// The basis element.
    pub base: Base,
    /// The rational exponent; nonzero.
    pub exponent: Ratio,
}

/// The exact ratio between two measurement units, kept in symbolic form.
///
/// A magnitude is a product of basis powers: primes, named irrational
/// constants, and at most one sign sentinel. Factors are stored sorted by
/// base with no duplicates and no zero exponents, and every constructor
/// canonicalises through the same deterministic factorization, so two
/// magnitudes are mathematically equal exactly when they are structurally
/// equal. This is what lets conversion factors cancel exactly instead of
/// drifting through floating point.
///
/// ```rust
/// use exmag_core::Magnitude;
///
/// let km = Magnitude::from_integer(1000)?;
/// let m = Magnitude::ONE;
/// assert_eq!(&km * &km.inverse(), m);
/// assert_eq!(km.get_value::<i64>()?, 1000);
/// # Ok::<(), exmag_core::MagnitudeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Magnitude {
    factors: Vec<Factor>,
}

// ───────────────────────────── construction ─────────────────────────────

impl Magnitude {
    /// The multiplicative identity: the ratio 1.
    pub const ONE: Magnitude = Magnitude { factors: Vec::new() };

    /// Builds the magnitude of a nonzero integer.
    ///
    /// Negative inputs keep their sign exactly through the sentinel basis.
    ///
    /// # Errors
    ///
    /// [`MagnitudeError::Zero`] when `n == 0`; zero has no multiplicative
    /// inverse and cannot be a unit ratio.
    pub fn from_integer(n: i64) -> Result<Self, MagnitudeError> {
        if n == 0 {
            return Err(MagnitudeError::Zero);
        }
        let mut factors = Vec::new();
        if n < 0 {
            factors.push(Factor {
                base: Base::Sentinel,
                exponent: Ratio::ONE,
            });
        }
        push_factorization(&mut factors, n.unsigned_abs(), Ratio::ONE);
        Ok(Self { factors })
    }

    /// Builds the magnitude of the exact rational `num / den`.
    ///
    /// # Errors
    ///
    /// [`MagnitudeError::Zero`] when `num == 0` and
    /// [`MagnitudeError::ZeroDenominator`] when `den == 0`.
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, MagnitudeError> {
        if den == 0 {
            return Err(MagnitudeError::ZeroDenominator);
        }
        let n = Self::from_integer(num)?;
        let d = Self::from_integer(den)?;
        Ok(&n * &d.inverse())
    }

    /// Builds the magnitude of a named irrational constant.
    #[must_use]
    pub fn from_constant(c: MagConstant) -> Self {
        Self {
            factors: alloc::vec![Factor {
                base: Base::Constant(c),
                exponent: Ratio::ONE,
            }],
        }
    }

    // Caller guarantees `r` is nonzero; `Ratio` guarantees a positive
    // denominator, so construction cannot fail.
    pub(crate) fn from_nonzero_ratio(r: Ratio) -> Self {
        debug_assert!(!r.is_zero());
        Self::from_ratio(r.numerator(), r.denominator()).unwrap_or(Self::ONE)
    }

    /// The magnitude `10^exp`.
    pub(crate) fn power_of_ten(exp: i64) -> Self {
        if exp == 0 {
            return Self::ONE;
        }
        let e = Ratio::from_integer(exp);
        Self {
            factors: alloc::vec![
                Factor { base: Base::Prime(2), exponent: e },
                Factor { base: Base::Prime(5), exponent: e },
            ],
        }
    }

    /// The canonical factor sequence, sorted by base.
    #[must_use]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns true for the identity magnitude.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }
}

// Appends the prime factorization of `n`, each prime's multiplicity scaled by
// `exponent`. Trial division emits primes in increasing order, which is
// exactly the canonical factor order.
fn push_factorization(factors: &mut Vec<Factor>, mut n: u64, exponent: Ratio) {
    while n > 1 {
        let p = prime::find_first_factor(n);
        let count = prime::multiplicity(p, n);
        n = prime::remove_power(p, count, n);
        factors.push(Factor {
            base: Base::Prime(p as i64),
            exponent: exponent * Ratio::from_integer(i64::from(count)),
        });
    }
}

// ─────────────────────────────── algebra ────────────────────────────────

impl Magnitude {
    fn multiply(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.factors.len() + other.factors.len());
        let mut lhs = self.factors.iter().peekable();
        let mut rhs = other.factors.iter().peekable();
        loop {
            let a = lhs.peek().map(|f| **f);
            let b = rhs.peek().map(|f| **f);
            match (a, b) {
                (None, None) => break,
                (Some(_), None) => out.extend(lhs.by_ref().copied()),
                (None, Some(_)) => out.extend(rhs.by_ref().copied()),
                (Some(a), Some(b)) => match a.base.cmp(&b.base) {
                    Ordering::Less => {
                        out.push(a);
                        lhs.next();
                    }
                    Ordering::Greater => {
                        out.push(b);
                        rhs.next();
                    }
                    Ordering::Equal => {
                        let base = a.base;
                        let sum = a.exponent + b.exponent;
                        lhs.next();
                        rhs.next();
                        if base.is_sentinel() {
                            // Two sign flips cancel; an odd total keeps one.
                            if sum.numerator() % 2 != 0 {
                                out.push(Factor {
                                    base,
                                    exponent: Ratio::ONE,
                                });
                            }
                        } else if !sum.is_zero() {
                            out.push(Factor {
                                base,
                                exponent: sum,
                            });
                        }
                    }
                },
            }
        }
        Self { factors: out }
    }

    /// The multiplicative inverse. Never fails: `-1` is its own inverse and
    /// every other basis power inverts by negating its exponent.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let factors = self
            .factors
            .iter()
            .map(|f| {
                if f.base.is_sentinel() {
                    *f
                } else {
                    Factor {
                        base: f.base,
                        exponent: -f.exponent,
                    }
                }
            })
            .collect();
        Self { factors }
    }

    /// Raises the magnitude to the rational power `num / den`.
    ///
    /// # Errors
    ///
    /// [`MagnitudeError::ZeroDenominator`] when `den == 0`, and
    /// [`MagnitudeError::EvenRootOfNegative`] when the reduced power has an
    /// even denominator and the magnitude is negative. The sign survives
    /// exactly when the reduced numerator is odd.
    pub fn pow(&self, num: i64, den: i64) -> Result<Self, MagnitudeError> {
        if den == 0 {
            return Err(MagnitudeError::ZeroDenominator);
        }
        if num == 0 {
            return Ok(Self::ONE);
        }
        let power = Ratio::new(num, den);
        let mut out = Vec::with_capacity(self.factors.len());
        for f in &self.factors {
            if f.base.is_sentinel() {
                if power.denominator() % 2 == 0 {
                    return Err(MagnitudeError::EvenRootOfNegative);
                }
                if power.numerator() % 2 != 0 {
                    out.push(Factor {
                        base: Base::Sentinel,
                        exponent: Ratio::ONE,
                    });
                }
            } else {
                out.push(Factor {
                    base: f.base,
                    exponent: f.exponent * power,
                });
            }
        }
        Ok(Self { factors: out })
    }

    /// The largest integer that divides this magnitude.
    ///
    /// Each prime contributes the integer part of its exponent when that part
    /// is positive; the sign sentinel is carried along, so the numerator of a
    /// negative magnitude is negative. For any magnitude `m`,
    /// `m.numerator() / m.denominator() == m` holds for the rational part.
    #[must_use]
    pub fn numerator(&self) -> Self {
        let mut out = Vec::new();
        for f in &self.factors {
            match f.base {
                Base::Sentinel => out.push(*f),
                Base::Prime(_) => {
                    let whole = f.exponent.trunc();
                    if whole > 0 {
                        out.push(Factor {
                            base: f.base,
                            exponent: Ratio::from_integer(whole),
                        });
                    }
                }
                Base::Constant(_) => {}
            }
        }
        Self { factors: out }
    }

    /// The largest integer whose inverse divides this magnitude. Always a
    /// positive integer magnitude; the sign lives in [`Self::numerator`].
    #[must_use]
    pub fn denominator(&self) -> Self {
        self.abs().inverse().numerator()
    }

    /// The magnitude with its sign removed.
    #[must_use]
    pub fn abs(&self) -> Self {
        let factors = self
            .factors
            .iter()
            .filter(|f| !f.base.is_sentinel())
            .copied()
            .collect();
        Self { factors }
    }

    /// Returns false exactly when the magnitude carries the sign sentinel.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.factors.first().map_or(true, |f| !f.base.is_sentinel())
    }

    /// The greatest magnitude that divides both `self` and `other` into
    /// residues with no negative powers: a generalized GCD.
    ///
    /// Shared bases contribute the smaller exponent. A base present on one
    /// side only contributes nothing unless its exponent is negative, in
    /// which case it is kept as is (the "GCD" of `x^-3` and `x^0` is `x^-3`).
    /// A one-sided sign is dropped; a shared sign is kept, so
    /// `common(-24, -36) == -12` while `common(2, -4) == 2`.
    #[must_use]
    pub fn common(&self, other: &Self) -> Self {
        let mut out = Vec::new();
        let mut lhs = self.factors.iter().peekable();
        let mut rhs = other.factors.iter().peekable();
        loop {
            let a = lhs.peek().map(|f| **f);
            let b = rhs.peek().map(|f| **f);
            match (a, b) {
                (None, None) => break,
                (Some(a), None) => {
                    push_negative_power(&mut out, &a);
                    lhs.next();
                }
                (None, Some(b)) => {
                    push_negative_power(&mut out, &b);
                    rhs.next();
                }
                (Some(a), Some(b)) => match a.base.cmp(&b.base) {
                    Ordering::Less => {
                        push_negative_power(&mut out, &a);
                        lhs.next();
                    }
                    Ordering::Greater => {
                        push_negative_power(&mut out, &b);
                        rhs.next();
                    }
                    Ordering::Equal => {
                        out.push(Factor {
                            base: a.base,
                            exponent: a.exponent.min(b.exponent),
                        });
                        lhs.next();
                        rhs.next();
                    }
                },
            }
        }
        Self { factors: out }
    }

    /// Drops every factor with a positive exponent, keeping only the
    /// "denominator-like" part. The sign sentinel is dropped too.
    #[must_use]
    pub fn remove_positive_powers(&self) -> Self {
        let factors = self
            .factors
            .iter()
            .filter(|f| f.exponent.is_negative())
            .copied()
            .collect();
        Self { factors }
    }
}

// The sentinel's exponent is 1, so this drops it along with every other
// non-negative power.
fn push_negative_power(out: &mut Vec<Factor>, f: &Factor) {
    if f.exponent.is_negative() {
        out.push(*f);
    }
}

// ────────────────────────────── predicates ──────────────────────────────

impl Magnitude {
    /// Returns true when the magnitude is an integer (possibly negative).
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.factors.iter().all(|f| match f.base {
            Base::Sentinel => true,
            Base::Prime(_) => f.exponent.is_integral() && !f.exponent.is_negative(),
            Base::Constant(_) => false,
        })
    }

    /// Returns true when the magnitude is a rational number.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.factors.iter().all(|f| match f.base {
            Base::Sentinel => true,
            Base::Prime(_) => f.exponent.is_integral(),
            Base::Constant(_) => false,
        })
    }

    /// Returns true when every factor is a base raised to a positive integer
    /// power. A negative magnitude never qualifies.
    #[must_use]
    pub fn is_positive_integral_power(&self) -> bool {
        self.factors.iter().all(|f| {
            !f.base.is_sentinel() && f.exponent.is_integral() && !f.exponent.is_negative()
        })
    }

    /// The exponent carried by the prime `base`, or zero when absent.
    #[must_use]
    pub fn get_power(&self, base: i64) -> Ratio {
        self.factors
            .iter()
            .find(|f| f.base == Base::Prime(base))
            .map_or(Ratio::ZERO, |f| f.exponent)
    }

    /// The largest power of ten that can be split off this magnitude, used
    /// for scientific-notation rendering. Zero when the powers of 2 and 5
    /// have different signs or either is absent.
    #[must_use]
    pub fn extract_power_of_10(&self) -> i64 {
        let e2 = self.get_power(2);
        let e5 = self.get_power(5);
        if e2.is_zero() || e5.is_zero() || e2.is_negative() != e5.is_negative() {
            return 0;
        }
        let shared = core::cmp::min(e2.trunc().unsigned_abs(), e5.trunc().unsigned_abs()) as i64;
        if e2.is_negative() {
            -shared
        } else {
            shared
        }
    }
}

// ───────────────────────────── evaluation ───────────────────────────────

impl Magnitude {
    /// Evaluates an integral magnitude exactly, widened to `i128`.
    ///
    /// # Errors
    ///
    /// [`MagnitudeError::NotIntegral`] when the magnitude is not an integer,
    /// [`MagnitudeError::Overflow`] when the exact value does not fit.
    pub fn as_i128(&self) -> Result<i128, MagnitudeError> {
        let mut value: i128 = 1;
        for f in &self.factors {
            match f.base {
                Base::Sentinel => value = -value,
                Base::Prime(p) => {
                    if !f.exponent.is_integral() || f.exponent.is_negative() {
                        return Err(MagnitudeError::NotIntegral);
                    }
                    let e = u32::try_from(f.exponent.numerator())
                        .map_err(|_| MagnitudeError::Overflow)?;
                    let term = i128::from(p)
                        .checked_pow(e)
                        .ok_or(MagnitudeError::Overflow)?;
                    value = value.checked_mul(term).ok_or(MagnitudeError::Overflow)?;
                }
                Base::Constant(_) => return Err(MagnitudeError::NotIntegral),
            }
        }
        Ok(value)
    }

    /// The closest `f64` approximation of the magnitude.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        let mut value = 1.0;
        for f in &self.factors {
            if f.base.is_sentinel() {
                value = -value;
            } else {
                value *= fp::pow_ratio(f.base.numeric_value(), f.exponent);
            }
        }
        value
    }

    /// Evaluates the magnitude in a concrete representation type.
    ///
    /// Floating representations take the closest approximation; integer
    /// representations are exact or fail.
    ///
    /// # Errors
    ///
    /// For integer representations, [`MagnitudeError::NotIntegral`] when the
    /// value is not an integer and [`MagnitudeError::Overflow`] when it does
    /// not fit `T`.
    pub fn get_value<T: Scalar>(&self) -> Result<T, MagnitudeError> {
        if T::FLOATING {
            Ok(T::from_f64_lossy(self.as_f64()))
        } else {
            T::checked_from_i128(self.as_i128()?).ok_or(MagnitudeError::Overflow)
        }
    }
}

// ───────────────────────────── operators ────────────────────────────────

impl core::ops::Mul for &Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: &Magnitude) -> Magnitude {
        self.multiply(rhs)
    }
}

impl core::ops::Mul for Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: Magnitude) -> Magnitude {
        self.multiply(&rhs)
    }
}

impl core::ops::Div for &Magnitude {
    type Output = Magnitude;

    fn div(self, rhs: &Magnitude) -> Magnitude {
        self.multiply(&rhs.inverse())
    }
}

impl core::ops::Div for Magnitude {
    type Output = Magnitude;

    fn div(self, rhs: Magnitude) -> Magnitude {
        self.multiply(&rhs.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::PI;

    fn mag(n: i64) -> Magnitude {
        Magnitude::from_integer(n).unwrap()
    }

    fn mag_ratio(num: i64, den: i64) -> Magnitude {
        Magnitude::from_ratio(num, den).unwrap()
    }

    #[test]
    fn construction_is_multiplicative() {
        assert_eq!(mag(24), &mag(8) * &mag(3));
        assert_eq!(mag(1000), &mag(8) * &mag(125));
        assert_eq!(mag(4), mag(2).pow(2, 1).unwrap());
    }

    #[test]
    fn zero_inputs_are_rejected() {
        assert_eq!(Magnitude::from_integer(0), Err(MagnitudeError::Zero));
        assert_eq!(Magnitude::from_ratio(0, 3), Err(MagnitudeError::Zero));
        assert_eq!(
            Magnitude::from_ratio(3, 0),
            Err(MagnitudeError::ZeroDenominator)
        );
    }

    #[test]
    fn ratios_normalise_their_sign() {
        assert_eq!(mag_ratio(3, -4), mag_ratio(-3, 4));
        assert_eq!(mag_ratio(-3, -4), mag_ratio(3, 4));
        assert_eq!(mag_ratio(4, 6), mag_ratio(2, 3));
    }

    #[test]
    fn identity_and_inverse() {
        assert_eq!(&mag(7) * &Magnitude::ONE, mag(7));
        assert_eq!(&mag(7) * &mag(7).inverse(), Magnitude::ONE);
        assert_eq!(mag(-1).inverse(), mag(-1));
        assert_eq!(&mag(-1) * &mag(-1), Magnitude::ONE);
    }

    #[test]
    fn division_undoes_multiplication() {
        let a = mag_ratio(15, 4);
        let b = mag_ratio(-7, 9);
        assert_eq!(&(&a * &b) / &b, a);
    }

    #[test]
    fn pow_laws() {
        let a = mag_ratio(9, 8);
        assert_eq!(a.pow(0, 1).unwrap(), Magnitude::ONE);
        assert_eq!(a.pow(1, 1).unwrap(), a);
        assert_eq!(a.pow(2, 1).unwrap(), &a * &a);
        assert_eq!(mag(4).pow(1, 2).unwrap(), mag(2));
        assert_eq!(a.pow(1, 2).unwrap().pow(2, 1).unwrap(), a);
    }

    #[test]
    fn even_root_of_negative_fails() {
        assert_eq!(mag(-4).pow(1, 2), Err(MagnitudeError::EvenRootOfNegative));
        assert_eq!(mag(-4).pow(3, 4), Err(MagnitudeError::EvenRootOfNegative));
    }

    #[test]
    fn odd_roots_of_negative_keep_the_sign() {
        assert_eq!(mag(-8).pow(1, 3).unwrap(), mag(-2));
        // An even numerator squares the sign away.
        assert_eq!(mag(-2).pow(2, 1).unwrap(), mag(4));
        assert_eq!(mag(-2).pow(3, 1).unwrap(), mag(-8));
    }

    #[test]
    fn numerator_denominator_split() {
        assert_eq!(mag_ratio(3, 4).numerator(), mag(3));
        assert_eq!(mag_ratio(3, 4).denominator(), mag(4));
        assert_eq!(mag_ratio(-3, 4).numerator(), mag(-3));
        assert_eq!(mag_ratio(-3, 4).denominator(), mag(4));
        assert_eq!(mag(12).numerator(), mag(12));
        assert_eq!(mag(12).denominator(), Magnitude::ONE);

        let m = mag_ratio(-3, 4);
        assert_eq!(&m.numerator() / &m.denominator(), m);
    }

    #[test]
    fn numerator_ignores_fractional_and_irrational_parts() {
        let root_two = mag(2).pow(1, 2).unwrap();
        assert_eq!(root_two.numerator(), Magnitude::ONE);
        // 2^(3/2) contains one whole factor of 2.
        assert_eq!(mag(2).pow(3, 2).unwrap().numerator(), mag(2));
        assert_eq!(Magnitude::from_constant(PI).numerator(), Magnitude::ONE);
    }

    #[test]
    fn common_magnitude_vectors() {
        assert_eq!(mag(24).common(&mag(36)), mag(12));
        assert_eq!(&mag(24) / &mag(12), mag(2));
        assert_eq!(&mag(36) / &mag(12), mag(3));

        assert_eq!(mag_ratio(3, 8).common(&mag_ratio(5, 6)), mag_ratio(1, 24));
        assert_eq!(mag(-24).common(&mag(-36)), mag(-12));
        assert_eq!(mag(2).common(&mag(-4)), mag(2));
        assert_eq!(mag(3).common(&mag(3)), mag(3));
        assert_eq!(mag(3).common(&Magnitude::ONE), Magnitude::ONE);
    }

    #[test]
    fn common_residues_have_no_negative_powers() {
        let a = mag_ratio(3, 8);
        let b = mag_ratio(5, 6);
        let c = a.common(&b);
        assert_eq!(&a / &c, mag(9));
        assert_eq!(&b / &c, mag(20));
    }

    #[test]
    fn abs_and_sign() {
        assert_eq!(mag(-24).abs(), mag(24));
        assert_eq!(mag(24).abs(), mag(24));
        assert_eq!(mag(-24).abs().abs(), mag(24));
        assert!(mag(24).is_positive());
        assert!(!mag(-24).is_positive());
        assert!(Magnitude::ONE.is_positive());
    }

    #[test]
    fn predicate_table() {
        assert!(mag(3).is_integral());
        assert!(mag(-3).is_integral());
        assert!(!mag_ratio(1, 2).is_integral());
        assert!(mag_ratio(1, 2).is_rational());
        assert!(!mag(2).pow(1, 2).unwrap().is_rational());
        assert!(!Magnitude::from_constant(PI).is_rational());

        assert!(mag(8).is_positive_integral_power());
        assert!(!mag(-8).is_positive_integral_power());
        assert!(!mag_ratio(1, 8).is_positive_integral_power());
        assert!(!mag(2).pow(1, 2).unwrap().is_positive_integral_power());
    }

    #[test]
    fn get_power_and_power_of_ten() {
        assert_eq!(mag(1000).get_power(2), Ratio::from_integer(3));
        assert_eq!(mag(1000).get_power(5), Ratio::from_integer(3));
        assert_eq!(mag(1000).get_power(3), Ratio::ZERO);
        assert_eq!(mag(1000).extract_power_of_10(), 3);
        assert_eq!(mag_ratio(1, 100).extract_power_of_10(), -2);
        assert_eq!(mag(20).extract_power_of_10(), 1);
        assert_eq!(mag(3).extract_power_of_10(), 0);
        assert_eq!(mag_ratio(2, 5).extract_power_of_10(), 0);
        assert_eq!(Magnitude::power_of_ten(3), mag(1000));
        assert_eq!(Magnitude::power_of_ten(0), Magnitude::ONE);
    }

    #[test]
    fn exact_integer_evaluation() {
        assert_eq!(mag(1000).as_i128().unwrap(), 1000);
        assert_eq!(mag(-24).as_i128().unwrap(), -24);
        assert_eq!(mag_ratio(1, 2).as_i128(), Err(MagnitudeError::NotIntegral));
        assert_eq!(
            Magnitude::from_constant(PI).as_i128(),
            Err(MagnitudeError::NotIntegral)
        );

        let huge = mag(2).pow(200, 1).unwrap();
        assert_eq!(huge.as_i128(), Err(MagnitudeError::Overflow));
    }

    #[test]
    fn get_value_in_concrete_representations() {
        assert_eq!(mag(1000).get_value::<i64>().unwrap(), 1000);
        assert_eq!(mag(1000).get_value::<u16>().unwrap(), 1000);
        assert_eq!(mag(1000).get_value::<u8>(), Err(MagnitudeError::Overflow));
        assert_eq!(mag(-5).get_value::<i8>().unwrap(), -5);
        assert_eq!(mag(-5).get_value::<u32>(), Err(MagnitudeError::Overflow));

        let two_to_70 = mag(2).pow(70, 1).unwrap();
        assert_eq!(two_to_70.get_value::<i64>(), Err(MagnitudeError::Overflow));

        assert_eq!(mag_ratio(1, 2).get_value::<f64>().unwrap(), 0.5);
        assert_eq!(mag_ratio(1, 2).get_value::<f32>().unwrap(), 0.5f32);
    }

    #[test]
    fn float_evaluation() {
        use approx::assert_relative_eq;

        assert_relative_eq!(mag_ratio(3, 4).as_f64(), 0.75);
        assert_relative_eq!(mag(-24).as_f64(), -24.0);
        assert_relative_eq!(
            Magnitude::from_constant(PI).as_f64(),
            core::f64::consts::PI
        );
        let two_pi = &mag(2) * &Magnitude::from_constant(PI);
        assert_relative_eq!(two_pi.inverse().as_f64(), 1.0 / core::f64::consts::TAU);
        assert_relative_eq!(mag(2).pow(1, 2).unwrap().as_f64(), core::f64::consts::SQRT_2);
    }

    #[test]
    fn min_integer_factorises() {
        let m = Magnitude::from_integer(i64::MIN).unwrap();
        assert!(!m.is_positive());
        assert_eq!(m.abs(), mag(2).pow(63, 1).unwrap());
        assert_eq!(m.as_i128().unwrap(), i128::from(i64::MIN));
    }
}
