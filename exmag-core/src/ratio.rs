//! Exact rational numbers used as basis exponents and conversion powers.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// An exact rational number.
///
/// `Ratio` is the exponent type of the magnitude algebra: every basis element
/// carries one, and [`Magnitude::pow`](crate::Magnitude::pow) is parametrised
/// by one. Ratios are always stored in lowest terms with a positive
/// denominator, so structural equality is value equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    /// The rational zero, `0/1`.
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };

    /// The rational one, `1/1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Creates a ratio from a numerator and denominator, reduced to lowest
    /// terms with the sign normalised into the numerator.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator must not be zero");
        Self::reduced(i128::from(num), i128::from(den))
    }

    /// Creates an integral ratio (`n/1`).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    // Invariant on entry: den != 0.
    fn reduced(num: i128, den: i128) -> Self {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        if num == 0 {
            return Self::ZERO;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        let (num, den) = (num / g as i128, den / g as i128);
        assert!(
            num >= i128::from(i64::MIN) && num <= i128::from(i64::MAX) && den <= i128::from(i64::MAX),
            "rational exponent overflow"
        );
        Self {
            num: num as i64,
            den: den as i64,
        }
    }

    /// The signed numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.num
    }

    /// The denominator; always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.den
    }

    /// Returns true if this ratio is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Returns true if this ratio is exactly one.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        self.den == 1
    }

    /// Returns true if this ratio is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// The integer part, truncated toward zero.
    #[must_use]
    pub const fn trunc(self) -> i64 {
        self.num / self.den
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// The closest `f64` approximation.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl Add for Ratio {
    type Output = Ratio;

    fn add(self, rhs: Ratio) -> Ratio {
        Ratio::reduced(
            i128::from(self.num) * i128::from(rhs.den) + i128::from(rhs.num) * i128::from(self.den),
            i128::from(self.den) * i128::from(rhs.den),
        )
    }
}

impl Sub for Ratio {
    type Output = Ratio;

    fn sub(self, rhs: Ratio) -> Ratio {
        self + (-rhs)
    }
}

impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio::reduced(
            i128::from(self.num) * i128::from(rhs.num),
            i128::from(self.den) * i128::from(rhs.den),
        )
    }
}

impl Neg for Ratio {
    type Output = Ratio;

    fn neg(self) -> Ratio {
        Ratio::reduced(-i128::from(self.num), i128::from(self.den))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (i128::from(self.num) * i128::from(other.den)).cmp(&(i128::from(other.num) * i128::from(self.den)))
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio({self})")
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            num: i64,
            den: i64,
        }
        let raw = Raw::deserialize(deserializer)?;
        if raw.den == 0 {
            return Err(serde::de::Error::custom("denominator must not be zero"));
        }
        Ok(Ratio::new(raw.num, raw.den))
    }
}
