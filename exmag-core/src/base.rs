//! Basis kinds: prime integers, the sign sentinel, and named irrational
//! constants.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// A named irrational constant usable as a magnitude basis, e.g. [`PI`].
///
/// Carries a display symbol, an ASCII fallback, and a fixed high-precision
/// `f64` approximation. The approximation orders the constant relative to the
/// prime bases and is the value used whenever a magnitude containing the
/// constant is evaluated numerically.
///
/// # Invariants
///
/// - `value` must be positive and finite.
/// - Two constants with the same symbol must have the same value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MagConstant {
    symbol: &'static str,
    ascii: &'static str,
    value: f64,
}

impl MagConstant {
    /// Defines a named constant.
    #[must_use]
    pub const fn new(symbol: &'static str, ascii: &'static str, value: f64) -> Self {
        Self { symbol, ascii, value }
    }

    /// The display symbol (may be non-ASCII, e.g. `"π"`).
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The ASCII fallback symbol (e.g. `"pi"`).
    #[must_use]
    pub const fn ascii(&self) -> &'static str {
        self.ascii
    }

    /// The numeric approximation.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl PartialEq for MagConstant {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for MagConstant {}

impl Hash for MagConstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.value.to_bits().hash(state);
    }
}

/// The circle constant π.
pub const PI: MagConstant = MagConstant::new("π", "pi", core::f64::consts::PI);

/// The base of one factor of a magnitude.
///
/// Bases are totally ordered by numeric value, with [`Base::Sentinel`]
/// (conceptually the factor −1) sorting before every positive base. Ties
/// among constants are broken structurally so the order is strict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Base {
    /// Sign sentinel: the factor −1. At most one per magnitude, always
    /// first; two occurrences cancel. Enables exact negative ratios.
    Sentinel,
    /// A prime integer greater than one.
    Prime(i64),
    /// A named irrational constant.
    Constant(MagConstant),
}

impl Base {
    /// The numeric value this base stands for (−1 for the sentinel).
    #[must_use]
    pub fn numeric_value(&self) -> f64 {
        match self {
            Base::Sentinel => -1.0,
            Base::Prime(p) => *p as f64,
            Base::Constant(c) => c.value(),
        }
    }

    /// Returns true for [`Base::Sentinel`].
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Base::Sentinel)
    }

    /// Returns true for [`Base::Constant`].
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Base::Constant(_))
    }
}

impl Ord for Base {
    fn cmp(&self, other: &Self) -> Ordering {
        use Base::{Constant, Prime, Sentinel};
        match (self, other) {
            (Sentinel, Sentinel) => Ordering::Equal,
            (Sentinel, _) => Ordering::Less,
            (_, Sentinel) => Ordering::Greater,
            // Primes compare exactly; mixed comparisons go through the
            // numeric approximation with a structural tie-break so the
            // order stays strict even for pathological constant values.
            (Prime(a), Prime(b)) => a.cmp(b),
            (Prime(p), Constant(c)) => (*p as f64).total_cmp(&c.value()).then(Ordering::Less),
            (Constant(c), Prime(p)) => c.value().total_cmp(&(*p as f64)).then(Ordering::Greater),
            (Constant(a), Constant(b)) => a
                .value()
                .total_cmp(&b.value())
                .then_with(|| a.symbol().cmp(b.symbol())),
        }
    }
}

impl PartialOrd for Base {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
