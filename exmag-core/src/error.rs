//! Error taxonomy for magnitude construction and value conversion.

use crate::magnitude::Magnitude;
use thiserror::Error;

/// Failure while constructing or exactly evaluating a [`Magnitude`].
///
/// All variants are detected at the point of construction (or evaluation) and
/// never propagate into the middle of a numeric computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MagnitudeError {
    /// Zero was requested as a magnitude. Zero has no multiplicative inverse
    /// and cannot be represented as a product of basis powers.
    #[error("zero cannot be represented as a magnitude")]
    Zero,

    /// A rational argument with denominator zero.
    #[error("denominator must not be zero")]
    ZeroDenominator,

    /// An even root of a negative magnitude was requested.
    #[error("cannot take an even root of a negative magnitude")]
    EvenRootOfNegative,

    /// The magnitude is exact but does not fit the requested integer type.
    #[error("magnitude does not fit in the requested integer type")]
    Overflow,

    /// An integer value was requested for a magnitude that is not an integer.
    #[error("magnitude is not an integer")]
    NotIntegral,
}

/// Failure while planning or applying a unit conversion.
///
/// Every variant is reported before any value is rescaled; a conversion either
/// runs to completion or returns one of these with no partial effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The two units do not share a well-defined ratio. The engine refuses to
    /// guess; both dimensions and magnitudes are named for diagnostics.
    #[error(
        "incompatible units: cannot convert {from_symbol} [{from_dimension}, magnitude {from_magnitude}] \
         to {to_symbol} [{to_dimension}, magnitude {to_magnitude}]"
    )]
    IncompatibleUnits {
        /// Symbol of the source unit.
        from_symbol: &'static str,
        /// Dimension of the source unit.
        from_dimension: &'static str,
        /// Magnitude of the source unit.
        from_magnitude: Magnitude,
        /// Symbol of the target unit.
        to_symbol: &'static str,
        /// Dimension of the target unit.
        to_dimension: &'static str,
        /// Magnitude of the target unit.
        to_magnitude: Magnitude,
    },

    /// The target representation cannot hold the scaled value exactly and the
    /// active [`Policy`](crate::Policy) forbids truncation.
    #[error("conversion from {from_symbol} to {to_symbol} would lose precision: {reason}")]
    PrecisionLoss {
        /// Symbol of the source unit.
        from_symbol: &'static str,
        /// Symbol of the target unit.
        to_symbol: &'static str,
        /// Which step of the conversion would truncate.
        reason: &'static str,
    },

    /// The widened intermediate computation (or the target representation)
    /// cannot hold the scaled value.
    #[error("conversion from {from_symbol} to {to_symbol} overflows its computation type")]
    Overflow {
        /// Symbol of the source unit.
        from_symbol: &'static str,
        /// Symbol of the target unit.
        to_symbol: &'static str,
    },
}
