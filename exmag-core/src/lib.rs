//! Exact symbolic magnitudes for unit conversion.
//!
//! `exmag-core` represents the ratio between two measurement units as an
//! exact symbolic value instead of a floating-point number:
//!
//! - A [`Magnitude`] is a product of prime powers, named irrational
//!   constants like [`PI`], and an exact sign, with rational exponents.
//! - The algebra (multiply, divide, [`Magnitude::pow`],
//!   [`Magnitude::common`]) is exact; equal ratios always compare equal.
//! - A [`ConversionPlan`] turns the ratio between two [`UnitScale`]s into a
//!   numerically safe rescaling of a concrete value, picking the computation
//!   type and operation order so exact conversions stay exact.
//! - [`convert_point`] adds origin handling for affine scales such as
//!   temperatures.
//!
//! Most users should depend on `exmag` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Conversion factors that cancel symbolically: `km → m → km` is the
//!   identity, not a pair of floating-point multiplications.
//! - Integer-typed quantities that convert without silent truncation:
//!   `2000 m` is exactly `2 km` in `i64`, and `1 m → km` is an error unless
//!   truncation is requested.
//! - Irrational scale factors (π in angular units) kept symbolic until a
//!   numeric value is actually needed.
//!
//! # What this crate does not try to solve
//!
//! - A unit catalogue or dimensional analysis; collaborators supply their
//!   own [`UnitScale`] identities and dimension names.
//! - Arbitrary-precision arithmetic. Exponents are `i64` rationals and
//!   integer computation widens to `i128`; anything beyond that reports
//!   overflow.
//! - Non-multiplicative combinations of irrational constants (`π + 2` has
//!   no magnitude).
//!
//! # Quick start
//!
//! ```rust
//! use exmag_core::{convert, Magnitude, Policy, UnitScale};
//!
//! let m = UnitScale::new("length", "m", Magnitude::ONE);
//! let km = UnitScale::new("length", "km", Magnitude::from_integer(1000)?);
//!
//! let distance: i64 = convert(2000, &m, &km, Policy::Forbid)?;
//! assert_eq!(distance, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `exmag-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! exmag-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! The crate still requires `alloc`. When `std` is disabled, floating-point
//! math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables serialization for [`Ratio`], [`Base`], [`Factor`] and
//!   [`Magnitude`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`MagnitudeError`] or [`ConversionError`].
//! The only panicking constructor is [`Ratio::new`] with a zero
//! denominator, which is a programmer error rather than a data error.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod affine;
mod base;
mod convert;
mod error;
mod magnitude;
mod prime;
mod proptests;
mod ratio;
mod repr;
mod symbol;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use affine::{convert_point, Anchor};
pub use base::{Base, MagConstant, PI};
pub use convert::{convert, ConversionPlan, Policy, UnitScale};
pub use error::{ConversionError, MagnitudeError};
pub use magnitude::{Factor, Magnitude};
pub use ratio::Ratio;
pub use repr::Scalar;
pub use symbol::{magnitude_symbol, CharSet};

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Cross-module smoke tests; details live next to each module.
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometre_round_trip_is_the_identity() {
        let m = UnitScale::new("length", "m", Magnitude::ONE);
        let km = UnitScale::new("length", "km", Magnitude::from_integer(1000).unwrap());

        let there: i64 = convert(7, &km, &m, Policy::Forbid).unwrap();
        let back: i64 = convert(there, &m, &km, Policy::Forbid).unwrap();
        assert_eq!(back, 7);

        // The symbolic ratio cancels exactly.
        let ratio = &km.magnitude / &m.magnitude;
        assert_eq!(&ratio * &ratio.inverse(), Magnitude::ONE);
    }

    #[test]
    fn pi_stays_symbolic_until_evaluated() {
        let rad = UnitScale::new("angle", "rad", Magnitude::ONE);
        let deg = UnitScale::new(
            "angle",
            "°",
            &Magnitude::from_constant(PI) * &Magnitude::from_ratio(1, 180).unwrap(),
        );

        // deg -> rad -> deg cancels π without ever computing it.
        let plan = ConversionPlan::new(&deg, &rad, Policy::Forbid).unwrap();
        let back = ConversionPlan::new(&rad, &deg, Policy::Forbid).unwrap();
        assert_eq!(plan.ratio() * back.ratio(), Magnitude::ONE);

        let v: f64 = plan.apply(180.0f64).unwrap();
        approx::assert_relative_eq!(v, core::f64::consts::PI);
    }

    #[test]
    fn rendering_matches_the_algebra() {
        let deg_mag = &Magnitude::from_constant(PI) * &Magnitude::from_ratio(1, 180).unwrap();
        assert_eq!(magnitude_symbol(&deg_mag, CharSet::Unicode), "π/180");
        assert_eq!(magnitude_symbol(&deg_mag, CharSet::Ascii), "pi/180");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn ratio_round_trips_through_json() {
            let r = Ratio::new(-3, 4);
            let json = serde_json::to_string(&r).unwrap();
            let back: Ratio = serde_json::from_str(&json).unwrap();
            assert_eq!(back, r);
        }

        #[test]
        fn ratio_rejects_zero_denominator() {
            let result: Result<Ratio, _> = serde_json::from_str(r#"{"num":1,"den":0}"#);
            assert!(result.is_err());
        }

        #[test]
        fn magnitude_serializes_its_factors() {
            let m = Magnitude::from_ratio(-3, 4).unwrap();
            let json = serde_json::to_string(&m).unwrap();
            assert!(json.contains("Sentinel"));
            assert!(json.contains("Prime"));
        }
    }
}
