//! Exact unit-conversion magnitudes and precision-preserving conversion.
//!
//! `exmag` is the user-facing crate in this workspace. It re-exports the
//! full API from `exmag-core`: the symbolic [`Magnitude`] algebra, the
//! [`ConversionPlan`] engine, and the affine [`convert_point`] cast.
//!
//! The core idea is: the ratio between two units is an exact symbolic value,
//! a product of prime powers and named constants like [`PI`], and every
//! numeric conversion is derived from that exact form. Equal ratios cancel
//! exactly, integer conversions never truncate silently, and irrational
//! factors stay symbolic until a number is actually needed.
//!
//! # What this crate solves
//!
//! - Exact round trips: converting `7 km` to metres and back yields exactly
//!   `7`, in integers.
//! - Explicit precision policy: a conversion that would truncate returns an
//!   error under [`Policy::Forbid`] and truncates only under
//!   [`Policy::Truncate`], through one audited code path.
//! - Affine scales: `212 °F` converts to exactly `100 °C` in `i64` via
//!   [`convert_point`].
//!
//! # What this crate does not try to solve
//!
//! - A unit catalogue; callers define their own [`UnitScale`] identities.
//! - Arbitrary-precision arithmetic; integer computation widens to `i128`
//!   and reports overflow beyond that.
//!
//! # Quick start
//!
//! ```rust
//! use exmag::{convert, Magnitude, Policy, UnitScale};
//!
//! let m = UnitScale::new("length", "m", Magnitude::ONE);
//! let km = UnitScale::new("length", "km", Magnitude::from_integer(1000)?);
//!
//! let exact: i64 = convert(2000, &m, &km, Policy::Forbid)?;
//! assert_eq!(exact, 2);
//!
//! // 1500 m is not a whole number of kilometres.
//! assert!(convert::<i64, i64>(1500, &m, &km, Policy::Forbid).is_err());
//! let truncated: i64 = convert(1500, &m, &km, Policy::Truncate)?;
//! assert_eq!(truncated, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `exmag-core`.
//! - `serde`: enables serialization for the symbolic types.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! exmag = { version = "0.1.0", default-features = false }
//! ```
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use exmag_core::*;
