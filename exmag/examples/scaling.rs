//! Exact metric scaling with explicit precision policy.
//!
//! Run with: `cargo run --example scaling`

use exmag::{convert, magnitude_symbol, CharSet, Magnitude, Policy, UnitScale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let m = UnitScale::new("length", "m", Magnitude::ONE);
    let km = UnitScale::new("length", "km", Magnitude::from_integer(1000)?);
    let ft = UnitScale::new("length", "ft", Magnitude::from_ratio(3048, 10_000)?);

    // Exact integer conversions stay exact.
    let exact: i64 = convert(2000, &m, &km, Policy::Forbid)?;
    println!("2000 m  = {exact} km (exact)");

    // Inexact ones are refused unless truncation is requested.
    match convert::<i64, i64>(1500, &m, &km, Policy::Forbid) {
        Ok(_) => unreachable!(),
        Err(err) => println!("1500 m -> km: {err}"),
    }
    let truncated: i64 = convert(1500, &m, &km, Policy::Truncate)?;
    println!("1500 m  = {truncated} km (truncated)");

    // Rational factors multiply before dividing, so this is exact too.
    let feet: i64 = convert(381, &m, &ft, Policy::Forbid)?;
    println!("381 m   = {feet} ft (exact)");

    // The symbolic magnitudes behind the scenes.
    println!(
        "km magnitude: {}, ft magnitude: {}",
        magnitude_symbol(&km.magnitude, CharSet::Unicode),
        magnitude_symbol(&ft.magnitude, CharSet::Unicode),
    );
    Ok(())
}
