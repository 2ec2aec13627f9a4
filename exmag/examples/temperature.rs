//! Affine temperature conversion between Fahrenheit, Celsius and kelvin.
//!
//! Run with: `cargo run --example temperature`

use exmag::{convert_point, Anchor, Magnitude, Policy, Ratio, UnitScale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let kelvin = Anchor::new(
        UnitScale::new("temperature", "K", Magnitude::ONE),
        Ratio::ZERO,
    );
    // 0 °C sits at 273.15 K; the origin is the exact rational 5463/20.
    let celsius = Anchor::new(
        UnitScale::new("temperature", "°C", Magnitude::ONE),
        Ratio::new(5463, 20),
    );
    // A Fahrenheit degree is 5/9 of a kelvin; 0 °F sits at 45967/180 K.
    let fahrenheit = Anchor::new(
        UnitScale::new("temperature", "°F", Magnitude::from_ratio(5, 9)?),
        Ratio::new(45_967, 180),
    );

    // Classic fixed points, exactly, in integers.
    let boiling: i64 = convert_point(212, &fahrenheit, &celsius, Policy::Forbid)?;
    println!("212 °F = {boiling} °C");
    let freezing: i64 = convert_point(0, &celsius, &fahrenheit, Policy::Forbid)?;
    println!("  0 °C = {freezing} °F");
    let crossover: i64 = convert_point(-40, &fahrenheit, &celsius, Policy::Forbid)?;
    println!("-40 °F = {crossover} °C");

    // Floats carry the origin offset too.
    let body: f64 = convert_point(98.6, &fahrenheit, &celsius, Policy::Forbid)?;
    println!("98.6 °F = {body:.1} °C");
    let absolute: f64 = convert_point(0.0, &kelvin, &celsius, Policy::Forbid)?;
    println!("  0 K  = {absolute} °C");

    // 25 °C is 298.15 K: not a whole kelvin, so integers refuse it.
    match convert_point::<i64, i64>(25, &celsius, &kelvin, Policy::Forbid) {
        Ok(_) => unreachable!(),
        Err(err) => println!("25 °C -> K (integer): {err}"),
    }
    Ok(())
}
