//! Read-only text rendering of magnitudes.
//!
//! Produces the compact symbol a magnitude contributes to a derived unit
//! symbol: integer ratios as `3/4`, large powers of ten in scientific form
//! (`10³`), named constants by their symbol (`π²`), and mixed denominators
//! with negative exponents (`2⁻¹ π⁻¹`). Both a Unicode and a plain ASCII
//! character set are supported.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write;

use crate::base::Base;
use crate::magnitude::Magnitude;
use crate::ratio::Ratio;

/// Character set used when rendering a magnitude symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharSet {
    /// Superscript exponents, `π`, `×` separators.
    #[default]
    Unicode,
    /// Caret exponents, `pi`, `x` separators.
    Ascii,
}

/// Renders the symbol of a magnitude.
///
/// The identity magnitude renders as the empty string: it contributes
/// nothing to a unit symbol. Powers of ten of three or more are split off
/// into scientific notation.
///
/// ```rust
/// use exmag_core::{magnitude_symbol, CharSet, Magnitude};
///
/// let m = Magnitude::from_integer(1000)?;
/// assert_eq!(magnitude_symbol(&m, CharSet::Unicode), "10³");
/// assert_eq!(magnitude_symbol(&m, CharSet::Ascii), "10^3");
/// # Ok::<(), exmag_core::MagnitudeError>(())
/// ```
#[must_use]
pub fn magnitude_symbol(m: &Magnitude, cs: CharSet) -> String {
    if m.is_one() {
        return String::new();
    }

    let exp10 = m.extract_power_of_10();
    let (residual, exp10) = if exp10.abs() >= 3 {
        (m / &Magnitude::power_of_ten(exp10), exp10)
    } else {
        (m.clone(), 0)
    };

    let parts = split(&residual, cs);
    let mut out = render_parts(&parts, cs);

    if exp10 != 0 {
        if out == "1" {
            out.clear();
        }
        let ten = match cs {
            CharSet::Unicode => alloc::format!("10{}", superscript(exp10)),
            CharSet::Ascii => alloc::format!("10^{exp10}"),
        };
        if out.is_empty() || out == "-" {
            out.push_str(&ten);
        } else {
            match cs {
                CharSet::Unicode => {
                    out.push_str(" × ");
                }
                CharSet::Ascii => {
                    out.push_str(" x ");
                }
            }
            out.push_str(&ten);
        }
    }
    out
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            f.write_str("1")
        } else {
            f.write_str(&magnitude_symbol(self, CharSet::Unicode))
        }
    }
}

// One renderable token of the residual magnitude: a base's text and its
// exponent.
struct Token {
    text: String,
    exponent: Ratio,
}

struct Parts {
    negative: bool,
    /// Integer value assembled from positive whole prime powers.
    num_value: i128,
    /// Integer value assembled from negative whole prime powers.
    den_value: i128,
    /// Constants and fractional prime powers, positive exponents.
    num_tokens: Vec<Token>,
    /// Constants and fractional prime powers, negative exponents (stored
    /// with their negative exponent).
    den_tokens: Vec<Token>,
}

fn split(m: &Magnitude, cs: CharSet) -> Parts {
    let mut parts = Parts {
        negative: false,
        num_value: 1,
        den_value: 1,
        num_tokens: Vec::new(),
        den_tokens: Vec::new(),
    };
    for f in m.factors() {
        match f.base {
            Base::Sentinel => parts.negative = true,
            Base::Prime(p) if f.exponent.is_integral() => {
                let e = f.exponent.numerator().unsigned_abs();
                let value = pow_i128(i128::from(p), e);
                let slot = if f.exponent.is_negative() {
                    &mut parts.den_value
                } else {
                    &mut parts.num_value
                };
                match value.and_then(|v| slot.checked_mul(v)) {
                    Some(v) => *slot = v,
                    // Too large for a plain integer; keep the power form.
                    None => push_token(&mut parts, p.to_string(), f.exponent),
                }
            }
            Base::Prime(p) => push_token(&mut parts, p.to_string(), f.exponent),
            Base::Constant(c) => {
                let text = match cs {
                    CharSet::Unicode => c.symbol(),
                    CharSet::Ascii => c.ascii(),
                };
                push_token(&mut parts, String::from(text), f.exponent);
            }
        }
    }
    parts
}

fn push_token(parts: &mut Parts, text: String, exponent: Ratio) {
    let list = if exponent.is_negative() {
        &mut parts.den_tokens
    } else {
        &mut parts.num_tokens
    };
    list.push(Token { text, exponent });
}

fn pow_i128(base: i128, exp: u64) -> Option<i128> {
    let exp = u32::try_from(exp).ok()?;
    base.checked_pow(exp)
}

fn render_parts(parts: &Parts, cs: CharSet) -> String {
    let mut num = Vec::new();
    if parts.num_value != 1 || (parts.num_tokens.is_empty() && parts.den_value == 1) {
        num.push(parts.num_value.to_string());
    }
    for t in &parts.num_tokens {
        num.push(with_exponent(&t.text, t.exponent, cs));
    }

    let mut out = String::new();
    if parts.negative {
        out.push('-');
    }

    let den_piece_count =
        usize::from(parts.den_value != 1) + parts.den_tokens.len();

    if den_piece_count == 0 {
        if num.is_empty() || (num.len() == 1 && num[0] == "1") {
            // Only the sign (or nothing) remains; `-1` renders as `-`.
            if !parts.negative {
                out.push('1');
            }
        } else {
            out.push_str(&num.join(" "));
        }
        return out;
    }

    // A single denominator piece under a bare numerator reads best as a
    // fraction; anything richer switches to negative exponents.
    let simple_fraction = den_piece_count == 1
        && num.len() <= 1
        && parts
            .den_tokens
            .first()
            .map_or(true, |t| t.exponent == -Ratio::ONE);
    if simple_fraction {
        if num.is_empty() {
            out.push('1');
        } else {
            out.push_str(&num.join(" "));
        }
        out.push('/');
        if parts.den_value != 1 {
            out.push_str(&parts.den_value.to_string());
        } else if let Some(t) = parts.den_tokens.first() {
            out.push_str(&t.text);
        }
        return out;
    }

    let mut pieces = num;
    if parts.den_value != 1 {
        pieces.push(with_exponent(
            &parts.den_value.to_string(),
            -Ratio::ONE,
            cs,
        ));
    }
    for t in &parts.den_tokens {
        pieces.push(with_exponent(&t.text, t.exponent, cs));
    }
    out.push_str(&pieces.join(" "));
    out
}

fn with_exponent(text: &str, exponent: Ratio, cs: CharSet) -> String {
    if exponent.is_one() {
        return String::from(text);
    }
    let mut out = String::from(text);
    if exponent.is_integral() {
        match cs {
            CharSet::Unicode => out.push_str(&superscript(exponent.numerator())),
            CharSet::Ascii => {
                let _ = write!(out, "^{}", exponent.numerator());
            }
        }
    } else {
        // Fractional powers have no superscript form; fall back to an
        // explicit parenthesised exponent.
        let _ = write!(out, "^({exponent})");
    }
    out
}

fn superscript(n: i64) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    let mut digits = Vec::new();
    let mut rest = n.unsigned_abs();
    loop {
        digits.push(DIGITS[(rest % 10) as usize]);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    out.extend(digits.into_iter().rev());
    out
}
