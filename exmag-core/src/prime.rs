//! Deterministic prime search by trial division.
//!
//! Every magnitude constructor factors through these helpers, so numerically
//! equal inputs always canonicalise to identical factor sequences.

/// Smallest factor of `n` (which is `n` itself when `n` is prime).
///
/// Trial division over 2, 3, then the `6k ± 1` wheel.
pub(crate) fn find_first_factor(n: u64) -> u64 {
    debug_assert!(n >= 2);
    if n % 2 == 0 {
        return 2;
    }
    if n % 3 == 0 {
        return 3;
    }
    let mut k = 5u64;
    while k * k <= n {
        if n % k == 0 {
            return k;
        }
        if n % (k + 2) == 0 {
            return k + 2;
        }
        k += 6;
    }
    n
}

/// How many times `factor` divides `n`.
pub(crate) fn multiplicity(factor: u64, mut n: u64) -> u32 {
    let mut count = 0;
    while n % factor == 0 {
        n /= factor;
        count += 1;
    }
    count
}

/// Divides `factor^power` out of `n`.
pub(crate) fn remove_power(factor: u64, power: u32, mut n: u64) -> u64 {
    for _ in 0..power {
        n /= factor;
    }
    n
}
