//! Balanced factorization of the modulus into the two Feistel half sizes.

use crate::error::{Error, Result};

/// Splits a composite modulus into `(a, b)` such that `a * b == n` and
/// `a >= b > 1`, with `b` the largest divisor of `n` not exceeding `√n`.
/// Keeping the split as close to the square root as possible keeps the two
/// Feistel halves balanced.
///
/// The search is deterministic, so encryption and decryption always agree on
/// the same factorization for the same modulus. Returns an error if `n` is
/// prime.
pub fn factor(n: u128) -> Result<(u128, u128)> {
    let mut d = n.isqrt();
    while d > 1 {
        if n % d == 0 {
            return Ok((n / d, d));
        }
        d -= 1;
    }

    Err(Error::Fpe("modulus has no nontrivial factorization"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_factors() {
        for &(n, a, b) in &[
            (4, 2, 2),
            (6, 3, 2),
            (12, 4, 3),
            (15, 5, 3),
            (100, 10, 10),
            (254, 127, 2),
            (10_000, 100, 100),
            (9_999_999_999_999_999, 100_000_001, 99_999_999),
            (u128::MAX, 18_446_744_073_709_551_617, 18_446_744_073_709_551_615),
        ] {
            assert_eq!(factor(n).unwrap(), (a, b));
            assert_eq!(a * b, n);
        }
    }

    #[test]
    fn prime_moduli() {
        for &n in &[2_u128, 3, 5, 7, 10_007, 65_537] {
            assert_eq!(
                factor(n),
                Err(Error::Fpe("modulus has no nontrivial factorization")),
            );
        }
    }
}
