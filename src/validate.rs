//! Input validation shared by encryption and decryption.

use crate::error::{Error, Result};
use ethnum::U256;

/// The maximum size in bytes of a modulus' unsigned big-endian
/// representation. Wider moduli would make trial division factorization and
/// the round function domain unreasonably expensive, so they are rejected up
/// front.
pub const MAX_MODULUS_BYTES: usize = 16;

/// Checks the operation contract shared by both directions and narrows the
/// modulus and the value to native integers.
///
/// The key and the tweak must be nonempty, the modulus at least 2 and at
/// most [`MAX_MODULUS_BYTES`] wide, and the value inside the modulus range.
/// Whether the modulus is actually composite is left to the factorizer,
/// which reports that failure as [`Error::Fpe`] rather than an argument
/// error.
pub fn check(modulus: U256, value: U256, key: &[u8], tweak: &[u8]) -> Result<(u128, u128)> {
    if key.is_empty() {
        return Err(Error::InvalidArgument("key must not be empty"));
    }
    if tweak.is_empty() {
        return Err(Error::InvalidArgument("tweak must not be empty"));
    }
    if tweak.len() > u32::MAX as usize {
        return Err(Error::InvalidArgument("tweak too long for length framing"));
    }
    if modulus < U256::new(2) {
        return Err(Error::InvalidArgument("modulus must be at least 2"));
    }
    if value >= modulus {
        return Err(Error::InvalidArgument("value out of modulus range"));
    }
    let width = (256 - modulus.leading_zeros() as usize).div_ceil(8);
    if width > MAX_MODULUS_BYTES {
        return Err(Error::InvalidArgument("modulus too large"));
    }

    Ok((modulus.as_u128(), value.as_u128()))
}
