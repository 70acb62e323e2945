//! The Feistel network over the factored modulus and the public entry
//! points.

use crate::{error::Result, factor::factor, prf::RoundFunction, validate};
use ethnum::U256;

/// The number of Feistel rounds applied by every operation.
const ROUNDS: u32 = 3;

/// Encrypts `plaintext` into a ciphertext in `[0, modulus)`.
///
/// The mapping is deterministic, and for a fixed modulus, key and tweak it
/// is a bijection on `[0, modulus)`, so no two plaintexts collide. The tweak
/// is not secret; it diversifies the permutation without changing the key.
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the
/// key or tweak is empty, the modulus is smaller than 2 or wider than
/// [`MAX_MODULUS_BYTES`](crate::MAX_MODULUS_BYTES), or the plaintext is not
/// inside the modulus range; returns [`Error::Fpe`](crate::Error::Fpe) if
/// the modulus is prime.
pub fn encrypt(
    modulus: U256,
    plaintext: U256,
    key: impl AsRef<[u8]>,
    tweak: impl AsRef<[u8]>,
) -> Result<U256> {
    let (key, tweak) = (key.as_ref(), tweak.as_ref());
    let (n, mut x) = validate::check(modulus, plaintext, key, tweak)?;
    let (a, b) = factor(n)?;
    let f = RoundFunction::new(n, a, key, tweak);

    for round in 0..ROUNDS {
        let (l, r) = (x / b, x % b);
        let w = (l + f.value(round, r)) % a;
        x = a * r + w;
    }

    Ok(U256::new(x))
}

/// Decrypts `ciphertext` back to the plaintext it was produced from.
///
/// Runs the rounds of [`encrypt`] in reverse with modular subtraction, so
/// for any valid inputs `decrypt(n, encrypt(n, x, k, t), k, t) == x`.
/// Failure semantics are identical to [`encrypt`].
pub fn decrypt(
    modulus: U256,
    ciphertext: U256,
    key: impl AsRef<[u8]>,
    tweak: impl AsRef<[u8]>,
) -> Result<U256> {
    let (key, tweak) = (key.as_ref(), tweak.as_ref());
    let (n, mut x) = validate::check(modulus, ciphertext, key, tweak)?;
    let (a, b) = factor(n)?;
    let f = RoundFunction::new(n, a, key, tweak);

    for round in (0..ROUNDS).rev() {
        let (r, w) = (x / a, x % a);
        // b >= 2 bounds a by n / 2, so the sum cannot overflow.
        let l = (w + a - f.value(round, r)) % a;
        x = b * l + r;
    }

    Ok(U256::new(x))
}
