//! Format-preserving encryption over arbitrary integer moduli.
//!
//! This crate implements the FE1 construction: a keyed, tweakable Feistel
//! network over `(Z/aZ) × (Z/bZ)` for a composite modulus `n = a·b`, with
//! HMAC-SHA256 driving the round function. For every valid modulus, key and
//! tweak, [`encrypt`] is a bijection on `{0, 1, …, n − 1}` and [`decrypt`]
//! inverts it exactly, so ciphertexts occupy the same integer range as the
//! plaintexts they replace.

mod encoding;
mod error;
mod factor;
mod feistel;
mod prf;
mod validate;

pub use self::{
    error::{Error, Result},
    feistel::{decrypt, encrypt},
    validate::MAX_MODULUS_BYTES,
};
pub use ethnum::U256;
