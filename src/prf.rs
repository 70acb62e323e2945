//! The keyed round function at the heart of the Feistel network.
//!
//! Every encryption or decryption call first derives a fresh MAC key that
//! binds the modulus and the tweak, then queries one pseudo-random value per
//! round. Changing either the modulus or the tweak therefore produces an
//! unrelated value stream under the same user key.

use crate::encoding;
use ethnum::U256;
use hmac::{Hmac, Mac as _};
use sha2::Sha256;

/// The pseudo-random function for a single encryption or decryption call.
pub struct RoundFunction {
    /// The MAC key derived from the user key, the modulus and the tweak.
    key: [u8; 32],
    /// The reduction modulus for round values, the larger Feistel half.
    a: u128,
}

impl RoundFunction {
    /// Derives the per-call MAC key: the HMAC-SHA256 of the length-prefixed
    /// modulus and tweak under the user key.
    pub fn new(n: u128, a: u128, key: &[u8], tweak: &[u8]) -> Self {
        let header = {
            let mut buf = Vec::with_capacity(24 + tweak.len());
            encoding::put_uint(&mut buf, n);
            encoding::put_bytes(&mut buf, tweak);
            buf
        };

        let mut mac = hmac_sha256(key);
        mac.update(&header);
        Self {
            key: mac.finalize().into_bytes().into(),
            a,
        }
    }

    /// Computes the round value `F(round, r)`, reduced into `[0, a)`.
    ///
    /// The MAC input is the 4 byte big-endian round index followed by the
    /// length-prefixed value of `r`; the 32 byte output is interpreted as an
    /// unsigned big-endian integer. The output is 128 bits wider than any
    /// permitted modulus, so the bias of the reduction is negligible.
    pub fn value(&self, round: u32, r: u128) -> u128 {
        let mut buf = Vec::with_capacity(24);
        buf.extend_from_slice(&round.to_be_bytes());
        encoding::put_uint(&mut buf, r);

        let mut mac = hmac_sha256(&self.key);
        mac.update(&buf);
        let digest: [u8; 32] = mac.finalize().into_bytes().into();

        (U256::from_be_bytes(digest) % U256::new(self.a)).as_u128()
    }

    /// Gets the derived MAC key bytes.
    #[cfg(test)]
    fn key_bytes(&self) -> &[u8] {
        &self.key
    }
}

impl Drop for RoundFunction {
    fn drop(&mut self) {
        self.key = [0; 32];
    }
}

fn hmac_sha256(key: &[u8]) -> Hmac<Sha256> {
    Hmac::<Sha256>::new_from_slice(key).expect("HMAC-SHA256 accepts keys of any length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn key_derivation() {
        let f = RoundFunction::new(10_000, 100, &hex!("200130506070"), &hex!("0001020304"));
        assert_eq!(
            f.key_bytes(),
            hex!("4580c220c90027f8d07a56ab72c666afa213a222e75e386824cbf334f5deebe3"),
        );
    }

    #[test]
    fn round_values() {
        let f = RoundFunction::new(10_000, 100, &hex!("200130506070"), &hex!("0001020304"));
        assert_eq!(f.value(0, 0), 63);
        assert_eq!(f.value(1, 37), 24);
        assert_eq!(f.value(2, 99), 95);
    }

    #[test]
    fn wide_reduction_modulus() {
        let f = RoundFunction::new(
            9_999_999_999_999_999,
            100_000_001,
            &hex!("1020102010201020"),
            &hex!("010203040506"),
        );
        assert_eq!(
            f.key_bytes(),
            hex!("41fd014402ab75d13a98ed7618654e06dcec69c3438786ef72d649f1606e7bf2"),
        );
        assert_eq!(f.value(0, 0), 17_476_147);
    }
}
