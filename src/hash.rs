//! Hash-to-challenge derivation for the non-interactive proofs
//!
//! The hashed string is `|e1|e2|...|en|` where every element is written in uppercase hexadecimal,
//! left-padded to an even number of digits, and zero is written as `null`. The SHA-256 digest is
//! read as a big-endian integer and reduced (mod Q).
use crate::{arithmetics, BigInt};
use crypto_bigint::NonZero;
use digest::Digest;
use sha2::Sha256;

const SEPARATOR: &str = "|";

/// Canonical string form of one hashed element
fn encode(elem: &BigInt) -> String {
    if *elem == BigInt::ZERO {
        return "null".to_string();
    }
    let hex: String = elem
        .as_words()
        .iter()
        .rev()
        .map(|word| format!("{word:016X}"))
        .collect();
    let hex = hex.trim_start_matches('0');
    if hex.len() % 2 == 1 {
        return format!("0{hex}");
    }
    return hex.to_string();
}

/// Hash the extended base hash followed by the given elements, in order, into [0, Q)
pub fn hash_elems(extended_hash: &BigInt, elems: &[&BigInt], q: &NonZero<BigInt>) -> BigInt {
    let mut hasher = Sha256::new();
    hasher.update(SEPARATOR.as_bytes());
    for elem in std::iter::once(extended_hash).chain(elems.iter().copied()) {
        hasher.update(encode(elem).as_bytes());
        hasher.update(SEPARATOR.as_bytes());
    }
    let digest = hasher.finalize();

    // right-align the 32-byte digest in a full-width big-endian buffer
    let mut bytes = vec![0u8; BigInt::BYTES];
    let offset = bytes.len() - digest.len();
    bytes[offset..].copy_from_slice(&digest);
    let value = BigInt::from_be_slice(&bytes);

    return arithmetics::modulo(&value, q);
}
