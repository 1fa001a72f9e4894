//! Verification of encrypted ballots: disjunctive Chaum-Pedersen proofs on every selection and
//! selection limits on every contest
use crypto_bigint::Uint;

/// Use the same big integer type everywhere
pub const LIMBS: usize = 4096 / 64; // 64 words each 64 bits, a total of 4096 bits
pub type BigInt = Uint<LIMBS>;

pub mod arithmetics;
pub mod config;
pub mod context;
pub mod decimal;
pub mod error;
pub mod hash;
pub mod limits;
pub mod proofs;
pub mod records;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
