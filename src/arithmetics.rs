//! Convenience functions for modular arithmetics
//!
//! All values are unsigned, so a "negative" intermediate can only come out of a difference. Such
//! differences go through [`difference_mod`], which always lands in `[0, m)`.
use crate::{BigInt, LIMBS};
use crypto_bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    NonZero,
};

/// x mod m, always in [0, m)
pub fn modulo(x: &BigInt, m: &NonZero<BigInt>) -> BigInt {
    return x.rem(m);
}

/// (a - b) mod m, always in [0, m) even when b > a
pub fn difference_mod(a: &BigInt, b: &BigInt, m: &NonZero<BigInt>) -> BigInt {
    let a = modulo(a, m);
    let b = modulo(b, m);
    return a.sub_mod(&b, m);
}

/// (a + b) mod m, for operands of any size
pub fn sum_mod(a: &BigInt, b: &BigInt, m: &NonZero<BigInt>) -> BigInt {
    let a = modulo(a, m);
    let b = modulo(b, m);
    return a.add_mod(&b, m);
}

/// Exact equality; there is no tolerance on integers
pub fn equals(a: &BigInt, b: &BigInt) -> bool {
    return a == b;
}

/// Lift an integer into Montgomery form under the given modulus, reducing it first
pub fn to_residue(
    x: &BigInt,
    modulus: &NonZero<BigInt>,
    params: DynResidueParams<LIMBS>,
) -> DynResidue<LIMBS> {
    return DynResidue::new(&modulo(x, modulus), params);
}

/// base ** exp (mod m). The verifier works on public values only, so the exponentiation is
/// bounded by the actual bit length of the exponent.
pub fn mod_pow(
    base: &BigInt,
    exp: &BigInt,
    modulus: &NonZero<BigInt>,
    params: DynResidueParams<LIMBS>,
) -> DynResidue<LIMBS> {
    let bits = exp.bits().max(1);
    return to_residue(base, modulus, params).pow_bounded_exp(exp, bits);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nz(m: u64) -> NonZero<BigInt> {
        NonZero::new(BigInt::from_u64(m)).unwrap()
    }

    #[test]
    fn test_difference_mod_wraps_negative() {
        let m = nz(7);
        // 3 - 10 = -7 = 0 (mod 7)
        assert_eq!(
            difference_mod(&BigInt::from_u8(3), &BigInt::from_u8(10), &m),
            BigInt::ZERO
        );
        // 2 - 5 = -3 = 4 (mod 7)
        assert_eq!(
            difference_mod(&BigInt::from_u8(2), &BigInt::from_u8(5), &m),
            BigInt::from_u8(4)
        );
    }

    #[test]
    fn test_mod_pow_small() {
        let m = nz(23);
        let params = DynResidueParams::new(&BigInt::from_u8(23));
        // 2 has order 11 (mod 23)
        let one = mod_pow(&BigInt::from_u8(2), &BigInt::from_u8(11), &m, params);
        assert_eq!(one.retrieve(), BigInt::ONE);
        let zero_exp = mod_pow(&BigInt::from_u8(5), &BigInt::ZERO, &m, params);
        assert_eq!(zero_exp.retrieve(), BigInt::ONE);
        let reduced_base = mod_pow(&BigInt::from_u8(25), &BigInt::from_u8(3), &m, params);
        assert_eq!(reduced_base.retrieve(), BigInt::from_u8(8));
    }

    proptest! {
        #[test]
        fn prop_modulo_in_range(x in any::<u64>(), m in 1u64..) {
            let r = modulo(&BigInt::from_u64(x), &nz(m));
            prop_assert!(r < BigInt::from_u64(m));
            prop_assert_eq!(r, BigInt::from_u64(x % m));
        }

        #[test]
        fn prop_difference_mod_matches_signed(a in any::<u32>(), b in any::<u32>(), m in 1u32..) {
            let expected = (a as i64 - b as i64).rem_euclid(m as i64) as u64;
            let r = difference_mod(
                &BigInt::from_u32(a),
                &BigInt::from_u32(b),
                &nz(m as u64),
            );
            prop_assert_eq!(r, BigInt::from_u64(expected));
        }

        #[test]
        fn prop_sum_mod_matches(a in any::<u64>(), b in any::<u64>(), m in 1u64..) {
            let expected = ((a as u128 + b as u128) % m as u128) as u64;
            let r = sum_mod(&BigInt::from_u64(a), &BigInt::from_u64(b), &nz(m));
            prop_assert_eq!(r, BigInt::from_u64(expected));
        }
    }
}
