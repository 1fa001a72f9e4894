//! The group constants and the per-election cryptographic context
use crate::{
    arithmetics::{self, mod_pow},
    decimal,
    error::{Error, Result},
    BigInt, LIMBS,
};
use crypto_bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    NonZero,
};
use serde::{Deserialize, Serialize};

/// The constants file as it is published with the election record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantsRecord {
    #[serde(with = "crate::decimal")]
    pub large_prime: BigInt,

    #[serde(with = "crate::decimal")]
    pub small_prime: BigInt,

    #[serde(default, with = "crate::decimal::option", skip_serializing_if = "Option::is_none")]
    pub cofactor: Option<BigInt>,

    #[serde(default, with = "crate::decimal::option", skip_serializing_if = "Option::is_none")]
    pub generator: Option<BigInt>,
}

/// The election context file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    #[serde(with = "crate::decimal")]
    pub elgamal_public_key: BigInt,

    #[serde(with = "crate::decimal")]
    pub crypto_extended_base_hash: BigInt,

    #[serde(default, with = "crate::decimal::option", skip_serializing_if = "Option::is_none")]
    pub generator: Option<BigInt>,
}

/// The large prime P, the small prime Q, and the Montgomery parameters for P
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constants {
    large_prime: NonZero<BigInt>,
    small_prime: NonZero<BigInt>,
    p_params: DynResidueParams<LIMBS>,
}

impl Constants {
    /// Check that P is odd (needed for Montgomery form) and greater than one, and that Q is
    /// non-zero. Primality is taken on trust from the election record.
    pub fn new(large_prime: BigInt, small_prime: BigInt) -> Result<Self> {
        if large_prime <= BigInt::ONE {
            return Err(Error::InvalidConstants("large prime must be greater than one"));
        }
        if large_prime.as_words()[0] & 1 == 0 {
            return Err(Error::InvalidConstants("large prime must be odd"));
        }
        let small_prime = Option::<NonZero<BigInt>>::from(NonZero::new(small_prime))
            .ok_or(Error::InvalidConstants("small prime must be non-zero"))?;
        let p_params = DynResidueParams::new(&large_prime);
        let large_prime = Option::<NonZero<BigInt>>::from(NonZero::new(large_prime))
            .ok_or(Error::InvalidConstants("large prime must be non-zero"))?;
        return Ok(Self {
            large_prime,
            small_prime,
            p_params,
        });
    }

    pub fn from_record(record: &ConstantsRecord) -> Result<Self> {
        return Self::new(record.large_prime, record.small_prime);
    }

    pub fn get_p(&self) -> &NonZero<BigInt> {
        return &self.large_prime;
    }

    pub fn get_q(&self) -> &NonZero<BigInt> {
        return &self.small_prime;
    }

    /// Z_p^r carrier set: 0 < x < P
    pub fn is_within_set_zrp(&self, x: &BigInt) -> bool {
        return *x > BigInt::ZERO && *x < *self.large_prime;
    }

    /// Z_q: 0 <= x < Q. Unlike Z_p^r, zero is a member
    pub fn is_within_set_zq(&self, x: &BigInt) -> bool {
        return *x < *self.small_prime;
    }

    /// Membership in the order-Q subgroup of Z_p^*: in the carrier set and x ** Q = 1 (mod P)
    pub fn is_within_subgroup(&self, x: &BigInt) -> bool {
        if !self.is_within_set_zrp(x) {
            return false;
        }
        return self.pow_p(x, &self.small_prime).retrieve() == BigInt::ONE;
    }

    /// Lift x into Montgomery form (mod P)
    pub fn residue_p(&self, x: &BigInt) -> DynResidue<LIMBS> {
        return arithmetics::to_residue(x, &self.large_prime, self.p_params);
    }

    /// base ** exp (mod P)
    pub fn pow_p(&self, base: &BigInt, exp: &BigInt) -> DynResidue<LIMBS> {
        return mod_pow(base, exp, &self.large_prime, self.p_params);
    }

    /// a * b (mod P)
    pub fn mul_p(&self, a: &BigInt, b: &BigInt) -> BigInt {
        return self.residue_p(a).mul(&self.residue_p(b)).retrieve();
    }

    /// (a + b) (mod Q)
    pub fn add_q(&self, a: &BigInt, b: &BigInt) -> BigInt {
        return arithmetics::sum_mod(a, b, &self.small_prime);
    }
}

/// Everything the verifier needs to know about one election: the group, the generator g, the
/// joint public key K and the extended base hash Q-bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionContext {
    constants: Constants,
    generator: BigInt,
    public_key: BigInt,
    extended_hash: BigInt,

    /// Also require x ** Q = 1 (mod P) wherever the carrier set Z_p^r is checked
    strict_subgroup: bool,
}

impl ElectionContext {
    /// Instantiate an instance with no check
    pub fn new(
        constants: Constants,
        generator: BigInt,
        public_key: BigInt,
        extended_hash: BigInt,
    ) -> Self {
        return Self {
            constants,
            generator,
            public_key,
            extended_hash,
            strict_subgroup: false,
        };
    }

    /// Combine the constants and the context files. The context's generator wins over the one
    /// in the constants file.
    pub fn from_records(constants: &ConstantsRecord, context: &ContextRecord) -> Result<Self> {
        let generator = context
            .generator
            .or(constants.generator)
            .ok_or(Error::MissingGenerator)?;
        let constants = Constants::from_record(constants)?;
        log::debug!(
            "election context: P has {} bits, Q has {} bits, generator {}",
            constants.get_p().bits(),
            constants.get_q().bits(),
            decimal::format(&generator)
        );
        return Ok(Self::new(
            constants,
            generator,
            context.elgamal_public_key,
            context.crypto_extended_base_hash,
        ));
    }

    pub fn with_strict_subgroup(mut self, strict: bool) -> Self {
        self.strict_subgroup = strict;
        return self;
    }

    pub fn get_constants(&self) -> &Constants {
        return &self.constants;
    }

    pub fn get_generator(&self) -> &BigInt {
        return &self.generator;
    }

    pub fn get_public_key(&self) -> &BigInt {
        return &self.public_key;
    }

    pub fn get_extended_hash(&self) -> &BigInt {
        return &self.extended_hash;
    }

    pub fn is_strict_subgroup(&self) -> bool {
        return self.strict_subgroup;
    }

    /// The membership test applied to every element that should live (mod P)
    pub fn is_group_element(&self, x: &BigInt) -> bool {
        if self.strict_subgroup {
            return self.constants.is_within_subgroup(x);
        }
        return self.constants.is_within_set_zrp(x);
    }

    /// The membership test applied to every challenge and response
    pub fn is_exponent(&self, x: &BigInt) -> bool {
        return self.constants.is_within_set_zq(x);
    }

    /// g ** exp (mod P)
    pub fn g_pow(&self, exp: &BigInt) -> DynResidue<LIMBS> {
        return self.constants.pow_p(&self.generator, exp);
    }

    /// K ** exp (mod P)
    pub fn k_pow(&self, exp: &BigInt) -> DynResidue<LIMBS> {
        return self.constants.pow_p(&self.public_key, exp);
    }
}
