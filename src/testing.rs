//! Test-only prover over a 512-bit Schnorr group P = kQ + 1 with Q = 2 ** 256 - 189, used to
//! build honest ballots that the verifiers are expected to accept
use crate::{
    arithmetics,
    context::{Constants, ElectionContext},
    decimal, hash,
    proofs::constant,
    records::{Ballot, Ciphertext, ConstantProof, Contest, DisjunctiveProof, Selection},
    BigInt, LIMBS,
};
use crypto_bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    NonZero, RandomMod,
};
use rand::{rngs::StdRng, SeedableRng};

pub const LARGE_PRIME: &str = "6703903964971298549787012499102923063739682910296196688861780721860882015071916387484462614394505507795152709126710465772898852591948661719618459348687403";
pub const SMALL_PRIME: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639747";
pub const GENERATOR: &str = "4941687898102043192186674684424680652255232707789360582778214620381407906402667291098502001186037694417371167216433696611359405141617414800213113274788434";

pub fn constants() -> Constants {
    return Constants::new(
        decimal::parse(LARGE_PRIME).unwrap(),
        decimal::parse(SMALL_PRIME).unwrap(),
    )
    .unwrap();
}

/// A context with a fixed key pair; see [`Fixture`] for one that can also prove
pub fn context() -> ElectionContext {
    return Fixture::new(0).context;
}

pub struct Fixture {
    context: ElectionContext,
    rng: StdRng,
}

impl Fixture {
    /// Seeded so that every test run sees the same ballots
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let constants = constants();
        let generator = decimal::parse(GENERATOR).unwrap();
        let secret = Self::random_nonzero(&mut rng, constants.get_q());
        let public_key = constants.pow_p(&generator, &secret).retrieve();
        let extended_hash = BigInt::random_mod(&mut rng, constants.get_q());
        let context = ElectionContext::new(constants, generator, public_key, extended_hash);
        return Self { context, rng };
    }

    pub fn context(&self) -> &ElectionContext {
        return &self.context;
    }

    fn random_nonzero(rng: &mut StdRng, q: &NonZero<BigInt>) -> BigInt {
        loop {
            let x = BigInt::random_mod(rng, q);
            if x != BigInt::ZERO {
                return x;
            }
        }
    }

    fn nonce(&mut self) -> BigInt {
        let q = *self.context.get_constants().get_q();
        return Self::random_nonzero(&mut self.rng, &q);
    }

    fn q_params(&self) -> DynResidueParams<LIMBS> {
        return DynResidueParams::new(self.context.get_constants().get_q());
    }

    /// a * b + c (mod Q)
    fn mul_add_q(&self, a: &BigInt, b: &BigInt, c: &BigInt) -> BigInt {
        let params = self.q_params();
        let q = self.context.get_constants().get_q();
        let product = DynResidue::new(&arithmetics::modulo(a, q), params)
            .mul(&DynResidue::new(&arithmetics::modulo(b, q), params))
            .retrieve();
        return arithmetics::sum_mod(&product, c, q);
    }

    /// Q - x, so that y ** (Q - x) = y ** (-x) for y in the subgroup
    fn negate_q(&self, x: &BigInt) -> BigInt {
        return self.context.get_constants().get_q().wrapping_sub(x);
    }

    /// (g ** r, g ** m * K ** r)
    pub fn encrypt(&self, vote: u8, nonce: &BigInt) -> Ciphertext {
        let context = &self.context;
        let pad = context.g_pow(nonce).retrieve();
        let data = context
            .g_pow(&BigInt::from_u8(vote))
            .mul(&context.k_pow(nonce))
            .retrieve();
        return Ciphertext { pad, data };
    }

    /// Real branch for the true plaintext, simulated branch for the other one
    pub fn prove_disjunctive(
        &mut self,
        ciphertext: &Ciphertext,
        vote: u8,
        nonce: &BigInt,
    ) -> DisjunctiveProof {
        let (fake_challenge, fake_response, u) = (self.nonce(), self.nonce(), self.nonce());
        let context = self.context.clone();
        let constants = context.get_constants();
        let q = constants.get_q();
        let (alpha, beta) = (&ciphertext.pad, &ciphertext.data);
        let neg_c = self.negate_q(&fake_challenge);

        let real_pad = context.g_pow(&u).retrieve();
        let real_data = context.k_pow(&u).retrieve();
        let fake_pad = context
            .g_pow(&fake_response)
            .mul(&constants.pow_p(alpha, &neg_c))
            .retrieve();

        let (zero_pad, zero_data, one_pad, one_data) = if vote == 0 {
            let one_data = context
                .k_pow(&fake_response)
                .mul(&context.g_pow(&fake_challenge))
                .mul(&constants.pow_p(beta, &neg_c))
                .retrieve();
            (real_pad, real_data, fake_pad, one_data)
        } else {
            let zero_data = context
                .k_pow(&fake_response)
                .mul(&constants.pow_p(beta, &neg_c))
                .retrieve();
            (fake_pad, zero_data, real_pad, real_data)
        };

        let challenge = hash::hash_elems(
            context.get_extended_hash(),
            &[alpha, beta, &zero_pad, &zero_data, &one_pad, &one_data],
            q,
        );
        let real_challenge = arithmetics::difference_mod(&challenge, &fake_challenge, q);
        let real_response = self.mul_add_q(&real_challenge, nonce, &u);

        let (zero_challenge, one_challenge, zero_response, one_response) = if vote == 0 {
            (real_challenge, fake_challenge, real_response, fake_response)
        } else {
            (fake_challenge, real_challenge, fake_response, real_response)
        };
        return DisjunctiveProof {
            proof_zero_pad: zero_pad,
            proof_zero_data: zero_data,
            proof_one_pad: one_pad,
            proof_one_data: one_data,
            proof_zero_challenge: zero_challenge,
            proof_one_challenge: one_challenge,
            proof_zero_response: zero_response,
            proof_one_response: one_response,
        };
    }

    pub fn encrypt_with_proof(&mut self, vote: u8) -> (Ciphertext, DisjunctiveProof) {
        let (ciphertext, proof, _) = self.encrypt_with_nonce(vote);
        return (ciphertext, proof);
    }

    fn encrypt_with_nonce(&mut self, vote: u8) -> (Ciphertext, DisjunctiveProof, BigInt) {
        let nonce = self.nonce();
        let ciphertext = self.encrypt(vote, &nonce);
        let proof = self.prove_disjunctive(&ciphertext, vote, &nonce);
        return (ciphertext, proof, nonce);
    }

    pub fn selection(&mut self, object_id: &str, vote: u8, placeholder: bool) -> Selection {
        let (ciphertext, proof) = self.encrypt_with_proof(vote);
        return Selection {
            object_id: object_id.to_string(),
            ciphertext,
            proof,
            is_placeholder_selection: placeholder,
        };
    }

    /// One selection per vote, then `placeholders` placeholder selections each set to 1. With
    /// `with_proof` the contest also carries its accumulation and a constant proof of the total.
    pub fn contest(
        &mut self,
        object_id: &str,
        votes: &[u8],
        placeholders: usize,
        with_proof: bool,
    ) -> Contest {
        let mut selections = vec![];
        let mut nonce_sum = BigInt::ZERO;
        let mut total = 0u64;
        let slots = votes
            .iter()
            .map(|vote| (*vote, false))
            .chain((0..placeholders).map(|_| (1u8, true)));
        for (i, (vote, placeholder)) in slots.enumerate() {
            let (ciphertext, proof, nonce) = self.encrypt_with_nonce(vote);
            nonce_sum = self
                .context
                .get_constants()
                .add_q(&nonce_sum, &nonce);
            total += vote as u64;
            selections.push(Selection {
                object_id: format!("{object_id}-selection-{i}"),
                ciphertext,
                proof,
                is_placeholder_selection: placeholder,
            });
        }

        let mut contest = Contest {
            object_id: object_id.to_string(),
            ballot_selections: selections,
            ciphertext_accumulation: None,
            proof: None,
        };
        if with_proof {
            let accumulation = constant::accumulate(&contest.ballot_selections, &self.context);
            let proof = self.prove_constant(&accumulation, &nonce_sum, total);
            contest.ciphertext_accumulation = Some(accumulation);
            contest.proof = Some(proof);
        }
        return contest;
    }

    pub fn prove_constant(
        &mut self,
        accumulation: &Ciphertext,
        nonce_sum: &BigInt,
        total: u64,
    ) -> ConstantProof {
        let u = self.nonce();
        let pad = self.context.g_pow(&u).retrieve();
        let data = self.context.k_pow(&u).retrieve();
        let challenge = hash::hash_elems(
            self.context.get_extended_hash(),
            &[&accumulation.pad, &accumulation.data, &pad, &data],
            self.context.get_constants().get_q(),
        );
        let response = self.mul_add_q(&challenge, nonce_sum, &u);
        return ConstantProof {
            pad,
            data,
            challenge,
            response,
            constant: BigInt::from_u64(total),
        };
    }

    pub fn ballot(&self, object_id: &str, contests: Vec<Contest>) -> Ballot {
        return Ballot {
            object_id: object_id.to_string(),
            contests,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sanity check of the hard-coded group: both moduli are prime, Q divides P - 1 and the
    /// generator has order Q
    #[test]
    fn test_group_is_well_formed() {
        let p = decimal::parse(LARGE_PRIME).unwrap();
        let q = decimal::parse(SMALL_PRIME).unwrap();
        assert!(crypto_primes::is_prime(&q));
        assert!(crypto_primes::is_prime(&p));
        let q_nz = NonZero::new(q).unwrap();
        assert_eq!(p.wrapping_sub(&BigInt::ONE) % q_nz, BigInt::ZERO);

        let context = context();
        assert_ne!(*context.get_generator(), BigInt::ONE);
        assert_eq!(context.g_pow(&q).retrieve(), BigInt::ONE);
    }
}
