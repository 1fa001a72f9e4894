//! Disjunctive Chaum-Pedersen proof that a selection's ciphertext (alpha, beta) encrypts 0 or 1.
//!
//! The prover runs the real protocol on the branch of the true plaintext and simulates the other
//! branch, so that the verifier learns nothing about which is which:
//! commit: (a0, b0), (a1, b1)
//! challenge: c = H(Q-bar, alpha, beta, a0, b0, a1, b1), split as c = c0 + c1 (mod Q)
//! response: v0, v1
//! verify:
//! 1. g ** v0 = a0 * alpha ** c0 and g ** v1 = a1 * alpha ** c1
//! 2. K ** v0 = b0 * beta ** c0
//! 3. g ** c1 * K ** v1 = b1 * beta ** c1
//!
//! Every check runs even after an earlier one failed, so that all failures are reported.
use crate::{
    context::ElectionContext,
    decimal, hash,
    proofs::{check_equation, check_exponents, check_group_elements, Check, CheckResult, Equation},
    records::{Ciphertext, DisjunctiveProof},
    BigInt,
};

/// Recompute the challenge c = H(Q-bar, alpha, beta, a0, b0, a1, b1)
pub fn compute_challenge(
    ciphertext: &Ciphertext,
    proof: &DisjunctiveProof,
    context: &ElectionContext,
) -> BigInt {
    return hash::hash_elems(
        context.get_extended_hash(),
        &[
            &ciphertext.pad,
            &ciphertext.data,
            &proof.proof_zero_pad,
            &proof.proof_zero_data,
            &proof.proof_one_pad,
            &proof.proof_one_data,
        ],
        context.get_constants().get_q(),
    );
}

/// Run every check of the proof, in order: group membership, exponent membership, challenge
/// split, then the equations
pub fn verify(
    ciphertext: &Ciphertext,
    proof: &DisjunctiveProof,
    context: &ElectionContext,
    entity_id: &str,
) -> Vec<CheckResult> {
    let mut results = check_group_elements(
        &[
            ("pad", &ciphertext.pad),
            ("data", &ciphertext.data),
            ("proof_zero_pad", &proof.proof_zero_pad),
            ("proof_zero_data", &proof.proof_zero_data),
            ("proof_one_pad", &proof.proof_one_pad),
            ("proof_one_data", &proof.proof_one_data),
        ],
        context,
        entity_id,
    );
    results.extend(check_exponents(
        &[
            ("proof_zero_challenge", &proof.proof_zero_challenge),
            ("proof_one_challenge", &proof.proof_one_challenge),
            ("proof_zero_response", &proof.proof_zero_response),
            ("proof_one_response", &proof.proof_one_response),
        ],
        context,
        entity_id,
    ));
    results.push(check_challenge_split(ciphertext, proof, context, entity_id));
    results.extend(check_equations(ciphertext, proof, context, entity_id));
    return results;
}

/// c = c0 + c1 (mod Q), with the same Q as the Z_q membership test
fn check_challenge_split(
    ciphertext: &Ciphertext,
    proof: &DisjunctiveProof,
    context: &ElectionContext,
    entity_id: &str,
) -> CheckResult {
    let challenge = compute_challenge(ciphertext, proof, context);
    let expected = context
        .get_constants()
        .add_q(&proof.proof_zero_challenge, &proof.proof_one_challenge);
    return CheckResult::from_outcome(
        challenge == expected,
        Check::ChallengeSplit,
        entity_id,
        || {
            format!(
                "hash gives {}, c0 + c1 gives {}",
                decimal::format(&challenge),
                decimal::format(&expected)
            )
        },
    );
}

fn check_equations(
    ciphertext: &Ciphertext,
    proof: &DisjunctiveProof,
    context: &ElectionContext,
    entity_id: &str,
) -> Vec<CheckResult> {
    let constants = context.get_constants();
    let alpha = &ciphertext.pad;
    let beta = &ciphertext.data;

    // equation 1, once per branch
    let commitment = |pad: &BigInt, challenge: &BigInt, response: &BigInt| {
        let left = context.g_pow(response).retrieve();
        let right = constants
            .residue_p(pad)
            .mul(&constants.pow_p(alpha, challenge))
            .retrieve();
        (left, right)
    };
    let (zero_left, zero_right) = commitment(
        &proof.proof_zero_pad,
        &proof.proof_zero_challenge,
        &proof.proof_zero_response,
    );
    let (one_left, one_right) = commitment(
        &proof.proof_one_pad,
        &proof.proof_one_challenge,
        &proof.proof_one_response,
    );

    // equation 2: K ** v0 = b0 * beta ** c0
    let plaintext_zero_left = context.k_pow(&proof.proof_zero_response).retrieve();
    let plaintext_zero_right = constants
        .residue_p(&proof.proof_zero_data)
        .mul(&constants.pow_p(beta, &proof.proof_zero_challenge))
        .retrieve();

    // equation 3: g ** c1 * K ** v1 = b1 * beta ** c1
    let plaintext_one_left = context
        .g_pow(&proof.proof_one_challenge)
        .mul(&context.k_pow(&proof.proof_one_response))
        .retrieve();
    let plaintext_one_right = constants
        .residue_p(&proof.proof_one_data)
        .mul(&constants.pow_p(beta, &proof.proof_one_challenge))
        .retrieve();

    return vec![
        check_equation(&zero_left, &zero_right, Equation::ZeroCommitment, entity_id),
        check_equation(&one_left, &one_right, Equation::OneCommitment, entity_id),
        check_equation(
            &plaintext_zero_left,
            &plaintext_zero_right,
            Equation::ZeroPlaintext,
            entity_id,
        ),
        check_equation(
            &plaintext_one_left,
            &plaintext_one_right,
            Equation::OnePlaintext,
            entity_id,
        ),
    ];
}
