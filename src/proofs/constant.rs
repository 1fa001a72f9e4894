//! Constant Chaum-Pedersen proof that the accumulated contest ciphertext (A, B), the product of
//! every selection's ciphertext, encrypts exactly the vote limit L. Together with the disjunctive
//! proofs this shows that exactly L of the contest's slots (real or placeholder) are set.
//! commit: (a, b)
//! challenge: c = H(Q-bar, A, B, a, b)
//! response: v
//! verify: g ** v = a * A ** c and g ** (c * L) * K ** v = b * B ** c
use crate::{
    context::ElectionContext,
    decimal, hash,
    proofs::{check_equation, check_exponents, check_group_elements, Check, CheckResult, Equation},
    records::{Ciphertext, ConstantProof, Selection},
    BigInt,
};

/// Component-wise product of all selection ciphertexts (mod P)
pub fn accumulate(selections: &[Selection], context: &ElectionContext) -> Ciphertext {
    let constants = context.get_constants();
    let one = constants.residue_p(&BigInt::ONE);
    let (pad, data) = selections.iter().fold((one, one), |(pad, data), selection| {
        (
            pad.mul(&constants.residue_p(&selection.ciphertext.pad)),
            data.mul(&constants.residue_p(&selection.ciphertext.data)),
        )
    });
    return Ciphertext {
        pad: pad.retrieve(),
        data: data.retrieve(),
    };
}

/// Run every check of the proof against the accumulation. The constant is only compared with the
/// vote limit when the limit is known.
pub fn verify(
    accumulation: &Ciphertext,
    proof: &ConstantProof,
    vote_limit: Option<u64>,
    context: &ElectionContext,
    entity_id: &str,
) -> Vec<CheckResult> {
    let constants = context.get_constants();
    let mut results = check_group_elements(
        &[("proof pad", &proof.pad), ("proof data", &proof.data)],
        context,
        entity_id,
    );
    results.extend(check_exponents(
        &[
            ("proof challenge", &proof.challenge),
            ("proof response", &proof.response),
        ],
        context,
        entity_id,
    ));

    if let Some(limit) = vote_limit {
        let limit = BigInt::from_u64(limit);
        results.push(CheckResult::from_outcome(
            proof.constant == limit,
            Check::ProofConstant,
            entity_id,
            || {
                format!(
                    "constant {}, limit {}",
                    decimal::format(&proof.constant),
                    decimal::format(&limit)
                )
            },
        ));
    }

    let challenge = hash::hash_elems(
        context.get_extended_hash(),
        &[&accumulation.pad, &accumulation.data, &proof.pad, &proof.data],
        constants.get_q(),
    );
    results.push(CheckResult::from_outcome(
        challenge == proof.challenge,
        Check::ChallengeHash,
        entity_id,
        || {
            format!(
                "hash gives {}, proof carries {}",
                decimal::format(&challenge),
                decimal::format(&proof.challenge)
            )
        },
    ));

    // g ** v = a * A ** c
    let commitment_left = context.g_pow(&proof.response).retrieve();
    let commitment_right = constants
        .residue_p(&proof.pad)
        .mul(&constants.pow_p(&accumulation.pad, &proof.challenge))
        .retrieve();
    results.push(check_equation(
        &commitment_left,
        &commitment_right,
        Equation::ConstantCommitment,
        entity_id,
    ));

    // g ** (c * L) * K ** v = b * B ** c, with g ** (c * L) computed as (g ** c) ** L
    let g_c = context.g_pow(&proof.challenge).retrieve();
    let plaintext_left = constants
        .pow_p(&g_c, &proof.constant)
        .mul(&context.k_pow(&proof.response))
        .retrieve();
    let plaintext_right = constants
        .residue_p(&proof.data)
        .mul(&constants.pow_p(&accumulation.data, &proof.challenge))
        .retrieve();
    results.push(check_equation(
        &plaintext_left,
        &plaintext_right,
        Equation::ConstantPlaintext,
        entity_id,
    ));

    return results;
}
