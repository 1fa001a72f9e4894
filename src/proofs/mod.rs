//! Non-interactive proofs carried by an encrypted ballot, and the vocabulary of checks the
//! verifiers report on. There are two kinds of proofs:

pub mod constant; // the accumulated contest ciphertext encrypts the vote limit
pub mod disjunctive; // a selection encrypts 0 or 1

use crate::{arithmetics, context::ElectionContext, BigInt};
use std::fmt;

/// One of the algebraic identities a verifier recomputes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equation {
    /// g ** v0 = a0 * alpha ** c0
    ZeroCommitment,
    /// g ** v1 = a1 * alpha ** c1
    OneCommitment,
    /// K ** v0 = b0 * beta ** c0
    ZeroPlaintext,
    /// g ** c1 * K ** v1 = b1 * beta ** c1
    OnePlaintext,
    /// g ** v = a * A ** c
    ConstantCommitment,
    /// g ** (c * L) * K ** v = b * B ** c
    ConstantPlaintext,
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ZeroCommitment => "equation 1 (branch 0): g^v0 = a0 * alpha^c0",
            Self::OneCommitment => "equation 1 (branch 1): g^v1 = a1 * alpha^c1",
            Self::ZeroPlaintext => "equation 2: K^v0 = b0 * beta^c0",
            Self::OnePlaintext => "equation 3: g^c1 * K^v1 = b1 * beta^c1",
            Self::ConstantCommitment => "constant proof equation: g^v = a * A^c",
            Self::ConstantPlaintext => "constant proof equation: g^(cL) * K^v = b * B^c",
        };
        f.write_str(text)
    }
}

/// The name of a single check, independent of the entity it ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// The named field is not in Z_p^r (or the subgroup, in strict mode)
    GroupMembership(&'static str),
    /// The named field is not in Z_q
    ExponentMembership(&'static str),
    /// c != c0 + c1 (mod Q)
    ChallengeSplit,
    /// The proof's challenge is not the hash of its inputs
    ChallengeHash,
    Equation(Equation),
    /// The selection's own pad or data fails the limit check's Z_p^r test
    SelectionLimit(&'static str),
    /// More selections count toward the limit than the contest allows
    VoteLimit,
    /// The contest is not in the vote limit table
    MissingVoteLimit,
    /// The published accumulation is not the product of the selections
    Accumulation,
    /// The constant of the contest proof is not the vote limit
    ProofConstant,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupMembership(field) => write!(f, "{field} is not in set Zrp"),
            Self::ExponentMembership(field) => write!(f, "{field} is not in set Zq"),
            Self::ChallengeSplit => f.write_str("challenge value error"),
            Self::ChallengeHash => f.write_str("challenge hash error"),
            Self::Equation(equation) => write!(f, "{equation} does not hold"),
            Self::SelectionLimit(field) => write!(f, "selection {field} value error"),
            Self::VoteLimit => f.write_str("vote limit exceeded"),
            Self::MissingVoteLimit => f.write_str("no vote limit for contest"),
            Self::Accumulation => f.write_str("ciphertext accumulation mismatch"),
            Self::ProofConstant => f.write_str("proof constant is not the vote limit"),
        }
    }
}

/// A failed check, attached to the entity it failed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub check: Check,
    pub entity_id: String,
    pub detail: String,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity_id, self.check)?;
        if !self.detail.is_empty() {
            write!(f, " ({})", self.detail)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed(Check),
    Failed(CheckFailure),
}

impl CheckResult {
    /// Turn a boolean outcome into a result; the detail is only rendered on failure
    pub fn from_outcome<F>(passed: bool, check: Check, entity_id: &str, detail: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if passed {
            return Self::Passed(check);
        }
        return Self::Failed(CheckFailure {
            check,
            entity_id: entity_id.to_string(),
            detail: detail(),
        });
    }

    pub fn passed(&self) -> bool {
        return matches!(self, Self::Passed(_));
    }

    pub fn check(&self) -> Check {
        match self {
            Self::Passed(check) => *check,
            Self::Failed(failure) => failure.check,
        }
    }

    pub fn failure(&self) -> Option<&CheckFailure> {
        match self {
            Self::Passed(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Logical AND over a list of results; every result has already been computed
pub fn all_passed(results: &[CheckResult]) -> bool {
    return results.iter().all(CheckResult::passed);
}

/// Z_p^r (or subgroup) membership of every named element
pub(crate) fn check_group_elements(
    fields: &[(&'static str, &BigInt)],
    context: &ElectionContext,
    entity_id: &str,
) -> Vec<CheckResult> {
    return fields
        .iter()
        .map(|&(name, value)| {
            CheckResult::from_outcome(
                context.is_group_element(value),
                Check::GroupMembership(name),
                entity_id,
                String::new,
            )
        })
        .collect();
}

/// Z_q membership of every named challenge or response
pub(crate) fn check_exponents(
    fields: &[(&'static str, &BigInt)],
    context: &ElectionContext,
    entity_id: &str,
) -> Vec<CheckResult> {
    return fields
        .iter()
        .map(|&(name, value)| {
            CheckResult::from_outcome(
                context.is_exponent(value),
                Check::ExponentMembership(name),
                entity_id,
                String::new,
            )
        })
        .collect();
}

/// Compare both sides of an identity (mod P)
pub(crate) fn check_equation(
    left: &BigInt,
    right: &BigInt,
    equation: Equation,
    entity_id: &str,
) -> CheckResult {
    return CheckResult::from_outcome(
        arithmetics::equals(left, right),
        Check::Equation(equation),
        entity_id,
        String::new,
    );
}
