//! Typed records of the encrypted ballots. Field names follow the published JSON, every big
//! integer is a decimal string.
use crate::BigInt;
use serde::{Deserialize, Serialize};

/// An ElGamal ciphertext (alpha, beta) = (g ** r, g ** m * K ** r)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    #[serde(with = "crate::decimal")]
    pub pad: BigInt,

    #[serde(with = "crate::decimal")]
    pub data: BigInt,
}

/// Disjunctive Chaum-Pedersen proof that a ciphertext encrypts 0 or 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisjunctiveProof {
    /// a0
    #[serde(with = "crate::decimal")]
    pub proof_zero_pad: BigInt,

    /// b0
    #[serde(with = "crate::decimal")]
    pub proof_zero_data: BigInt,

    /// a1
    #[serde(with = "crate::decimal")]
    pub proof_one_pad: BigInt,

    /// b1
    #[serde(with = "crate::decimal")]
    pub proof_one_data: BigInt,

    /// c0
    #[serde(with = "crate::decimal")]
    pub proof_zero_challenge: BigInt,

    /// c1
    #[serde(with = "crate::decimal")]
    pub proof_one_challenge: BigInt,

    /// v0
    #[serde(with = "crate::decimal")]
    pub proof_zero_response: BigInt,

    /// v1
    #[serde(with = "crate::decimal")]
    pub proof_one_response: BigInt,
}

/// Constant Chaum-Pedersen proof that the accumulated contest ciphertext encrypts `constant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantProof {
    #[serde(with = "crate::decimal")]
    pub pad: BigInt,

    #[serde(with = "crate::decimal")]
    pub data: BigInt,

    #[serde(with = "crate::decimal")]
    pub challenge: BigInt,

    #[serde(with = "crate::decimal")]
    pub response: BigInt,

    #[serde(with = "crate::decimal")]
    pub constant: BigInt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub object_id: String,
    pub ciphertext: Ciphertext,
    pub proof: DisjunctiveProof,

    /// Placeholders pad a contest to a fixed number of slots; they are verified like any other
    /// selection
    #[serde(default)]
    pub is_placeholder_selection: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub object_id: String,
    pub ballot_selections: Vec<Selection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphertext_accumulation: Option<Ciphertext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<ConstantProof>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pub object_id: String,
    pub contests: Vec<Contest>,
}
