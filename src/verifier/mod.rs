//! Ballot correctness: every selection is an encryption of 0 or 1, and every contest respects its
//! selection limit. Verification nests ballot -> contest -> selection; each level runs all of its
//! checks and reports all of its failures, and the verdict is the AND of everything below.

pub mod ballot;
pub mod contest;
pub mod selection;

pub use ballot::{verify_ballots, BallotVerifier};
pub use contest::ContestVerifier;
pub use selection::SelectionVerifier;

pub use crate::proofs::{Check, CheckFailure, CheckResult, Equation};
use crate::proofs::all_passed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionReport {
    pub object_id: String,
    pub is_placeholder: bool,
    pub results: Vec<CheckResult>,
}

impl SelectionReport {
    pub fn is_valid(&self) -> bool {
        return all_passed(&self.results);
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        return self.results.iter().filter_map(CheckResult::failure);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestReport {
    pub object_id: String,
    pub selections: Vec<SelectionReport>,

    /// Contest-level checks: vote limit, accumulation and the constant proof
    pub results: Vec<CheckResult>,
}

impl ContestReport {
    pub fn is_valid(&self) -> bool {
        return all_passed(&self.results) && self.selections.iter().all(SelectionReport::is_valid);
    }

    /// Selection failures first, in selection order, then the contest's own
    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        return self
            .selections
            .iter()
            .flat_map(SelectionReport::failures)
            .chain(self.results.iter().filter_map(CheckResult::failure));
    }

    /// The selections that failed any check
    pub fn failed_selections(&self) -> impl Iterator<Item = &SelectionReport> {
        return self.selections.iter().filter(|selection| !selection.is_valid());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotReport {
    pub object_id: String,
    pub contests: Vec<ContestReport>,
}

impl BallotReport {
    pub fn is_valid(&self) -> bool {
        return self.contests.iter().all(ContestReport::is_valid);
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        return self.contests.iter().flat_map(ContestReport::failures);
    }

    /// One line per ballot
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return format!("{} ballot correctness verification success.", self.object_id);
        }
        return format!("{} ballot correctness verification failure.", self.object_id);
    }
}
