//! One contest: every selection's validity and limit checks, plus the contest's own selection
//! limit. Placeholder selections are the ones that count toward the limit; the number of
//! placeholders may never exceed the contest's limit from the vote limit table.
use crate::{
    context::ElectionContext,
    limits::VoteLimitTable,
    proofs::{constant, Check, CheckResult},
    records::Contest,
    verifier::{ContestReport, SelectionReport, SelectionVerifier},
};
use rayon::prelude::*;

pub struct ContestVerifier<'a> {
    contest: &'a Contest,
    context: &'a ElectionContext,
    limits: &'a VoteLimitTable,
}

impl<'a> ContestVerifier<'a> {
    pub fn new(
        contest: &'a Contest,
        context: &'a ElectionContext,
        limits: &'a VoteLimitTable,
    ) -> Self {
        return Self {
            contest,
            context,
            limits,
        };
    }

    pub fn verify_a_contest(&self) -> bool {
        return self.report().is_valid();
    }

    pub fn report(&self) -> ContestReport {
        let selections: Vec<SelectionReport> = self
            .contest
            .ballot_selections
            .par_iter()
            .map(|selection| SelectionVerifier::new(selection, self.context).report())
            .collect();
        let results = self.check_contest();
        return ContestReport {
            object_id: self.contest.object_id.clone(),
            selections,
            results,
        };
    }

    /// Contest-level checks only: the vote limit, then the accumulation and the constant proof
    /// when the contest carries them
    pub fn check_contest(&self) -> Vec<CheckResult> {
        let contest_id = self.contest.object_id.as_str();
        let limit = self.limits.get(contest_id);
        let mut results = vec![self.check_vote_limit(limit)];

        if self.contest.ciphertext_accumulation.is_none() && self.contest.proof.is_none() {
            return results;
        }
        let accumulation = constant::accumulate(&self.contest.ballot_selections, self.context);
        if let Some(published) = &self.contest.ciphertext_accumulation {
            results.push(CheckResult::from_outcome(
                *published == accumulation,
                Check::Accumulation,
                contest_id,
                String::new,
            ));
        }
        if let Some(proof) = &self.contest.proof {
            results.extend(constant::verify(
                &accumulation,
                proof,
                limit,
                self.context,
                contest_id,
            ));
        }
        return results;
    }

    fn check_vote_limit(&self, limit: Option<u64>) -> CheckResult {
        let contest_id = self.contest.object_id.as_str();
        let Some(limit) = limit else {
            return CheckResult::from_outcome(false, Check::MissingVoteLimit, contest_id, || {
                format!("contest {contest_id} is not in the election description")
            });
        };
        let selected = self.count_selected();
        return CheckResult::from_outcome(selected <= limit, Check::VoteLimit, contest_id, || {
            format!("{selected} selections counted against a limit of {limit}")
        });
    }

    /// Selections counting toward the limit
    pub fn count_selected(&self) -> u64 {
        return self
            .contest
            .ballot_selections
            .iter()
            .filter(|selection| selection.is_placeholder_selection)
            .count() as u64;
    }
}
