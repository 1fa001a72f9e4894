//! One ballot: every contest, then a single verdict line
use crate::{
    context::ElectionContext,
    limits::VoteLimitTable,
    records::Ballot,
    verifier::{BallotReport, ContestReport, ContestVerifier},
};
use rayon::prelude::*;

pub struct BallotVerifier<'a> {
    ballot: &'a Ballot,
    context: &'a ElectionContext,
    limits: &'a VoteLimitTable,
}

impl<'a> BallotVerifier<'a> {
    pub fn new(ballot: &'a Ballot, context: &'a ElectionContext, limits: &'a VoteLimitTable) -> Self {
        return Self {
            ballot,
            context,
            limits,
        };
    }

    /// True iff every contest checks out. Logs one verdict line for the ballot.
    pub fn verify_all_contests(&self) -> bool {
        let report = self.report();
        if report.is_valid() {
            log::info!("{}", report.summary());
        } else {
            log::warn!("{}", report.summary());
        }
        return report.is_valid();
    }

    pub fn report(&self) -> BallotReport {
        let contests: Vec<ContestReport> = self
            .ballot
            .contests
            .par_iter()
            .map(|contest| ContestVerifier::new(contest, self.context, self.limits).report())
            .collect();
        return BallotReport {
            object_id: self.ballot.object_id.clone(),
            contests,
        };
    }
}

/// Verify independent ballots side by side; reports come back in input order
pub fn verify_ballots(
    ballots: &[Ballot],
    context: &ElectionContext,
    limits: &VoteLimitTable,
) -> Vec<BallotReport> {
    return ballots
        .par_iter()
        .map(|ballot| BallotVerifier::new(ballot, context, limits).report())
        .collect();
}
