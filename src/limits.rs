//! Vote limits per contest, taken from the election description
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The part of the election description the verifier cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionDescription {
    pub contests: Vec<ContestDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestDescription {
    pub object_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes_allowed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_elected: Option<u64>,
}

impl ContestDescription {
    /// `votes_allowed`, or `number_elected` when the description leaves it out
    pub fn get_vote_limit(&self) -> Option<u64> {
        return self.votes_allowed.or(self.number_elected);
    }
}

/// Contest identifier to the maximum number of selections a voter may make
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLimitTable {
    limits: HashMap<String, u64>,
}

impl VoteLimitTable {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Contests without any limit are left out, so that verifying them reports the missing limit
    pub fn from_description(description: &ElectionDescription) -> Self {
        let mut table = Self::new();
        for contest in description.contests.iter() {
            match contest.get_vote_limit() {
                Some(limit) => table.insert(&contest.object_id, limit),
                None => log::warn!("contest {} has no vote limit", contest.object_id),
            }
        }
        return table;
    }

    pub fn insert(&mut self, contest_id: &str, limit: u64) {
        self.limits.insert(contest_id.to_string(), limit);
    }

    pub fn get(&self, contest_id: &str) -> Option<u64> {
        return self.limits.get(contest_id).copied();
    }

    pub fn len(&self) -> usize {
        return self.limits.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.limits.is_empty();
    }
}

impl<'a> FromIterator<(&'a str, u64)> for VoteLimitTable {
    fn from_iter<T: IntoIterator<Item = (&'a str, u64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (contest_id, limit) in iter {
            table.insert(contest_id, limit);
        }
        return table;
    }
}
