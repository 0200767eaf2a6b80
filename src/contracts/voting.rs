//! Voting contract: one vote per voter id, tally by candidate

use crate::error::{ChainError, Result};
use crate::hasher;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Voting {
    pub name: String,
    pub address: String,
    votes: HashMap<String, u64>,
    voters: HashSet<String>,
}

impl Voting {
    pub fn new(name: &str) -> Self {
        let address = hasher::digest(&format!(
            "voting:{}:{}",
            name,
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        Voting {
            name: name.to_string(),
            address,
            votes: HashMap::new(),
            voters: HashSet::new(),
        }
    }

    /// Record a vote, rejecting repeat voters with the tally untouched.
    pub fn vote(&mut self, candidate: &str, voter: &str) -> Result<()> {
        if self.voters.contains(voter) {
            return Err(ChainError::AlreadyVoted(voter.to_string()));
        }
        self.voters.insert(voter.to_string());
        *self.votes.entry(candidate.to_string()).or_insert(0) += 1;
        Ok(())
    }

    pub fn tally(&self) -> &HashMap<String, u64> {
        &self.votes
    }

    pub fn voters(&self) -> &HashSet<String> {
        &self.voters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_accumulate_per_candidate() {
        let mut voting = Voting::new("election");
        voting.vote("alice", "bob").unwrap();
        voting.vote("alice", "carol").unwrap();
        voting.vote("dave", "erin").unwrap();
        assert_eq!(voting.tally()["alice"], 2);
        assert_eq!(voting.tally()["dave"], 1);
        assert_eq!(voting.voters().len(), 3);
    }

    #[test]
    fn test_repeat_voter_is_a_tally_noop() {
        let mut voting = Voting::new("election");
        voting.vote("alice", "bob").unwrap();

        // Second ballot rejected regardless of candidate.
        assert_eq!(
            voting.vote("dave", "bob").unwrap_err(),
            ChainError::AlreadyVoted("bob".to_string())
        );
        assert_eq!(voting.tally()["alice"], 1);
        assert!(!voting.tally().contains_key("dave"));
        assert_eq!(voting.voters().len(), 1);
    }
}
