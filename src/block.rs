//! Block structure and proof-of-work sealing

use crate::hasher;
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// Sentinel `previous_hash` carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    /// Unix milliseconds.
    pub timestamp: i64,
    pub transactions: Vec<Transaction>,
    pub previous_hash: String,
    pub nonce: u64,
    pub hash: String,
}

impl Block {
    pub fn new(index: u64, transactions: Vec<Transaction>, previous_hash: String) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let mut block = Block {
            index,
            timestamp,
            transactions,
            previous_hash,
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.calculate_hash();
        block
    }

    /// Recompute the content hash from the block's current fields.
    ///
    /// The transaction list is serialized to canonical JSON so that any
    /// post-seal tampering with a transaction changes the digest.
    pub fn calculate_hash(&self) -> String {
        let transactions = serde_json::to_string(&self.transactions)
            .expect("transaction list always serializes to JSON");
        hasher::digest(&format!(
            "{}:{}:{}:{}:{}",
            self.index, self.previous_hash, self.timestamp, transactions, self.nonce
        ))
    }

    /// Whether the stored hash satisfies the leading-zeros difficulty
    /// predicate.
    pub fn meets_difficulty(&self, difficulty: u32) -> bool {
        self.hash.starts_with(&"0".repeat(difficulty as usize))
    }

    /// Search for a nonce whose digest carries `difficulty` leading zero
    /// characters, mutating `nonce` and `hash` in place.
    ///
    /// This is a blocking, non-cancellable call with no upper bound on the
    /// search; at the difficulties this crate uses it completes in
    /// milliseconds. Callers that need cancellation should use
    /// [`crate::miner::seal_with_cancel`] instead.
    pub fn seal(&mut self, difficulty: u32) {
        let target = "0".repeat(difficulty as usize);
        while !self.hash.starts_with(&target) {
            self.nonce += 1;
            self.hash = self.calculate_hash();
        }
    }
}
