//! Transaction records
//!
//! A transaction is immutable once constructed: its id is a digest of every
//! other field, so any later mutation would be visible as an id mismatch
//! (and, once sealed into a block, as a block-hash mismatch during chain
//! verification).

use crate::hasher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// `None` only for reward payouts minted by the ledger at seal time.
    pub from: Option<String>,
    pub to: String,
    pub amount: u64,
    pub message: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl Transaction {
    pub fn new(from: &str, to: &str, amount: u64, message: &str) -> Self {
        Self::build(Some(from.to_string()), to.to_string(), amount, message.to_string())
    }

    /// Synthetic payout crediting the miner. Only the ledger's sealing path
    /// may construct a transaction with no sender.
    pub(crate) fn reward(to: &str, amount: u64) -> Self {
        Self::build(None, to.to_string(), amount, "Reward for mining".to_string())
    }

    fn build(from: Option<String>, to: String, amount: u64, message: String) -> Self {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let id = hasher::digest(&format!(
            "{}:{}:{}:{}:{}",
            from.as_deref().unwrap_or(""),
            to,
            amount,
            message,
            timestamp
        ));
        Transaction {
            id,
            from,
            to,
            amount,
            message,
            timestamp,
        }
    }

    pub fn is_reward(&self) -> bool {
        self.from.is_none()
    }
}
