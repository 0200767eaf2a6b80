//! Simple balance contract: a deposit/withdraw box with a history log

use crate::error::{ChainError, Result};
use crate::hasher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    /// Depositor for deposits, recipient for withdrawals.
    pub counterparty: String,
    pub amount: u64,
    pub timestamp: i64,
}

#[derive(Debug, Clone)]
pub struct SimpleBalance {
    pub owner: String,
    pub address: String,
    balance: u64,
    history: Vec<HistoryEntry>,
}

impl SimpleBalance {
    pub fn new(owner: &str, initial_balance: u64) -> Self {
        let address = hasher::digest(&format!(
            "simple:{}:{}",
            owner,
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        SimpleBalance {
            owner: owner.to_string(),
            address,
            balance: initial_balance,
            history: Vec::new(),
        }
    }

    pub fn deposit(&mut self, from: &str, amount: u64) {
        self.balance += amount;
        self.history.push(HistoryEntry {
            kind: EntryKind::Deposit,
            counterparty: from.to_string(),
            amount,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
    }

    /// Debit the balance, or reject with no mutation when underfunded.
    /// Insufficient funds is a reportable condition, not a fault.
    pub fn withdraw(&mut self, to: &str, amount: u64) -> Result<()> {
        if self.balance < amount {
            return Err(ChainError::InsufficientFunds {
                have: self.balance,
                need: amount,
            });
        }
        self.balance -= amount;
        self.history.push(HistoryEntry {
            kind: EntryKind::Withdraw,
            counterparty: to.to_string(),
            amount,
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
        Ok(())
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
