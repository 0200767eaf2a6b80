//! Chain and pending-pool management
//!
//! The ledger owns the block chain, the pool of not-yet-sealed transactions,
//! and the registered node set. Balances are never stored: `balance_of`
//! replays the whole chain on every call, which is O(total transactions) and
//! fine at this crate's scale.
//!
//! A `Ledger` assumes a single mutator at a time. Embedders that share one
//! across threads must put it behind their own exclusive lock; sealing is
//! CPU-bound and should stay off any request-handling thread.

use crate::block::{Block, GENESIS_PREVIOUS_HASH};
use crate::config::Config;
use crate::error::{ChainError, Result};
use crate::transaction::Transaction;
use tracing::info;

pub const DEFAULT_DIFFICULTY: u32 = 2;
pub const DEFAULT_MINING_REWARD: u64 = 100;

pub struct Ledger {
    /// `chain[0]` is always the genesis block; never empty.
    pub chain: Vec<Block>,
    pub difficulty: u32,
    /// Submitted transactions awaiting the next seal, in submission order.
    pub pending: Vec<Transaction>,
    pub mining_reward: u64,
    nodes: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_params(DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD)
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_params(config.ledger.difficulty, config.ledger.mining_reward)
    }

    fn with_params(difficulty: u32, mining_reward: u64) -> Self {
        let genesis = Block::new(0, vec![], GENESIS_PREVIOUS_HASH.to_string());
        Ledger {
            chain: vec![genesis],
            difficulty: difficulty.max(1),
            pending: Vec::new(),
            mining_reward,
            nodes: Vec::new(),
        }
    }

    pub fn latest_block(&self) -> &Block {
        self.chain.last().expect("chain always holds a genesis block")
    }

    /// Queue a transaction for the next sealed block.
    ///
    /// Reward payouts never pass through here; a missing sender is a
    /// rejected precondition at this entry point.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<()> {
        match tx.from.as_deref() {
            None | Some("") => {
                return Err(ChainError::InvalidTransaction(
                    "transaction must include a from address".to_string(),
                ))
            }
            Some(_) => {}
        }
        if tx.to.is_empty() {
            return Err(ChainError::InvalidTransaction(
                "transaction must include a to address".to_string(),
            ));
        }
        if tx.amount == 0 {
            return Err(ChainError::InvalidTransaction(
                "transaction amount must be greater than 0".to_string(),
            ));
        }
        self.pending.push(tx);
        Ok(())
    }

    /// Seal the pending pool into a new block via proof-of-work, append it,
    /// and reset the pool to a single reward payout for `reward_address`.
    ///
    /// Blocking for the duration of the nonce search (see [`Block::seal`]).
    pub fn seal_pending_block(&mut self, reward_address: &str) -> &Block {
        let mut block = Block::new(
            self.chain.len() as u64,
            std::mem::take(&mut self.pending),
            self.latest_block().hash.clone(),
        );
        block.seal(self.difficulty);
        info!(
            "Sealed block #{} with {} tx(s): {}",
            block.index,
            block.transactions.len(),
            block.hash
        );
        self.chain.push(block);
        self.pending = vec![Transaction::reward(reward_address, self.mining_reward)];
        self.latest_block()
    }

    /// Net balance of an address, derived by replaying every sealed block.
    ///
    /// Pending transactions are not counted; a reward only materializes once
    /// the block carrying it is sealed.
    pub fn balance_of(&self, address: &str) -> i64 {
        let mut balance: i64 = 0;
        for block in &self.chain {
            for tx in &block.transactions {
                if tx.from.as_deref() == Some(address) {
                    balance -= tx.amount as i64;
                }
                if tx.to == address {
                    balance += tx.amount as i64;
                }
            }
        }
        balance
    }

    /// Verify stored-hash consistency and previous-hash linkage for every
    /// adjacent block pair. Detection only: no repair, no diagnosis of which
    /// block failed.
    pub fn is_valid(&self) -> bool {
        for pair in self.chain.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.hash != current.calculate_hash() {
                return false;
            }
            if current.previous_hash != previous.hash {
                return false;
            }
        }
        true
    }

    /// Idempotent, insertion-ordered node registration.
    pub fn register_node(&mut self, address: &str) {
        if !self.nodes.iter().any(|n| n == address) {
            self.nodes.push(address.to_string());
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
