//! Mining drivers
//!
//! [`crate::block::Block::seal`] is an unbounded search with no cancellation
//! contract of its own. This module layers the two things integrations
//! actually want on top of it: a miner identity that seals a ledger's
//! pending pool toward its own address, and a cooperative-cancellation
//! wrapper for embedders that cannot afford an open-ended block.

use crate::block::Block;
use crate::ledger::Ledger;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// A mining identity: seals pending blocks and collects the reward.
#[derive(Debug, Clone)]
pub struct Miner {
    pub beneficiary: String,
}

impl Miner {
    pub fn new(beneficiary: &str) -> Self {
        Miner {
            beneficiary: beneficiary.to_string(),
        }
    }

    /// Seal the ledger's pending pool, crediting this miner's address with
    /// the next reward payout.
    pub fn mine<'a>(&self, ledger: &'a mut Ledger) -> &'a Block {
        let block = ledger.seal_pending_block(&self.beneficiary);
        info!("Miner {} sealed block #{}", self.beneficiary, block.index);
        block
    }
}

/// Nonce search with a cooperative cancellation check each iteration.
///
/// Returns `true` once the block is sealed. Returns `false` if `cancel` was
/// raised first; the block is left unsealed with whatever nonce the search
/// had reached, and the caller should discard or re-seal it.
pub fn seal_with_cancel(block: &mut Block, difficulty: u32, cancel: &AtomicBool) -> bool {
    let target = "0".repeat(difficulty as usize);
    while !block.hash.starts_with(&target) {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        block.nonce += 1;
        block.hash = block.calculate_hash();
    }
    true
}
