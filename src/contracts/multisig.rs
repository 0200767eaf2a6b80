//! Multisig escrow contract: proposals execute exactly once at quorum

use crate::error::{ChainError, Result};
use crate::hasher;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Pending,
    Executed,
    /// Quorum was reached but the balance could not cover the amount.
    /// Settled proposals are never re-armed.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Proposal {
    pub to: String,
    pub amount: u64,
    pub approvals: HashSet<String>,
    pub status: ProposalStatus,
}

/// What an accepted approval call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Approval counted (or repeated); quorum not yet reached.
    Recorded,
    /// Quorum reached and the withdrawal was debited, exactly once.
    Executed,
    /// Quorum reached but the escrow could not cover the amount.
    InsufficientFunds,
    /// The proposal was already settled; the approval had no effect.
    AlreadySettled,
}

#[derive(Debug, Clone)]
pub struct MultisigEscrow {
    pub address: String,
    owners: Vec<String>,
    required: usize,
    balance: u64,
    proposals: HashMap<String, Proposal>,
    /// Disambiguates proposal ids created within the same millisecond.
    proposal_seq: u64,
}

impl MultisigEscrow {
    pub fn new(owners: Vec<String>, required: usize) -> Result<Self> {
        if required == 0 {
            return Err(ChainError::InvalidContract(
                "multisig requires at least one approval".to_string(),
            ));
        }
        if required > owners.len() {
            return Err(ChainError::InvalidContract(format!(
                "quorum of {} exceeds {} owner(s)",
                required,
                owners.len()
            )));
        }
        let address = hasher::digest(&format!(
            "multisig:{}:{}",
            owners.join(","),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        Ok(MultisigEscrow {
            address,
            owners,
            required,
            balance: 0,
            proposals: HashMap::new(),
            proposal_seq: 0,
        })
    }

    pub fn deposit(&mut self, _from: &str, amount: u64) {
        self.balance += amount;
    }

    /// Open a withdrawal proposal with an empty approval set and return its
    /// unique id.
    pub fn propose_withdrawal(&mut self, to: &str, amount: u64) -> String {
        self.proposal_seq += 1;
        let tx_id = hasher::digest(&format!(
            "{}:{}:{}:{}",
            to,
            amount,
            chrono::Utc::now().timestamp_millis(),
            self.proposal_seq
        ));
        self.proposals.insert(
            tx_id.clone(),
            Proposal {
                to: to.to_string(),
                amount,
                approvals: HashSet::new(),
                status: ProposalStatus::Pending,
            },
        );
        tx_id
    }

    /// Count an owner's approval. The instant approvals first reach the
    /// quorum the withdrawal executes exactly once if funded; either way the
    /// proposal is settled and later approvals are inert.
    pub fn approve_withdrawal(&mut self, owner: &str, tx_id: &str) -> Result<ApprovalOutcome> {
        if !self.owners.iter().any(|o| o == owner) {
            warn!("Rejected approval from non-owner {}", owner);
            return Err(ChainError::NotAnOwner(owner.to_string()));
        }

        let required = self.required;
        let balance = self.balance;
        let proposal = self.proposals.get_mut(tx_id).ok_or_else(|| {
            warn!("Approval for unknown proposal {}", tx_id);
            ChainError::UnknownProposal(tx_id.to_string())
        })?;

        if proposal.status != ProposalStatus::Pending {
            return Ok(ApprovalOutcome::AlreadySettled);
        }

        proposal.approvals.insert(owner.to_string());
        if proposal.approvals.len() < required {
            return Ok(ApprovalOutcome::Recorded);
        }

        let amount = proposal.amount;
        if balance >= amount {
            proposal.status = ProposalStatus::Executed;
            let to = proposal.to.clone();
            self.balance -= amount;
            info!("Multisig withdrawal of {} to {} executed", amount, to);
            Ok(ApprovalOutcome::Executed)
        } else {
            proposal.status = ProposalStatus::Failed;
            warn!(
                "Multisig withdrawal of {} failed: balance is {}",
                amount, balance
            );
            Ok(ApprovalOutcome::InsufficientFunds)
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn proposal(&self, tx_id: &str) -> Option<&Proposal> {
        self.proposals.get(tx_id)
    }

    pub fn proposals(&self) -> &HashMap<String, Proposal> {
        &self.proposals
    }
}
