//! Error types for pocketchain

use std::fmt;

/// Every recoverable precondition failure in the crate.
///
/// Integrity violations are deliberately *not* errors: `Ledger::is_valid`
/// reports them as a plain boolean and leaves diagnosis to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    InvalidTransaction(String),
    InsufficientFunds { have: u64, need: u64 },
    AlreadyVoted(String),
    UnknownToken(u64),
    NotTokenOwner { token_id: u64, claimed: String },
    NotAnOwner(String),
    UnknownProposal(String),
    InvalidContract(String),
    ConfigError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::InvalidTransaction(msg) => write!(f, "Invalid transaction: {}", msg),
            ChainError::InsufficientFunds { have, need } => {
                write!(f, "Insufficient funds: have {}, need {}", have, need)
            }
            ChainError::AlreadyVoted(voter) => write!(f, "Voter {} has already voted", voter),
            ChainError::UnknownToken(id) => write!(f, "Unknown token #{}", id),
            ChainError::NotTokenOwner { token_id, claimed } => {
                write!(f, "Address {} does not own token #{}", claimed, token_id)
            }
            ChainError::NotAnOwner(id) => write!(f, "{} is not a registered owner", id),
            ChainError::UnknownProposal(tx_id) => write!(f, "Unknown proposal: {}", tx_id),
            ChainError::InvalidContract(msg) => write!(f, "Invalid contract: {}", msg),
            ChainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
