//! Contract state machines and their registry
//!
//! Contracts are independent keyed stores addressed by a hash-derived id.
//! They are invoked directly by callers and never recorded into the ledger's
//! blocks; the chain's integrity check does not cover contract state.

pub mod multisig;
pub mod nft;
pub mod simple;
pub mod voting;

pub use multisig::{ApprovalOutcome, MultisigEscrow, Proposal, ProposalStatus};
pub use nft::NftRegistry;
pub use simple::{EntryKind, HistoryEntry, SimpleBalance};
pub use voting::Voting;

use std::collections::HashMap;
use std::fmt;

/// Tagged union over the contract variants. Cross-contract tooling (the
/// explorer, the registry) dispatches on this discriminant instead of
/// downcasting.
#[derive(Debug, Clone)]
pub enum Contract {
    SimpleBalance(SimpleBalance),
    Voting(Voting),
    NftRegistry(NftRegistry),
    MultisigEscrow(MultisigEscrow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    SimpleBalance,
    Voting,
    NftRegistry,
    MultisigEscrow,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContractKind::SimpleBalance => write!(f, "simple-balance"),
            ContractKind::Voting => write!(f, "voting"),
            ContractKind::NftRegistry => write!(f, "nft-registry"),
            ContractKind::MultisigEscrow => write!(f, "multisig-escrow"),
        }
    }
}

impl Contract {
    pub fn address(&self) -> &str {
        match self {
            Contract::SimpleBalance(c) => &c.address,
            Contract::Voting(c) => &c.address,
            Contract::NftRegistry(c) => &c.address,
            Contract::MultisigEscrow(c) => &c.address,
        }
    }

    pub fn kind(&self) -> ContractKind {
        match self {
            Contract::SimpleBalance(_) => ContractKind::SimpleBalance,
            Contract::Voting(_) => ContractKind::Voting,
            Contract::NftRegistry(_) => ContractKind::NftRegistry,
            Contract::MultisigEscrow(_) => ContractKind::MultisigEscrow,
        }
    }

    /// Multi-line human-readable summary, used by the explorer binary.
    pub fn summary(&self) -> String {
        match self {
            Contract::SimpleBalance(c) => {
                let mut out = format!("SimpleBalance (owner {}, balance {})", c.owner, c.balance());
                for entry in c.history() {
                    out.push_str(&format!(
                        "\n  [{:?}] {}: {}",
                        entry.kind, entry.counterparty, entry.amount
                    ));
                }
                out
            }
            Contract::Voting(c) => {
                let mut out = format!("Voting \"{}\"", c.name);
                let mut tally: Vec<_> = c.tally().iter().collect();
                tally.sort();
                for (candidate, votes) in tally {
                    out.push_str(&format!("\n  {}: {} vote(s)", candidate, votes));
                }
                out
            }
            Contract::NftRegistry(c) => {
                let mut out = format!("NftRegistry \"{}\"", c.name);
                for (id, owner, metadata) in c.all_tokens() {
                    out.push_str(&format!("\n  Token #{}: owner={}, data={}", id, owner, metadata));
                }
                out
            }
            Contract::MultisigEscrow(c) => format!(
                "MultisigEscrow ({} owner(s), {} required, balance {}, {} proposal(s))",
                c.owners().len(),
                c.required(),
                c.balance(),
                c.proposals().len()
            ),
        }
    }
}

/// Maps contract addresses to deployed instances.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    contracts: HashMap<String, Contract>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contract under its own address and return that address.
    pub fn deploy(&mut self, contract: Contract) -> String {
        let address = contract.address().to_string();
        self.contracts.insert(address.clone(), contract);
        address
    }

    pub fn get(&self, address: &str) -> Option<&Contract> {
        self.contracts.get(address)
    }

    pub fn get_mut(&mut self, address: &str) -> Option<&mut Contract> {
        self.contracts.get_mut(address)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contract)> {
        self.contracts.iter().map(|(a, c)| (a.as_str(), c))
    }
}
