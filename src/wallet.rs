//! Wallet: address generation and transaction construction
//!
//! There are no keys and no signatures in this design; an address is just a
//! digest salted with process entropy, unique enough for a demo session.

use crate::hasher;
use crate::transaction::Transaction;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Wallet {
    pub owner: String,
    pub address: String,
}

impl Wallet {
    pub fn new(owner: &str) -> Self {
        let salt: u64 = rand::thread_rng().gen();
        let address = hasher::digest(&format!(
            "{}:{}:{}",
            owner,
            salt,
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        Wallet {
            owner: owner.to_string(),
            address,
        }
    }

    pub fn create_transaction(&self, to: &str, amount: u64, message: &str) -> Transaction {
        Transaction::new(&self.address, to, amount, message)
    }
}
