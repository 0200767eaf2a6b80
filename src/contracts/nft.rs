//! NFT registry contract: mint, transfer and look up tokens by id

use crate::error::{ChainError, Result};
use crate::hasher;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct NftRegistry {
    pub name: String,
    pub address: String,
    tokens: HashMap<u64, Value>,
    owners: HashMap<u64, String>,
    /// Token ids start at 1 and are never reused.
    next_token_id: u64,
}

impl NftRegistry {
    pub fn new(name: &str) -> Self {
        let address = hasher::digest(&format!(
            "nft:{}:{}",
            name,
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        NftRegistry {
            name: name.to_string(),
            address,
            tokens: HashMap::new(),
            owners: HashMap::new(),
            next_token_id: 1,
        }
    }

    /// Allocate the next token id for `owner`. Never fails.
    pub fn mint(&mut self, owner: &str, metadata: Value) -> u64 {
        let token_id = self.next_token_id;
        self.next_token_id += 1;
        self.tokens.insert(token_id, metadata);
        self.owners.insert(token_id, owner.to_string());
        token_id
    }

    /// Reassign ownership, rejecting unknown tokens and non-owners with no
    /// mutation.
    pub fn transfer(&mut self, from: &str, to: &str, token_id: u64) -> Result<()> {
        match self.owners.get(&token_id) {
            None => Err(ChainError::UnknownToken(token_id)),
            Some(owner) if owner != from => Err(ChainError::NotTokenOwner {
                token_id,
                claimed: from.to_string(),
            }),
            Some(_) => {
                self.owners.insert(token_id, to.to_string());
                Ok(())
            }
        }
    }

    pub fn owner_of(&self, token_id: u64) -> Option<&str> {
        self.owners.get(&token_id).map(String::as_str)
    }

    pub fn metadata(&self, token_id: u64) -> Option<&Value> {
        self.tokens.get(&token_id)
    }

    /// Every minted token as `(id, owner, metadata)`, in id order.
    pub fn all_tokens(&self) -> Vec<(u64, &str, &Value)> {
        let mut tokens: Vec<_> = self
            .tokens
            .iter()
            .map(|(id, metadata)| (*id, self.owners[id].as_str(), metadata))
            .collect();
        tokens.sort_by_key(|(id, _, _)| *id);
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mint_allocates_sequential_ids() {
        let mut nft = NftRegistry::new("art");
        let id1 = nft.mint("alice", json!({"name": "Monalisa"}));
        let id2 = nft.mint("bob", json!({"name": "Starry Night"}));
        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
        assert_eq!(nft.owner_of(1), Some("alice"));
        assert_eq!(nft.metadata(2).unwrap()["name"], "Starry Night");
    }

    #[test]
    fn test_transfer_by_owner_reassigns() {
        let mut nft = NftRegistry::new("art");
        let id = nft.mint("alice", json!({}));
        assert!(nft.transfer("alice", "bob", id).is_ok());
        assert_eq!(nft.owner_of(id), Some("bob"));
    }

    #[test]
    fn test_transfer_by_non_owner_is_rejected() {
        let mut nft = NftRegistry::new("art");
        let id = nft.mint("alice", json!({}));
        let err = nft.transfer("mallory", "bob", id).unwrap_err();
        assert_eq!(
            err,
            ChainError::NotTokenOwner { token_id: id, claimed: "mallory".to_string() }
        );
        assert_eq!(nft.owner_of(id), Some("alice"));
    }

    #[test]
    fn test_unknown_token_lookups() {
        let mut nft = NftRegistry::new("art");
        assert_eq!(nft.owner_of(7), None);
        assert_eq!(nft.metadata(7), None);
        assert_eq!(
            nft.transfer("alice", "bob", 7).unwrap_err(),
            ChainError::UnknownToken(7)
        );
    }

    #[test]
    fn test_all_tokens_in_id_order() {
        let mut nft = NftRegistry::new("art");
        nft.mint("alice", json!(1));
        nft.mint("bob", json!(2));
        nft.mint("carol", json!(3));
        let ids: Vec<u64> = nft.all_tokens().iter().map(|(id, _, _)| *id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
