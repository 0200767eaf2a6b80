#![forbid(unsafe_code)]
//! Block and contract explorer: builds a small chain, then walks every
//! block, transaction and deployed contract and prints what it finds.

use pocketchain::contracts::{Contract, ContractRegistry, NftRegistry, SimpleBalance, Voting};
use pocketchain::ledger::Ledger;
use pocketchain::miner::Miner;
use pocketchain::wallet::Wallet;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut ledger = Ledger::new();
    let alice = Wallet::new("Alice");
    let bob = Wallet::new("Bob");
    let miner = Miner::new(&alice.address);

    ledger.add_transaction(alice.create_transaction(&bob.address, 40, "Invoice #1"))?;
    miner.mine(&mut ledger);
    ledger.add_transaction(bob.create_transaction(&alice.address, 15, "Partial refund"))?;
    miner.mine(&mut ledger);

    print_chain(&ledger);

    let mut registry = ContractRegistry::new();
    let mut simple = SimpleBalance::new("Alice", 100);
    simple.deposit("Bob", 50);
    registry.deploy(Contract::SimpleBalance(simple));

    let mut voting = Voting::new("DemoElection");
    voting.vote("Alice", "Bob")?;
    registry.deploy(Contract::Voting(voting));

    let mut nft = NftRegistry::new("ArtNFT");
    nft.mint("alice-address", json!({"name": "Monalisa"}));
    registry.deploy(Contract::NftRegistry(nft));

    print_contracts(&registry);
    Ok(())
}

fn print_chain(ledger: &Ledger) {
    for block in &ledger.chain {
        println!(
            "Block #{} Hash: {} Prev: {} Nonce: {}",
            block.index, block.hash, block.previous_hash, block.nonce
        );
        for tx in &block.transactions {
            println!(
                "  TxID: {} From: {} To: {} Amt: {} Msg: {}",
                tx.id,
                tx.from.as_deref().unwrap_or("(reward)"),
                tx.to,
                tx.amount,
                tx.message
            );
        }
    }
    println!("Chain valid? {}", ledger.is_valid());
}

fn print_contracts(registry: &ContractRegistry) {
    println!("\nDeployed contracts:");
    for (address, contract) in registry.iter() {
        println!("[{}] {}", contract.kind(), address);
        println!("{}", contract.summary());
    }
}
