#![forbid(unsafe_code)]
//! End-to-end demo driver: ledger rounds, every contract variant, the
//! network stub and the audit trail.

use pocketchain::audit::AuditLog;
use pocketchain::config::Config;
use pocketchain::contracts::{
    ApprovalOutcome, Contract, ContractRegistry, MultisigEscrow, NftRegistry, SimpleBalance,
    Voting,
};
use pocketchain::error::ChainError;
use pocketchain::ledger::Ledger;
use pocketchain::miner::Miner;
use pocketchain::network::{Network, NetworkMessage};
use pocketchain::wallet::Wallet;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::load("pocketchain.toml")?;
    let mut audit = AuditLog::new();

    ledger_demo(&config, &mut audit)?;
    contract_demo(&mut audit)?;
    network_demo();

    println!("\n--- Audit trail ---");
    for entry in audit.entries() {
        println!("{}", entry.render());
    }
    Ok(())
}

fn ledger_demo(config: &Config, audit: &mut AuditLog) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::with_config(config);
    let alice = Wallet::new("Alice");
    let bob = Wallet::new("Bob");
    let charlie = Wallet::new("Charlie");
    let miner = Miner::new(&alice.address);

    ledger.register_node(&alice.address);
    ledger.register_node(&bob.address);
    ledger.register_node(&charlie.address);

    println!("--- Ledger demo ---");
    println!("Registered nodes: {}", ledger.nodes().len());

    ledger.add_transaction(alice.create_transaction(&bob.address, 50, "Debt repayment"))?;
    ledger.add_transaction(bob.create_transaction(&charlie.address, 20, "Gift"))?;
    ledger.add_transaction(charlie.create_transaction(&alice.address, 10, "Refund"))?;

    let sealed = miner.mine(&mut ledger).clone();
    audit.record("Block sealed", &format!("Block #{} by Alice", sealed.index));

    println!("Balances after first seal:");
    println!("  Alice:   {}", ledger.balance_of(&alice.address));
    println!("  Bob:     {}", ledger.balance_of(&bob.address));
    println!("  Charlie: {}", ledger.balance_of(&charlie.address));
    println!("Chain valid? {}", ledger.is_valid());

    ledger.add_transaction(alice.create_transaction(&charlie.address, 20, "Donation"))?;
    ledger.add_transaction(bob.create_transaction(&alice.address, 5, "Change"))?;
    miner.mine(&mut ledger);

    println!("Balances after second seal:");
    println!("  Alice:   {}", ledger.balance_of(&alice.address));
    println!("  Bob:     {}", ledger.balance_of(&bob.address));
    println!("  Charlie: {}", ledger.balance_of(&charlie.address));
    println!("Chain length: {}", ledger.chain.len());
    Ok(())
}

fn contract_demo(audit: &mut AuditLog) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ContractRegistry::new();

    println!("\n--- Simple balance contract ---");
    let mut simple = SimpleBalance::new("Alice", 100);
    simple.deposit("Bob", 50);
    simple.withdraw("Charlie", 30)?;
    match simple.withdraw("Bob", 150) {
        Err(ChainError::InsufficientFunds { have, need }) => {
            println!("Withdrawal rejected: have {}, need {}", have, need);
        }
        other => other?,
    }
    println!("Contract balance: {}", simple.balance());
    registry.deploy(Contract::SimpleBalance(simple));

    println!("\n--- Voting contract ---");
    let mut voting = Voting::new("DemoElection");
    voting.vote("Alice", "Bob")?;
    voting.vote("Charlie", "Dave")?;
    voting.vote("Alice", "Eve")?;
    if let Err(ChainError::AlreadyVoted(voter)) = voting.vote("Alice", "Bob") {
        println!("Rejected repeat ballot from {}", voter);
    }
    let mut tally: Vec<_> = voting.tally().iter().collect();
    tally.sort();
    for (candidate, votes) in tally {
        println!("  {}: {} vote(s)", candidate, votes);
    }
    registry.deploy(Contract::Voting(voting));

    println!("\n--- NFT registry contract ---");
    let mut nft = NftRegistry::new("ArtNFT");
    let token = nft.mint("alice-address", json!({"name": "Monalisa", "artist": "Da Vinci"}));
    nft.mint("bob-address", json!({"name": "Starry Night", "artist": "Van Gogh"}));
    nft.transfer("alice-address", "bob-address", token)?;
    println!("Owner of token #{}: {:?}", token, nft.owner_of(token));
    audit.record("Contract deployed", "NftRegistry by Bob");
    registry.deploy(Contract::NftRegistry(nft));

    println!("\n--- Multisig escrow contract ---");
    let owners = vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()];
    let mut multisig = MultisigEscrow::new(owners, 2)?;
    multisig.deposit("Alice", 100);
    let tx_id = multisig.propose_withdrawal("Vendor", 60);
    multisig.approve_withdrawal("Alice", &tx_id)?;
    let outcome = multisig.approve_withdrawal("Bob", &tx_id)?;
    println!("Second approval outcome: {:?}", outcome);
    assert_eq!(outcome, ApprovalOutcome::Executed);
    println!("Escrow balance: {}", multisig.balance());
    registry.deploy(Contract::MultisigEscrow(multisig));

    println!("\nDeployed {} contract(s)", registry.len());
    Ok(())
}

fn network_demo() {
    println!("\n--- Network stub ---");
    let mut network = Network::new();
    network.add_node("node1");
    network.add_node("node2");
    network.broadcast(&NetworkMessage::NewBlock { hash: "abc123".to_string() });
    println!("Broadcast sent to {} node(s)", network.nodes().len());
}
