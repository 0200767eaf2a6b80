//! Pocketchain - an in-memory teaching blockchain
//!
//! A single-process, append-only ledger that batches submitted transactions
//! into proof-of-work-sealed blocks, derives balances by full chain replay,
//! and hosts a handful of toy contract state machines addressed by hash.
//! Nothing here is production-grade by intent: there is no peer consensus,
//! no persistence, and no signature verification.
//!
//! # Architecture
//!
//! ## Core Ledger
//! - [`hasher`] - Digest primitive (SHA-256, hex-encoded)
//! - [`transaction`] - Immutable value-transfer records
//! - [`block`] - Block structure and proof-of-work sealing
//! - [`ledger`] - Chain, pending pool, balances, integrity checks
//!
//! ## Contracts
//! - [`contracts`] - Balance, voting, NFT and multisig state machines
//!   plus the registry that maps addresses to deployed instances
//!
//! ## Mining
//! - [`miner`] - Sealing driver and the cancellable mining wrapper
//!
//! ## Collaborators
//! - [`wallet`] - Address generation and transaction construction
//! - [`network`] - Stand-in broadcaster (logs instead of sockets)
//! - [`audit`] - Append-only audit trail for demo drivers
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod block;
pub mod hasher;
pub mod ledger;
pub mod transaction;

// ============================================================================
// Contracts
// ============================================================================
pub mod contracts;

// ============================================================================
// Mining
// ============================================================================
pub mod miner;

// ============================================================================
// Collaborators
// ============================================================================
pub mod audit;
pub mod network;
pub mod wallet;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
