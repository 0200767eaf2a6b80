//! Digest primitive for pocketchain
//!
//! Every identifier in the crate - transaction ids, block hashes, contract
//! addresses, multisig proposal ids - is derived through [`digest`]. The
//! original design only asks for a deterministic, practically
//! collision-free function; we use SHA-256 and hex-encode the result, which
//! also gives the proof-of-work difficulty predicate a familiar
//! leading-zeros shape.

use sha2::{Digest, Sha256};

/// Hash an arbitrary string payload into a 64-character lowercase hex digest.
///
/// Total and deterministic; callers are responsible for serializing
/// structured fields into a canonical string form first.
pub fn digest(payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}
