//! Canonical serialization for deterministic graph fingerprints.
//!
//! Graph fingerprints must be stable across rebuilds so callers can
//! diff "did the graph actually change" without comparing structures.
//!
//! ## Determinism Guarantees
//!
//! - Struct fields serialize in declaration order
//! - Node and edge collections are sorted before hashing
//! - No HashMap in hashed data: fingerprint inputs iterate BTree
//!   collections
//! - Floats are quantized to integers before they reach this module

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("canonical serialization failed")
}

/// Compute the canonical hash of a serializable value as a hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", xxh64(&to_canonical_bytes(value), 0))
}
