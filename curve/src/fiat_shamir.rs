//! Deterministic Fiat-Shamir challenge hashing.
//!
//! The challenge for every proof in the transcript is built the same way:
//! join the decimal representations of the proof's public parameters with
//! commas, SHA-256 the UTF-8 bytes, and interpret the digest as a big-endian
//! integer reduced modulo the group order. The order of the joined terms is
//! specific to each proof type and lives with that proof's verifier, not
//! here; this module only owns the join-then-hash-then-reduce mechanics so
//! every call site shares one, tested implementation.

use sha2::{Digest, Sha256};

use crate::scalar::Scalar;

/// Compute the Fiat-Shamir challenge scalar for a sequence of decimal terms.
///
/// `terms` must already be in the exact order the protocol specifies; this
/// function does no reordering or deduplication.
pub fn challenge(terms: &[String]) -> Scalar {
    let message = terms.join(",");
    let digest = Sha256::digest(message.as_bytes());
    Scalar::from_be_bytes_reduced(&digest)
}
