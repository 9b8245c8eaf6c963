//! Bulletin-board signature verification.
//!
//! Each ballot receipt's `stage_one_data` is signed under the election's
//! public key. The signed message is the exact bytes of `stage_one_data` as
//! they appeared on the wire (§4.2) — `StageOne::raw_bytes`, never a
//! re-serialization of the parsed value.

use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};

use crate::model::StageOne;

/// Verify `stage_one.signature` over `stage_one.raw_bytes` under `key`.
///
/// Returns `false` on any cryptographic mismatch or malformed signature
/// encoding; it never panics or propagates an error, since a bad signature
/// is a property of one ballot, not of the transcript's structure (§4.3).
pub fn verify_stage_one(key: &VerifyingKey, stage_one: &StageOne) -> bool {
    let signature = match Signature::from_slice(&stage_one.signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    key.verify(&stage_one.raw_bytes, &signature).is_ok()
}
