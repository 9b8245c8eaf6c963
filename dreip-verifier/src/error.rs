//! Error taxonomy for the verifier.
//!
//! Per the transcript's error-handling policy: structural problems with the
//! JSON itself, or with the election's public key / generator, are fatal and
//! abort the whole run before any cryptographic check is attempted.
//! Cryptographic-check failures on individual ballots are never represented
//! here — those are `false` entries in a [`crate::report::CheckReport`], not
//! errors.

use thiserror::Error;

/// Fatal, transcript-structural errors. Any of these aborts verification
/// before cryptographic work begins.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The transcript file could not be read.
    #[error("failed to read transcript file: {0}")]
    Io(#[from] std::io::Error),

    /// The transcript is not well-formed JSON, or is missing/mistyped a
    /// required field.
    #[error("failed to parse transcript JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A `stage_one_signature` (or other base64 field) was not valid
    /// base64.
    #[error("malformed base64 in transcript: {0}")]
    Base64(#[from] base64::DecodeError),

    /// `election_context.public_key` did not decode to a valid P-256 point,
    /// or did not parse as an ECDSA verifying key. This is a type
    /// violation, distinct from a signature that decodes fine but fails to
    /// verify.
    #[error("election public key is not a valid P-256 verifying key")]
    InvalidPublicKey,

    /// `election_context.unique_generator` (G2) did not decode to a valid,
    /// non-infinity P-256 point.
    #[error("election unique_generator (G2) is not a valid, non-infinity P-256 point")]
    InvalidGenerator,

    /// A field that must hold a non-negative integer held something else.
    #[error("field `{field}` is not a valid non-negative integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}
