//! Standalone verifier for DRE-IP election bulletin-board transcripts.
//!
//! A [`model::Transcript`] is parsed once from a JSON document
//! ([`model::parse_transcript`]) and then run through five independent
//! check families — [`signature`], [`proofs::vote`], [`proofs::equality`],
//! [`tally`], and [`audit`] — orchestrated by [`report::evaluate`]. No
//! check family short-circuits another: the transcript is accepted iff
//! every individual result is `true`.

pub mod audit;
pub mod error;
pub mod model;
pub mod proofs;
pub mod report;
pub mod signature;
pub mod tally;
