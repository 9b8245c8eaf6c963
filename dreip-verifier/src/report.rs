//! Orchestration: run every check family to completion and fold the result
//! into one boolean matrix.
//!
//! Per the error-handling policy (§7), a failing cryptographic check never
//! aborts the run — one bad ballot must not mask the rest. Every check
//! family below runs over the whole transcript regardless of any other
//! family's outcome, and the transcript is accepted iff every individual
//! result is `true`.

use curve::Point;
use rayon::prelude::*;

use crate::model::Transcript;
use crate::proofs::{equality, vote};
use crate::{audit, signature, tally};

/// A single named check's outcome, identified well enough to report (a
/// ballot id, an option id, ...).
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
}

/// The full per-family result matrix for one transcript.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub signatures: Vec<CheckResult>,
    pub vote_proofs: Vec<CheckResult>,
    pub equality_proofs: Vec<CheckResult>,
    pub tallies: Vec<CheckResult>,
    pub audited_ballots: Vec<CheckResult>,
}

impl CheckReport {
    /// Iterate every result across all five families, in report order.
    pub fn all(&self) -> impl Iterator<Item = &CheckResult> {
        self.signatures
            .iter()
            .chain(self.vote_proofs.iter())
            .chain(self.equality_proofs.iter())
            .chain(self.tallies.iter())
            .chain(self.audited_ballots.iter())
    }

    /// Overall verdict: every individual check passed.
    pub fn accepted(&self) -> bool {
        self.all().all(|result| result.passed)
    }
}

/// Run all five check families over `transcript`. Never short-circuits: a
/// failing check is recorded and the engine moves on. Each family is
/// dispatched across ballots/options via rayon's `par_iter`, since the
/// families are independent of one another and ballots within a family
/// don't share mutable state.
pub fn evaluate(transcript: &Transcript) -> CheckReport {
    let g1 = Point::generator();
    let g2 = transcript.election.g2;
    let election_id = &transcript.election.election_id;

    let signatures = transcript
        .ballots
        .par_iter()
        .map(|ballot| CheckResult {
            label: format!("ballot {} signature", ballot.ballot_id),
            passed: signature::verify_stage_one(&transcript.election.public_key, &ballot.stage_one),
        })
        .collect();

    let vote_proofs = transcript
        .ballots
        .par_iter()
        .flat_map(|ballot| {
            ballot
                .stage_one
                .one_of_n_zkps
                .par_iter()
                .map(|zkp| CheckResult {
                    label: format!("ballot {} option {} vote proof", ballot.ballot_id, zkp.option_id),
                    passed: vote::verify(zkp, g1, g2, election_id, &ballot.ballot_id, &ballot.weight),
                })
        })
        .collect();

    let equality_proofs = transcript
        .ballots
        .par_iter()
        .map(|ballot| CheckResult {
            label: format!("ballot {} equality proof", ballot.ballot_id),
            passed: equality::verify(
                &ballot.stage_one.equality_zkp,
                &ballot.stage_one.one_of_n_zkps,
                g1,
                g2,
                election_id,
                &ballot.ballot_id,
                &ballot.weight,
            ),
        })
        .collect();

    let tallies = transcript
        .options
        .par_iter()
        .map(|option| {
            let (r_points, z_points) = tally::confirmed_ciphertexts(&transcript.ballots, &option.id);
            CheckResult {
                label: format!("option {} tally", option.id),
                passed: tally::verify(option, &r_points, &z_points, g1, g2),
            }
        })
        .collect();

    let audited_ballots = transcript
        .ballots
        .par_iter()
        .filter(|ballot| ballot.is_audited())
        .map(|ballot| CheckResult {
            label: format!("ballot {} audit", ballot.ballot_id),
            passed: audit::verify(ballot, &transcript.options, g1, g2),
        })
        .collect();

    CheckReport { signatures, vote_proofs, equality_proofs, tallies, audited_ballots }
}
