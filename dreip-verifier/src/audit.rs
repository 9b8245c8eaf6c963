//! Audited-ballot verification (§4.8): for a ballot whose randomness was
//! disclosed (audited rather than confirmed), recompute every option's
//! `(R, Z)` pair and the equality commitments from the disclosed values and
//! check them against what the ballot actually published.
//!
//! The revealed randomness is positional against the transcript's
//! `option_set` ordering, not keyed by option id (§9 "audited-ballot
//! semantics").

use curve::{Point, Scalar};

use crate::model::{BallotReceipt, OptionEntry};

/// Verify one audited ballot against the transcript's option ordering.
///
/// Returns `false` if the ballot was not audited, if the revealed
/// randomness vector's length does not match `options`, if any published
/// ciphertext point is missing/invalid, or if any reconstructed point fails
/// to match.
pub fn verify(ballot: &BallotReceipt, options: &[OptionEntry], g1: Point, g2: Point) -> bool {
    let Some(revealed) = &ballot.revealed else {
        return false;
    };
    if revealed.randomness.len() != options.len() {
        return false;
    }
    if ballot.stage_one.one_of_n_zkps.len() != options.len() {
        return false;
    }

    let weight = Scalar::from_biguint_reduced(&ballot.weight);

    for (option, rho) in options.iter().zip(revealed.randomness.iter()) {
        let Some(zkp) = ballot
            .stage_one
            .one_of_n_zkps
            .iter()
            .find(|z| z.option_id == option.id)
        else {
            return false;
        };
        let (Some(published_r), Some(published_z)) = (zkp.cyphertext_r, zkp.cyphertext_z) else {
            return false;
        };
        if !published_r.is_valid() || !published_z.is_valid() {
            return false;
        }

        let v = if option.id == revealed.selected_option_id {
            weight
        } else {
            Scalar::zero()
        };

        let reconstructed_r = g2 * *rho;
        let reconstructed_z = g1 * *rho + g1 * v;

        if reconstructed_r != published_r || reconstructed_z != published_z {
            return false;
        }
    }

    true
}
