//! Tally reconstruction (§4.7): the declared per-option tally and
//! randomness sum must match the sum of that option's confirmed-ballot
//! ciphertext components.

use curve::{Point, Scalar};

use crate::model::{BallotReceipt, OptionEntry};

/// Verify a single option's declared tally against the confirmed ballots
/// that voted on it.
///
/// `zkps` must already be filtered to the ciphertexts belonging to this
/// option, from ballots with `state == 2`. Returns `false` if any
/// ciphertext point is missing/invalid, if there are no such ballots, or on
/// mismatch.
pub fn verify(option: &OptionEntry, r_points: &[Point], z_points: &[Point], g1: Point, g2: Point) -> bool {
    if r_points.is_empty() || z_points.is_empty() {
        return false;
    }
    for point in r_points.iter().chain(z_points.iter()) {
        if !point.is_valid() {
            return false;
        }
    }

    let r_sum = r_points.iter().copied().reduce(|a, b| a + b).expect("checked non-empty above");
    let z_sum = z_points.iter().copied().reduce(|a, b| a + b).expect("checked non-empty above");

    let combined = Scalar::from_biguint_reduced(&(&option.tally + &option.sum));
    let lhs_z = g1 * combined;
    let lhs_r = g2 * Scalar::from_biguint_reduced(&option.sum);

    lhs_z == z_sum && lhs_r == r_sum
}

/// Collect, for a given option, the `(cyphertext_R, cyphertext_Z)` pairs
/// contributed by every confirmed ballot's one-of-n proof for that option
/// (§4.7: "confirmed ballots only", `state == 2`).
pub fn confirmed_ciphertexts(ballots: &[BallotReceipt], option_id: &num_bigint::BigUint) -> (Vec<Point>, Vec<Point>) {
    let mut r_points = Vec::new();
    let mut z_points = Vec::new();
    for ballot in ballots {
        if !ballot.is_confirmed() {
            continue;
        }
        for zkp in &ballot.stage_one.one_of_n_zkps {
            if &zkp.option_id != option_id {
                continue;
            }
            if let (Some(r), Some(z)) = (zkp.cyphertext_r, zkp.cyphertext_z) {
                r_points.push(r);
                z_points.push(z);
            }
        }
    }
    (r_points, z_points)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::rngs::OsRng;
    use rand::RngCore;

    use super::*;

    fn random_scalar() -> Scalar {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Scalar::from_be_bytes_reduced(&bytes)
    }

    #[test]
    fn accepts_a_matching_tally() {
        let g1 = Point::generator();
        let g2 = g1 * random_scalar();

        let x1 = random_scalar();
        let x2 = random_scalar();
        let weight1 = Scalar::from_u64(1);
        let weight2 = Scalar::from_u64(1);

        let r_points = vec![g2 * x1, g2 * x2];
        let z_points = vec![g1 * x1 + g1 * weight1, g1 * x2 + g1 * weight2];

        let sum = x1 + x2;
        let option = OptionEntry {
            id: BigUint::from(1u32),
            tally: BigUint::from(2u32),
            sum: sum.to_biguint(),
        };

        assert!(verify(&option, &r_points, &z_points, g1, g2));
    }

    #[test]
    fn rejects_a_wrong_tally() {
        let g1 = Point::generator();
        let g2 = g1 * random_scalar();
        let x1 = random_scalar();
        let r_points = vec![g2 * x1];
        let z_points = vec![g1 * x1 + g1 * Scalar::from_u64(1)];

        let option = OptionEntry {
            id: BigUint::from(1u32),
            tally: BigUint::from(99u32),
            sum: x1.to_biguint(),
        };

        assert!(!verify(&option, &r_points, &z_points, g1, g2));
    }

    #[test]
    fn rejects_when_there_are_no_contributing_ballots() {
        let g1 = Point::generator();
        let g2 = g1 * random_scalar();
        let option = OptionEntry {
            id: BigUint::from(1u32),
            tally: BigUint::from(0u32),
            sum: BigUint::from(0u32),
        };
        assert!(!verify(&option, &[], &[], g1, g2));
    }
}
