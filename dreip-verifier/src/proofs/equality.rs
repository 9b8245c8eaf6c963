//! The per-ballot equality-of-discrete-log proof (§4.6): proves the
//! ballot's aggregate ciphertext opens to the same secret under `G1` and
//! `G2`, i.e. the ballot encodes exactly one unit of `weight` across its
//! one-of-n vote proofs.

use curve::{Point, Scalar};
use num_bigint::BigUint;

use crate::model::{EqualityZkp, OneOfNZkp};
use crate::proofs::hash::equality_proof_challenge;

fn sum_points(points: impl Iterator<Item = Point>) -> Option<Point> {
    points.reduce(|a, b| a + b)
}

/// Verify a ballot's equality proof against its own one-of-n vote proofs.
///
/// Returns `false` if any per-option ciphertext point is missing or
/// invalid, or on any cryptographic mismatch.
pub fn verify(
    zkp: &EqualityZkp,
    one_of_n: &[OneOfNZkp],
    g1: Point,
    g2: Point,
    election_id: &BigUint,
    ballot_id: &BigUint,
    weight: &BigUint,
) -> bool {
    if one_of_n.is_empty() {
        return false;
    }
    let (Some(commitment_1), Some(commitment_2)) = (zkp.commitment_1, zkp.commitment_2) else {
        return false;
    };
    if !commitment_1.is_valid() || !commitment_2.is_valid() {
        return false;
    }

    let mut r_points = Vec::with_capacity(one_of_n.len());
    let mut z_points = Vec::with_capacity(one_of_n.len());
    for entry in one_of_n {
        let (Some(r), Some(z)) = (entry.cyphertext_r, entry.cyphertext_z) else {
            return false;
        };
        if !r.is_valid() || !z.is_valid() {
            return false;
        }
        r_points.push(r);
        z_points.push(z);
    }

    let Some(r_sum) = sum_points(r_points.into_iter()) else {
        return false;
    };
    let Some(z_sum) = sum_points(z_points.into_iter()) else {
        return false;
    };

    let challenge = equality_proof_challenge(election_id, ballot_id, &g1, &g2, &commitment_1, &commitment_2);

    let x = z_sum - g1 * Scalar::from_biguint_reduced(weight);

    let lhs_1 = g1 * zkp.result;
    let rhs_1 = commitment_1 - x * challenge;
    let lhs_2 = g2 * zkp.result;
    let rhs_2 = commitment_2 - r_sum * challenge;

    lhs_1 == rhs_1 && lhs_2 == rhs_2
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;
    use rand::RngCore;

    use super::*;

    fn random_scalar() -> Scalar {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Scalar::from_be_bytes_reduced(&bytes)
    }

    fn one_of_n_entry(g1: Point, g2: Point, x: Scalar, v: Scalar, option_id: u64) -> OneOfNZkp {
        OneOfNZkp {
            option_id: BigUint::from(option_id),
            cyphertext_r: Some(g2 * x),
            cyphertext_z: Some(g1 * x + g1 * v),
            commitments_a: [Some(Point::identity()), Some(Point::identity())],
            commitments_b: [Some(Point::identity()), Some(Point::identity())],
            result_r: [Scalar::zero(), Scalar::zero()],
            result_d: [Scalar::zero(), Scalar::zero()],
        }
    }

    #[test]
    fn accepts_a_genuinely_constructed_equality_proof() {
        let g1 = Point::generator();
        let g2 = g1 * random_scalar();
        let election_id = BigUint::from(1u32);
        let ballot_id = BigUint::from(9u32);
        let weight = BigUint::from(1u32);

        let x1 = random_scalar();
        let x2 = random_scalar();
        let entries = vec![
            one_of_n_entry(g1, g2, x1, Scalar::from_biguint_reduced(&weight), 0),
            one_of_n_entry(g1, g2, x2, Scalar::zero(), 1),
        ];

        let x_sum = x1 + x2;
        let k = random_scalar();
        let commitment_1 = g1 * k;
        let commitment_2 = g2 * k;

        let challenge = equality_proof_challenge(&election_id, &ballot_id, &g1, &g2, &commitment_1, &commitment_2);
        let s = k + challenge * x_sum;

        let zkp = EqualityZkp {
            result: s,
            commitment_1: Some(commitment_1),
            commitment_2: Some(commitment_2),
        };

        assert!(verify(&zkp, &entries, g1, g2, &election_id, &ballot_id, &weight));
    }

    #[test]
    fn rejects_when_weight_does_not_match() {
        let g1 = Point::generator();
        let g2 = g1 * random_scalar();
        let election_id = BigUint::from(1u32);
        let ballot_id = BigUint::from(9u32);
        let weight = BigUint::from(1u32);

        let x1 = random_scalar();
        let entries = vec![one_of_n_entry(g1, g2, x1, Scalar::from_biguint_reduced(&weight), 0)];

        let k = random_scalar();
        let commitment_1 = g1 * k;
        let commitment_2 = g2 * k;
        let challenge = equality_proof_challenge(&election_id, &ballot_id, &g1, &g2, &commitment_1, &commitment_2);
        let s = k + challenge * x1;

        let zkp = EqualityZkp {
            result: s,
            commitment_1: Some(commitment_1),
            commitment_2: Some(commitment_2),
        };

        let wrong_weight = BigUint::from(2u32);
        assert!(!verify(&zkp, &entries, g1, g2, &election_id, &ballot_id, &wrong_weight));
    }
}
