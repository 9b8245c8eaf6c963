//! Canonical Fiat-Shamir hash-input construction, one builder per proof
//! type.
//!
//! Term order is protocol-fixed and, per the documented hash-input
//! asymmetry, is *not* the same as the order the proof's own parameters are
//! usually listed in: `G₂` precedes `G₁` and `Z` precedes `R` in the vote
//! proof, and the commitment points contribute as whole `(x, y)` tuple
//! strings rather than as split coordinates. Both builders live here so that
//! asymmetry is visible in one place instead of scattered across the
//! proof-checking code.

use curve::Point;
use num_bigint::BigUint;

fn decimal(value: &BigUint) -> String {
    value.to_string()
}

/// A point's coordinates as two separate decimal terms, `x` then `y`.
fn split_terms(point: &Point) -> [String; 2] {
    let (x, y) = point
        .affine_coordinates()
        .expect("caller validates non-infinity before hashing");
    [x.to_string(), y.to_string()]
}

/// A point's coordinates as a single `(x, y)` tuple-formatted term, matching
/// the producing system's tuple string rendering exactly (comma, one
/// space).
fn tuple_term(point: &Point) -> String {
    let (x, y) = point
        .affine_coordinates()
        .expect("caller validates non-infinity before hashing");
    format!("({}, {})", x, y)
}

/// The one-of-n vote proof's challenge hash input (§4.4, §4.5 step 2).
///
/// Order: `election_id, option_id, ballot_id, G₂, G₁, Z, R, A₁, A₂, B₁, B₂`
/// — note `G₂` before `G₁` and `Z` before `R`; `A`/`B` as whole-tuple terms.
#[allow(clippy::too_many_arguments)]
pub fn vote_proof_challenge(
    election_id: &BigUint,
    option_id: &BigUint,
    ballot_id: &BigUint,
    g2: &Point,
    g1: &Point,
    z: &Point,
    r: &Point,
    a1: &Point,
    a2: &Point,
    b1: &Point,
    b2: &Point,
) -> curve::Scalar {
    let mut terms = vec![decimal(election_id), decimal(option_id), decimal(ballot_id)];
    terms.extend(split_terms(g2));
    terms.extend(split_terms(g1));
    terms.extend(split_terms(z));
    terms.extend(split_terms(r));
    terms.push(tuple_term(a1));
    terms.push(tuple_term(a2));
    terms.push(tuple_term(b1));
    terms.push(tuple_term(b2));
    curve::challenge(&terms)
}

/// The ballot equality proof's challenge hash input (§4.4, §4.6 step 2).
///
/// Order: `election_id, ballot_id, G₁, G₂, commitment_1, commitment_2`, all
/// as split coordinate terms.
pub fn equality_proof_challenge(
    election_id: &BigUint,
    ballot_id: &BigUint,
    g1: &Point,
    g2: &Point,
    commitment_1: &Point,
    commitment_2: &Point,
) -> curve::Scalar {
    let mut terms = vec![decimal(election_id), decimal(ballot_id)];
    terms.extend(split_terms(g1));
    terms.extend(split_terms(g2));
    terms.extend(split_terms(commitment_1));
    terms.extend(split_terms(commitment_2));
    curve::challenge(&terms)
}
