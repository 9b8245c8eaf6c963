//! The transcript data model, and its JSON ingestion.
//!
//! A [`Transcript`] owns everything downstream verifiers need and is never
//! mutated after construction. Ingestion is deliberately two-phase: wire
//! structs (`*Wire`) mirror the JSON exactly (including capturing the raw
//! byte span of `stage_one_data`, per §4.2/§9 — re-serializing a parsed
//! `serde_json::Value` cannot be trusted to reproduce the signed bytes), and
//! a fallible `TryFrom` conversion turns those into the typed,
//! curve-validated model the verifiers operate on.
//!
//! Per the error-handling policy, only structural problems (missing fields,
//! bad integers, bad base64, a public key / G2 that doesn't decode) fail
//! ingestion. A ZKP point that fails to decode is *not* a structural error:
//! it is stored as `None` and the proof that uses it simply fails (§4.1,
//! "any serialized point that fails validation causes the containing check
//! to return false").

use base64::Engine;
use curve::{Point, Scalar};
use num_bigint::BigUint;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::VerifierError;

/// A numeric transcript field, accepted either as a JSON integer or as a
/// numeric string (the producing system uses both across different
/// fields). Always non-negative.
#[derive(Deserialize)]
#[serde(transparent)]
struct Numeric(serde_json::Value);

impl Numeric {
    fn into_biguint(self, field: &'static str) -> Result<BigUint, VerifierError> {
        let text = match &self.0 {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.trim().to_string(),
            other => {
                return Err(VerifierError::InvalidInteger {
                    field,
                    value: other.to_string(),
                })
            }
        };
        BigUint::parse_bytes(text.as_bytes(), 10).ok_or_else(|| VerifierError::InvalidInteger {
            field,
            value: text,
        })
    }
}

#[derive(Deserialize)]
struct TranscriptWire {
    election_context: ElectionContextWire,
    ballot_set: Vec<BallotReceiptWire>,
    option_set: Vec<OptionEntryWire>,
}

#[derive(Deserialize)]
struct ElectionContextWire {
    election_id: Numeric,
    public_key: String,
    unique_generator: String,
}

#[derive(Deserialize)]
struct BallotReceiptWire {
    ballot_id: Numeric,
    weight: Numeric,
    state: Numeric,
    stage_one: StageOneWire,
    #[serde(default)]
    revealed: Option<RevealedWire>,
}

#[derive(Deserialize)]
struct StageOneWire {
    stage_one_data: Box<RawValue>,
    stage_one_signature: String,
}

#[derive(Deserialize)]
struct StageOneDataWire {
    equality_zkp: EqualityZkpWire,
    one_of_n_zkps: Vec<OneOfNZkpWire>,
}

#[derive(Deserialize)]
struct EqualityZkpWire {
    result: Numeric,
    commitment_1: String,
    commitment_2: String,
}

#[derive(Deserialize)]
#[allow(non_snake_case)]
struct OneOfNZkpWire {
    option_id: Numeric,
    #[serde(rename = "cyphertext_R")]
    cyphertext_r: String,
    #[serde(rename = "cyphertext_Z")]
    cyphertext_z: String,
    commitments_A: [String; 2],
    commitments_B: [String; 2],
    result_r_i: [Numeric; 2],
    result_d_i: [Numeric; 2],
}

#[derive(Deserialize)]
struct RevealedWire {
    randomness: Vec<Numeric>,
    selected_option_id: Numeric,
}

#[derive(Deserialize)]
struct OptionEntryWire {
    id: Numeric,
    tally: Numeric,
    sum: Numeric,
}

/// The election-wide parameters, immutable for a given transcript.
pub struct ElectionContext {
    pub election_id: BigUint,
    /// The ECDSA verifying key bulletin-board entries are signed under.
    pub public_key: p256::ecdsa::VerifyingKey,
    /// The election-specific second generator, `G2`.
    pub g2: Point,
}

/// A single per-option zero-knowledge "one of n" vote proof.
///
/// A curve point that failed to decode is kept as `None` rather than
/// failing ingestion: it is the proof, not the transcript, that is invalid.
pub struct OneOfNZkp {
    pub option_id: BigUint,
    pub cyphertext_r: Option<Point>,
    pub cyphertext_z: Option<Point>,
    pub commitments_a: [Option<Point>; 2],
    pub commitments_b: [Option<Point>; 2],
    pub result_r: [Scalar; 2],
    pub result_d: [Scalar; 2],
}

/// The ballot-level Schnorr-style equality-of-discrete-log proof.
pub struct EqualityZkp {
    pub result: Scalar,
    pub commitment_1: Option<Point>,
    pub commitment_2: Option<Point>,
}

/// The pre-confirmation portion of a ballot receipt.
pub struct StageOne {
    /// The exact UTF-8 bytes of `stage_one_data` as they appeared in the
    /// source document, fed directly to the signature verifier.
    pub raw_bytes: Vec<u8>,
    pub signature: Vec<u8>,
    pub equality_zkp: EqualityZkp,
    pub one_of_n_zkps: Vec<OneOfNZkp>,
}

/// A revealed (audited) ballot's disclosed randomness.
///
/// `randomness[i]` is the randomness disclosed for `option_set[i]` — the
/// revealed vector is positional against the transcript's option ordering,
/// not keyed by option id (§4.8).
pub struct RevealedBallot {
    pub randomness: Vec<Scalar>,
    pub selected_option_id: BigUint,
}

/// A single ballot receipt.
pub struct BallotReceipt {
    pub ballot_id: BigUint,
    pub weight: BigUint,
    pub state: u64,
    pub stage_one: StageOne,
    pub revealed: Option<RevealedBallot>,
}

impl BallotReceipt {
    /// `state == 2`: included in tally reconstruction.
    pub fn is_confirmed(&self) -> bool {
        self.state == 2
    }

    /// Has disclosed randomness to audit against.
    pub fn is_audited(&self) -> bool {
        self.revealed.is_some()
    }
}

/// A single option's declared tally and randomness sum.
pub struct OptionEntry {
    pub id: BigUint,
    pub tally: BigUint,
    pub sum: BigUint,
}

/// An immutable, parsed bulletin-board snapshot.
pub struct Transcript {
    pub election: ElectionContext,
    pub ballots: Vec<BallotReceipt>,
    pub options: Vec<OptionEntry>,
}

/// Parse and validate a transcript from its JSON bytes.
///
/// Fails only on structural problems (§7): malformed JSON, a field that
/// isn't the integer/string/point shape it must be, bad base64, or an
/// election public key / `G2` that doesn't decode to a valid point.
pub fn parse_transcript(bytes: &[u8]) -> Result<Transcript, VerifierError> {
    let wire: TranscriptWire = serde_json::from_slice(bytes)?;

    let public_key_bytes =
        hex::decode(wire.election_context.public_key.trim()).map_err(|_| VerifierError::InvalidPublicKey)?;
    let encoded =
        p256::EncodedPoint::from_bytes(&public_key_bytes).map_err(|_| VerifierError::InvalidPublicKey)?;
    let public_key = p256::ecdsa::VerifyingKey::from_encoded_point(&encoded)
        .map_err(|_| VerifierError::InvalidPublicKey)?;
    // The key must also pass the transcript's own point-validity policy
    // (on-curve, non-infinity); `VerifyingKey` construction already refuses
    // off-curve points, so only non-infinity remains to check.
    let public_key_point =
        Point::from_sec1_hex(&wire.election_context.public_key).map_err(|_| VerifierError::InvalidPublicKey)?;
    if !public_key_point.is_valid() {
        return Err(VerifierError::InvalidPublicKey);
    }

    let g2 = Point::from_sec1_hex(&wire.election_context.unique_generator)
        .map_err(|_| VerifierError::InvalidGenerator)?;
    if !g2.is_valid() {
        return Err(VerifierError::InvalidGenerator);
    }

    let election = ElectionContext {
        election_id: wire.election_context.election_id.into_biguint("election_context.election_id")?,
        public_key,
        g2,
    };

    let mut ballots = Vec::with_capacity(wire.ballot_set.len());
    for ballot in wire.ballot_set {
        ballots.push(convert_ballot(ballot)?);
    }

    let mut options = Vec::with_capacity(wire.option_set.len());
    for option in wire.option_set {
        options.push(OptionEntry {
            id: option.id.into_biguint("option_set[].id")?,
            tally: option.tally.into_biguint("option_set[].tally")?,
            sum: option.sum.into_biguint("option_set[].sum")?,
        });
    }

    Ok(Transcript {
        election,
        ballots,
        options,
    })
}

fn convert_ballot(ballot: BallotReceiptWire) -> Result<BallotReceipt, VerifierError> {
    let raw_bytes = ballot.stage_one.stage_one_data.get().as_bytes().to_vec();
    let signature = base64::engine::general_purpose::STANDARD
        .decode(ballot.stage_one.stage_one_signature.trim())?;

    let data: StageOneDataWire = serde_json::from_str(ballot.stage_one.stage_one_data.get())?;

    let equality_zkp = EqualityZkp {
        result: Scalar::from_biguint_reduced(&data.equality_zkp.result.into_biguint("equality_zkp.result")?),
        commitment_1: Point::from_sec1_hex(&data.equality_zkp.commitment_1).ok(),
        commitment_2: Point::from_sec1_hex(&data.equality_zkp.commitment_2).ok(),
    };

    let mut one_of_n_zkps = Vec::with_capacity(data.one_of_n_zkps.len());
    for zkp in data.one_of_n_zkps {
        one_of_n_zkps.push(OneOfNZkp {
            option_id: zkp.option_id.into_biguint("one_of_n_zkps[].option_id")?,
            cyphertext_r: Point::from_sec1_hex(&zkp.cyphertext_r).ok(),
            cyphertext_z: Point::from_sec1_hex(&zkp.cyphertext_z).ok(),
            commitments_a: [
                Point::from_sec1_hex(&zkp.commitments_A[0]).ok(),
                Point::from_sec1_hex(&zkp.commitments_A[1]).ok(),
            ],
            commitments_b: [
                Point::from_sec1_hex(&zkp.commitments_B[0]).ok(),
                Point::from_sec1_hex(&zkp.commitments_B[1]).ok(),
            ],
            result_r: numeric_pair(zkp.result_r_i, "one_of_n_zkps[].result_r_i")?,
            result_d: numeric_pair(zkp.result_d_i, "one_of_n_zkps[].result_d_i")?,
        });
    }

    let revealed = match ballot.revealed {
        Some(r) => {
            let mut randomness = Vec::with_capacity(r.randomness.len());
            for value in r.randomness {
                randomness.push(Scalar::from_biguint_reduced(&value.into_biguint("revealed.randomness[]")?));
            }
            Some(RevealedBallot {
                randomness,
                selected_option_id: r.selected_option_id.into_biguint("revealed.selected_option_id")?,
            })
        }
        None => None,
    };

    Ok(BallotReceipt {
        ballot_id: ballot.ballot_id.into_biguint("ballot_set[].ballot_id")?,
        weight: ballot.weight.into_biguint("ballot_set[].weight")?,
        state: biguint_to_u64(&ballot.state.into_biguint("ballot_set[].state")?, "ballot_set[].state")?,
        stage_one: StageOne {
            raw_bytes,
            signature,
            equality_zkp,
            one_of_n_zkps,
        },
        revealed,
    })
}

fn numeric_pair(pair: [Numeric; 2], field: &'static str) -> Result<[Scalar; 2], VerifierError> {
    let [a, b] = pair;
    Ok([
        Scalar::from_biguint_reduced(&a.into_biguint(field)?),
        Scalar::from_biguint_reduced(&b.into_biguint(field)?),
    ])
}

fn biguint_to_u64(value: &BigUint, field: &'static str) -> Result<u64, VerifierError> {
    use num_traits::ToPrimitive;
    value.to_u64().ok_or_else(|| VerifierError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}
