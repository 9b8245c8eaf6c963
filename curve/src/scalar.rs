//! Scalar arithmetic modulo the NIST P-256 group order `n`.

use std::ops::{Add, Mul, Neg, Sub};

use elliptic_curve::PrimeField;
use num_bigint::BigUint;
use p256::FieldBytes;

/// A scalar modulo the NIST P-256 group order `n`.
///
/// Wraps [`p256::Scalar`] and adds the reduction-from-arbitrary-magnitude
/// helpers the verifier needs: Fiat-Shamir digests and JSON-supplied
/// integers may both exceed `n` before they are brought into the field, and
/// `elliptic_curve`'s `PrimeField` API alone only round-trips canonical
/// (already-reduced) representations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scalar(p256::Scalar);

impl Scalar {
    /// The additive identity.
    pub fn zero() -> Self {
        Scalar(p256::Scalar::ZERO)
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Scalar(p256::Scalar::ONE)
    }

    /// The group order `n`, as an unsigned big integer.
    pub fn group_order() -> BigUint {
        let modulus = <p256::Scalar as PrimeField>::MODULUS;
        let hex = modulus.trim_start_matches("0x");
        BigUint::parse_bytes(hex.as_bytes(), 16).expect("P-256 scalar modulus is valid hex")
    }

    /// Reduce an arbitrary-magnitude non-negative integer modulo `n`.
    pub fn from_biguint_reduced(value: &BigUint) -> Self {
        let reduced = value % Self::group_order();
        let mut bytes = reduced.to_bytes_be();
        if bytes.len() < 32 {
            let mut padded = vec![0u8; 32 - bytes.len()];
            padded.extend_from_slice(&bytes);
            bytes = padded;
        }
        let field_bytes = FieldBytes::clone_from_slice(&bytes);
        let inner = p256::Scalar::from_repr(field_bytes)
            .expect("value reduced mod n always fits in the scalar field");
        Scalar(inner)
    }

    /// Reduce an arbitrary-length big-endian byte string modulo `n`. Used
    /// both for Fiat-Shamir digests and for scalars read off the wire.
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
        Self::from_biguint_reduced(&BigUint::from_bytes_be(bytes))
    }

    /// Reduce a small unsigned integer modulo `n`.
    pub fn from_u64(value: u64) -> Self {
        Self::from_biguint_reduced(&BigUint::from(value))
    }

    /// The canonical big-endian representative of this scalar, in `[0, n)`.
    pub fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(self.0.to_repr().as_slice())
    }

    pub(crate) fn inner(self) -> p256::Scalar {
        self.0
    }
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}
