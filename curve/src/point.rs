//! NIST P-256 group arithmetic: point addition, negation, scalar
//! multiplication, and the on-curve / non-infinity validation the
//! transcript's points must satisfy.
//!
//! All arithmetic is delegated to the RustCrypto `p256` crate; this module
//! only adds the domain-specific validation and decimal-coordinate
//! extraction the verifier needs.

use std::ops::{Add, Mul, Neg, Sub};

use elliptic_curve::group::{Curve, Group as _};
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use num_bigint::BigUint;
use p256::{AffinePoint, EncodedPoint, ProjectivePoint};

use crate::error::CurveError;
use crate::scalar::Scalar;

/// A point on the NIST P-256 curve, or the point at infinity.
#[derive(Copy, Clone, Debug)]
pub struct Point(ProjectivePoint);

impl Point {
    /// The fixed base generator for NIST P-256. In the transcript's terms
    /// this is always `G1`; `G2` is election-specific and read off the wire.
    pub fn generator() -> Self {
        Point(ProjectivePoint::GENERATOR)
    }

    /// The point at infinity (additive identity).
    pub fn identity() -> Self {
        Point(ProjectivePoint::IDENTITY)
    }

    /// True iff this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    /// Decode a point from its SEC1 hex encoding (compressed `02`/`03` or
    /// uncompressed `04` prefix). Fails if the bytes are not valid hex, not
    /// a valid SEC1 encoding, or the coordinates do not satisfy the curve
    /// equation.
    pub fn from_sec1_hex(s: &str) -> Result<Self, CurveError> {
        let bytes = hex::decode(s.trim()).map_err(|_| CurveError::Encoding)?;
        let encoded = EncodedPoint::from_bytes(&bytes).map_err(|_| CurveError::Encoding)?;
        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or(CurveError::NotOnCurve)?;
        Ok(Point(ProjectivePoint::from(affine)))
    }

    /// The transcript's point-validation policy (§4.1): not at infinity,
    /// and on-curve. Successfully decoding via [`Point::from_sec1_hex`]
    /// already proves on-curve membership and in-range coordinates (the
    /// field element type cannot represent `x, y >= p`), so only the
    /// infinity check remains here. P-256 has cofactor 1, so this is the
    /// whole of the subgroup check.
    pub fn is_valid(&self) -> bool {
        !self.is_identity()
    }

    /// Affine `(x, y)` coordinates as big-endian unsigned integers, used to
    /// build the decimal strings the Fiat-Shamir hash is computed over.
    /// Returns `None` for the point at infinity, which has no affine
    /// coordinates.
    pub fn affine_coordinates(&self) -> Option<(BigUint, BigUint)> {
        if self.is_identity() {
            return None;
        }
        let affine = self.0.to_affine();
        let encoded = affine.to_encoded_point(false);
        let x = BigUint::from_bytes_be(encoded.x()?);
        let y = BigUint::from_bytes_be(encoded.y()?);
        Some((x, y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Point {}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point(-self.0)
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;
    fn mul(self, scalar: Scalar) -> Point {
        Point(self.0 * scalar.inner())
    }
}

impl Mul<Point> for Scalar {
    type Output = Point;
    fn mul(self, point: Point) -> Point {
        point * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_valid_and_not_identity() {
        let g = Point::generator();
        assert!(g.is_valid());
        assert!(!g.is_identity());
    }

    #[test]
    fn identity_is_invalid() {
        assert!(!Point::identity().is_valid());
    }

    #[test]
    fn identity_has_no_affine_coordinates() {
        assert!(Point::identity().affine_coordinates().is_none());
    }

    #[test]
    fn addition_with_identity_is_a_no_op() {
        let g = Point::generator();
        assert_eq!(g + Point::identity(), g);
    }

    #[test]
    fn negation_cancels() {
        let g = Point::generator();
        assert!((g + -g).is_identity());
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let g = Point::generator();
        let three = Scalar::from_u64(3);
        assert_eq!(g * three, g + g + g);
    }

    #[test]
    fn scalar_mul_by_zero_is_identity() {
        let g = Point::generator();
        assert!((g * Scalar::zero()).is_identity());
    }

    #[test]
    fn round_trips_through_sec1_hex() {
        let g = Point::generator();
        let affine = g.0.to_affine();
        let hex_str = hex::encode(affine.to_encoded_point(false).as_bytes());
        let decoded = Point::from_sec1_hex(&hex_str).expect("valid point");
        assert_eq!(decoded, g);
    }

    #[test]
    fn rejects_garbage_encoding() {
        assert!(Point::from_sec1_hex("not hex at all").is_err());
    }
}
