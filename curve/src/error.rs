//! Error types for point decoding and validation.

use thiserror::Error;

/// Errors arising from decoding or validating a NIST P-256 curve point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The input was not a valid hex / SEC1 encoding.
    #[error("malformed point encoding")]
    Encoding,
    /// The decoded coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
}
