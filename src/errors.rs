//! Geometry and parsing errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible failures the kernel can report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlottingError {
    /// (TooFewPoints) A derivation rule needs more control points than were supplied
    TooFewPoints { needed: usize, got: usize },
    /// (ZeroLengthVector) A primitive received a direction vector of zero length
    ZeroLengthVector,
    /// (InfeasibleConstraint) The requested angle/length combination has no solution
    InfeasibleConstraint { angle: Real, length: Real },
    /// (MalformedControlPointText) Control-point text does not parse into well-formed coordinate objects
    MalformedControlPointText(String),
}

impl Display for PlottingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlottingError::TooFewPoints { needed, got } => write!(
                f,
                "(TooFewPoints) Derivation needs at least {} control points, got {}",
                needed, got
            ),
            PlottingError::ZeroLengthVector => {
                write!(f, "(ZeroLengthVector) A direction vector of zero length was supplied")
            },
            PlottingError::InfeasibleConstraint { angle, length } => write!(
                f,
                "(InfeasibleConstraint) No vector of length {} makes angle {} with the base vector",
                length, angle
            ),
            PlottingError::MalformedControlPointText(detail) => {
                write!(f, "(MalformedControlPointText) {}", detail)
            },
        }
    }
}
