//! Errors raised by pens in this crate that validate their input.

use core::fmt;

/// Errors that can occur when building a path from pen commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A segment or close command arrived while no subpath was open.
    MissingMove,
    /// A cubic segment had this number of points; only 1 to 3 are supported.
    CurveArity(usize),
    /// A quadratic segment had no points.
    EmptyQuadratic,
    /// A quadratic segment had an implied on-curve point (`None`) at this
    /// index, which is not the last one.
    MisplacedImpliedPoint(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingMove => write!(f, "Path segment without a preceding move"),
            Self::CurveArity(n) => write!(
                f,
                "Cubic segment with {n} points, expected between 1 and 3"
            ),
            Self::EmptyQuadratic => write!(f, "Quadratic segment without points"),
            Self::MisplacedImpliedPoint(ix) => write!(
                f,
                "Implied on-curve point at index {ix} is not the last point of the segment"
            ),
        }
    }
}

impl std::error::Error for PathError {}
