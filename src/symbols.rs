//! Concrete symbol derivations built on the [`crate::vector`] primitives.

use crate::errors::PlottingError;
use crate::float_types::Real;
use crate::multiline::ShapeDeriver;
use crate::vector::{DEFAULT_ARROW_ANGLE, DEFAULT_ARROW_RATIO, arrow_barbs_with};
use geo::{LineString, coord};
use nalgebra::Point2;

/// A polyline through all control points with an arrowhead on the final leg.
///
/// The simplest member of the composite symbol family: part 0 is the shaft,
/// parts 1 and 2 are the two barb segments at the tip. Needs at least two
/// control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineArrow {
    /// Shaft length divided by barb length; zero selects the default 10.
    pub ratio: Real,
    /// Angle between barb and shaft; zero selects the default π/6.
    pub angle: Real,
}

impl Default for PolylineArrow {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_ARROW_RATIO,
            angle: DEFAULT_ARROW_ANGLE,
        }
    }
}

impl ShapeDeriver for PolylineArrow {
    fn derive_parts(
        &self,
        control_points: &[Point2<Real>],
    ) -> Result<Vec<LineString<Real>>, PlottingError> {
        if control_points.len() < 2 {
            return Err(PlottingError::TooFewPoints {
                needed: 2,
                got: control_points.len(),
            });
        }

        let shaft: LineString<Real> = control_points
            .iter()
            .map(|p| coord! { x: p.x, y: p.y })
            .collect();

        let tail = control_points[control_points.len() - 2];
        let tip = control_points[control_points.len() - 1];
        let (left_barb, right_barb) = arrow_barbs_with(tail, tip, self.ratio, self.angle)?;

        Ok(vec![shaft, left_barb.into(), right_barb.into()])
    }
}
