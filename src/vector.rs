//! Stateless vector-math primitives the symbol derivations are assembled from.
//!
//! All functions operate on [`nalgebra`] points/vectors in the plane and are
//! pure and deterministic. Fallible ones report a [`PlottingError`] instead of
//! letting a NaN escape.

use crate::errors::PlottingError;
use crate::float_types::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI, Real, parallel_tolerance};
use geo::{Line, coord};
use nalgebra::{Point2, Vector2};

/// Shaft-to-barb length ratio of an arrowhead when none is requested.
pub const DEFAULT_ARROW_RATIO: Real = 10.0;
/// Angle between an arrowhead barb and the shaft when none is requested.
pub const DEFAULT_ARROW_ANGLE: Real = FRAC_PI_6;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2<Real>, b: Point2<Real>) -> Real {
    (a - b).norm()
}

/// Midpoint of the segment joining `a` and `b`.
#[inline]
pub fn midpoint(a: Point2<Real>, b: Point2<Real>) -> Point2<Real> {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Vector between two points, with the **first argument subtracted from**:
/// `to_vector(a, b) = (a.x - b.x, a.y - b.y)`.
///
/// Callers must be consistent about the order; the arrowhead construction in
/// [`arrow_barbs_with`] relies on the end-to-start orientation this produces.
#[inline]
pub fn to_vector(a: Point2<Real>, b: Point2<Real>) -> Vector2<Real> {
    a - b
}

/// The two vectors of the given `length` that make the given `angle` with the
/// base vector `v`, one rotated left and one rotated right.
///
/// An `angle` of zero selects the default π/2 and a `length` of zero selects
/// the default 1 (a unit vector).
///
/// A horizontal base (`v.y == 0`) is solved directly for `y` through the
/// Pythagorean relation, with the left/right assignment following the sign of
/// `v.x`. Otherwise the angle/length constraint is rewritten as `y = n·x + m`
/// and substituted into the circle equation `x² + y² = length²`, giving a
/// quadratic whose two roots are the two candidates; the left/right assignment
/// flips when `v.y < 0`.
///
/// # Errors
///
/// - [`PlottingError::ZeroLengthVector`] if `v` has zero length.
/// - [`PlottingError::InfeasibleConstraint`] if the quadratic has no real root.
///   This cannot occur for an angle in `(0, π)` and a positive length, but the
///   guard keeps an infeasible request from surfacing as NaN coordinates.
pub fn rotated_vectors(
    v: Vector2<Real>,
    angle: Real,
    length: Real,
) -> Result<(Vector2<Real>, Vector2<Real>), PlottingError> {
    let angle = if angle == 0.0 { FRAC_PI_2 } else { angle };
    let length = if length == 0.0 { 1.0 } else { length };

    let base_length = v.norm();
    if base_length == 0.0 {
        return Err(PlottingError::ZeroLengthVector);
    }

    // A horizontal base would put v.y in a divisor below, so solve it directly.
    if v.y == 0.0 {
        let x = base_length * length * angle.cos() / v.x;
        let radicand = length * length - x * x;
        if radicand < 0.0 {
            return Err(PlottingError::InfeasibleConstraint { angle, length });
        }
        let y = radicand.sqrt();
        return Ok(if v.x > 0.0 {
            (Vector2::new(x, y), Vector2::new(x, -y))
        } else {
            (Vector2::new(x, -y), Vector2::new(x, y))
        });
    }

    // The dot-product constraint v·u = |v|·length·cos(angle) as y = n·x + m,
    // substituted into x² + y² = length², gives a·x² + b·x + c = 0.
    let n = -v.x / v.y;
    let m = length * base_length * angle.cos() / v.y;
    let a = 1.0 + n * n;
    let b = 2.0 * n * m;
    let c = m * m - length * length;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(PlottingError::InfeasibleConstraint { angle, length });
    }
    let root = discriminant.sqrt();
    let x_1 = (-b - root) / (2.0 * a);
    let x_2 = (-b + root) / (2.0 * a);
    let y_1 = n * x_1 + m;
    let y_2 = n * x_2 + m;

    Ok(if v.y >= 0.0 {
        (Vector2::new(x_1, y_1), Vector2::new(x_2, y_2))
    } else {
        (Vector2::new(x_2, y_2), Vector2::new(x_1, y_1))
    })
}

/// Arrowhead barbs at `end` for the vector from `start` to `end`, with the
/// default barb ratio and angle.
///
/// # Errors
///
/// [`PlottingError::ZeroLengthVector`] if `start` and `end` coincide.
#[inline]
pub fn arrow_barbs(
    start: Point2<Real>,
    end: Point2<Real>,
) -> Result<(Line<Real>, Line<Real>), PlottingError> {
    arrow_barbs_with(start, end, DEFAULT_ARROW_RATIO, DEFAULT_ARROW_ANGLE)
}

/// Arrowhead barbs at `end` for the vector from `start` to `end`.
///
/// * `ratio` – shaft length divided by barb length, default 10 when zero
/// * `angle` – angle between barb and shaft in `(0, π)`, default π/6 when zero
///
/// Both returned segments originate at `end`; their far ends sit a barb length
/// away, back toward `start`, one on each side of the shaft.
pub fn arrow_barbs_with(
    start: Point2<Real>,
    end: Point2<Real>,
    ratio: Real,
    angle: Real,
) -> Result<(Line<Real>, Line<Real>), PlottingError> {
    let ratio = if ratio == 0.0 { DEFAULT_ARROW_RATIO } else { ratio };
    let angle = if angle == 0.0 { DEFAULT_ARROW_ANGLE } else { angle };

    let shaft_length = distance(start, end);
    // End-to-start orientation, so the barbs point back along the shaft.
    let reversed = to_vector(start, end);
    let (left, right) = rotated_vectors(reversed, angle, shaft_length / ratio)?;

    let tip = coord! { x: end.x, y: end.y };
    Ok((
        Line::new(tip, coord! { x: end.x + left.x, y: end.y + left.y }),
        Line::new(tip, coord! { x: end.x + right.x, y: end.y + right.y }),
    ))
}

/// Intersection of the line through `p1` with direction `v1` and the line
/// through `p2` with direction `v2`.
///
/// Directions count as parallel when the magnitude of their cross product is
/// at most [`parallel_tolerance`] (exact zero by default). Parallel
/// same-direction inputs yield the midpoint of `p1` and `p2`; parallel
/// opposite-direction inputs yield `p2` verbatim. Otherwise the 2×2 linear
/// system is solved in closed form, back-substituting into whichever line has
/// a nonzero x-direction (at least one does, or the lines would be parallel).
pub fn line_intersection(
    v1: Vector2<Real>,
    v2: Vector2<Real>,
    p1: Point2<Real>,
    p2: Point2<Real>,
) -> Point2<Real> {
    let cross = v1.y * v2.x - v1.x * v2.y;
    if cross.abs() <= parallel_tolerance() {
        if v1.x * v2.x > 0.0 || v1.y * v2.y > 0.0 {
            return midpoint(p1, p2);
        }
        return p2;
    }

    let x = (v1.x * v2.x * (p2.y - p1.y) + p1.x * v1.y * v2.x - p2.x * v2.y * v1.x) / cross;
    let y = if v1.x != 0.0 {
        (x - p1.x) * v1.y / v1.x + p1.y
    } else {
        (x - p2.x) * v2.y / v2.x + p2.y
    };
    Point2::new(x, y)
}

/// Angular bisector of `v1` and `v2`: the sum of their unit vectors.
///
/// # Errors
///
/// [`PlottingError::ZeroLengthVector`] if either input has zero length.
pub fn angular_bisector(
    v1: Vector2<Real>,
    v2: Vector2<Real>,
) -> Result<Vector2<Real>, PlottingError> {
    let d1 = v1.norm();
    let d2 = v2.norm();
    if d1 == 0.0 || d2 == 0.0 {
        return Err(PlottingError::ZeroLengthVector);
    }
    Ok(v1 / d1 + v2 / d2)
}

/// Which base angle governs the end-point direction in [`third_vertices_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAngleMode {
    /// The start angle is mirrored onto the end point (π − `angle_s`), leaving
    /// `angle_e` unused. This is the historical behavior and the default.
    Mirrored,
    /// The end point uses its own angle (π − `angle_e`).
    Independent,
}

/// Both apex candidates of the triangle over the base `p_s`–`p_e` with the
/// given base angles, one on each side of the base. Uses
/// [`BaseAngleMode::Mirrored`]; see [`third_vertices_with`].
#[inline]
pub fn third_vertices(
    p_s: Point2<Real>,
    p_e: Point2<Real>,
    angle_s: Real,
    angle_e: Real,
) -> Result<(Point2<Real>, Point2<Real>), PlottingError> {
    third_vertices_with(p_s, p_e, angle_s, angle_e, BaseAngleMode::Mirrored)
}

/// Both apex candidates of the triangle over the base `p_s`–`p_e` with the
/// given base angles.
///
/// An angle of zero selects the default π/4. Unit directions are produced at
/// each base endpoint with [`rotated_vectors`] and intersected left-with-left
/// and right-with-right, giving the apex above and below the base.
///
/// # Errors
///
/// [`PlottingError::ZeroLengthVector`] if `p_s` and `p_e` coincide.
pub fn third_vertices_with(
    p_s: Point2<Real>,
    p_e: Point2<Real>,
    angle_s: Real,
    angle_e: Real,
    mode: BaseAngleMode,
) -> Result<(Point2<Real>, Point2<Real>), PlottingError> {
    let angle_s = if angle_s == 0.0 { FRAC_PI_4 } else { angle_s };
    let angle_e = if angle_e == 0.0 { FRAC_PI_4 } else { angle_e };

    let v_se = p_e - p_s;
    let (start_left, start_right) = rotated_vectors(v_se, angle_s, 1.0)?;
    let end_angle = match mode {
        BaseAngleMode::Mirrored => PI - angle_s,
        BaseAngleMode::Independent => PI - angle_e,
    };
    let (end_left, end_right) = rotated_vectors(v_se, end_angle, 1.0)?;

    Ok((
        line_intersection(start_left, end_left, p_s, p_e),
        line_intersection(start_right, end_right, p_s, p_e),
    ))
}
