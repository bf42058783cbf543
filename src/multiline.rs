//! The multi-part-line abstraction compound plotting symbols are built on.
//!
//! A [`MultiLineSymbol`] owns an ordered list of control points and a derived
//! collection of [`LineString`] parts. The derivation rule is supplied by a
//! [`ShapeDeriver`], which each concrete symbol family (arrow, pincer, search
//! area) defines for itself, and runs again, atomically, every time the control points
//! are replaced.

use crate::errors::PlottingError;
use crate::float_types::Real;
use crate::json;
use geo::{Area, LineString, Polygon};
use nalgebra::Point2;

/// Derivation rule turning control points into the parts of one symbol family.
///
/// Implementations must be pure: the returned parts may depend only on the
/// control points passed in (and the deriver's own configuration).
pub trait ShapeDeriver {
    /// Compute all geometry parts from the given control points.
    fn derive_parts(
        &self,
        control_points: &[Point2<Real>],
    ) -> Result<Vec<LineString<Real>>, PlottingError>;
}

/// The no-geometry derivation: always produces an empty part list.
///
/// This is the behavior of the abstract base of the symbol family tree, where
/// derivation is a legal no-op until a concrete shape supplies its own rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoShape;

impl ShapeDeriver for NoShape {
    fn derive_parts(
        &self,
        _control_points: &[Point2<Real>],
    ) -> Result<Vec<LineString<Real>>, PlottingError> {
        Ok(Vec::new())
    }
}

/// A compound plotting symbol: ordered control points plus the multi-part line
/// geometry derived from them.
///
/// The parts are a pure function of the control points at the moment of last
/// derivation; every accepted mutation re-derives them before it is observable,
/// so a caller can never read stale geometry. Cloning deep-copies both
/// sequences, so a clone shares no mutable state with the original.
#[derive(Debug, Clone)]
pub struct MultiLineSymbol<D> {
    control_points: Vec<Point2<Real>>,
    parts: Vec<LineString<Real>>,
    deriver: D,
}

impl MultiLineSymbol<NoShape> {
    /// Create a symbol with the no-geometry derivation.
    pub fn new(control_points: Vec<Point2<Real>>) -> Result<Self, PlottingError> {
        Self::with_deriver(control_points, NoShape)
    }
}

impl<D: ShapeDeriver> MultiLineSymbol<D> {
    /// Marks this family as composite, as opposed to single-line plotting
    /// symbols. Consumed by renderers, not by the kernel itself.
    pub const IS_COMPOSITE: bool = true;

    /// Create a symbol from an initial control-point sequence.
    ///
    /// A non-empty sequence is derived immediately; an empty one produces an
    /// empty symbol whose parts appear on the first
    /// [`set_control_points`](Self::set_control_points).
    pub fn with_deriver(
        control_points: Vec<Point2<Real>>,
        deriver: D,
    ) -> Result<Self, PlottingError> {
        let parts = if control_points.is_empty() {
            Vec::new()
        } else {
            deriver.derive_parts(&control_points)?
        };
        Ok(Self {
            control_points,
            parts,
            deriver,
        })
    }

    /// Replace the control points wholesale and re-derive all parts.
    ///
    /// An empty `points` is a silent no-op, not an error. When derivation
    /// fails, the symbol keeps its previous control points and parts.
    pub fn set_control_points(
        &mut self,
        points: Vec<Point2<Real>>,
    ) -> Result<(), PlottingError> {
        if points.is_empty() {
            return Ok(());
        }
        let parts = self.deriver.derive_parts(&points)?;
        self.control_points = points;
        self.parts = parts;
        Ok(())
    }

    /// The current control points, in input order.
    pub fn control_points(&self) -> &[Point2<Real>] {
        &self.control_points
    }

    /// The derived geometry parts, in derivation order.
    pub fn parts(&self) -> &[LineString<Real>] {
        &self.parts
    }

    /// The derivation rule this symbol was built with.
    pub const fn deriver(&self) -> &D {
        &self.deriver
    }

    /// Whether this is a composite (multi-line) plotting symbol.
    pub const fn is_composite(&self) -> bool {
        Self::IS_COMPOSITE
    }

    /// Area enclosed by the symbol: the first part is the outer boundary and
    /// every further part is subtracted as a hole, by absolute shoelace area
    /// and regardless of winding. Parts are treated as implicitly closed.
    /// Returns 0 when no parts have been derived.
    pub fn area(&self) -> Real {
        let Some((outer, holes)) = self.parts.split_first() else {
            return 0.0;
        };
        let mut area = ring_area(outer);
        for hole in holes {
            area -= ring_area(hole);
        }
        area
    }

    /// Serialize the control points as
    /// `{"controlPoints":[{"x":…,"y":…},…]}`, in input order.
    ///
    /// The output is deterministic and round-trips through
    /// [`control_points_from_json`](Self::control_points_from_json).
    pub fn control_points_json(&self) -> Result<String, PlottingError> {
        json::control_points_to_json(&self.control_points)
    }

    /// Parse control points back out of serialized text.
    ///
    /// Accepts any text containing brace-delimited coordinate objects; see
    /// [`json::control_points_from_json`] for the exact contract.
    pub fn control_points_from_json(text: &str) -> Result<Vec<Point2<Real>>, PlottingError> {
        json::control_points_from_json(text)
    }
}

/// Absolute shoelace area of one part, implicitly closed.
fn ring_area(part: &LineString<Real>) -> Real {
    Polygon::new(part.clone(), Vec::new()).unsigned_area()
}
