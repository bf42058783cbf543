//! Control-point text interchange.
//!
//! The serialized form is a single-key object,
//! `{"controlPoints":[{"x":…,"y":…},…]}`, with coordinates in input order.
//! Deserialization is deliberately looser: any text containing brace-delimited
//! coordinate objects is accepted, each fragment parsed independently with
//! [`serde_json`] (never evaluated), and malformed fragments fail with
//! [`PlottingError::MalformedControlPointText`].

use crate::errors::PlottingError;
use crate::float_types::Real;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct ControlPointsRecord {
    #[serde(rename = "controlPoints")]
    control_points: Vec<CoordRecord>,
}

#[derive(Serialize, Deserialize)]
struct CoordRecord {
    x: Real,
    y: Real,
}

/// Serialize control points as `{"controlPoints":[{"x":…,"y":…},…]}`.
///
/// Field order is `x` then `y` and the output is deterministic, so equal
/// inputs always serialize to equal text.
pub fn control_points_to_json(points: &[Point2<Real>]) -> Result<String, PlottingError> {
    let record = ControlPointsRecord {
        control_points: points
            .iter()
            .map(|p| CoordRecord { x: p.x, y: p.y })
            .collect(),
    };
    serde_json::to_string(&record)
        .map_err(|err| PlottingError::MalformedControlPointText(err.to_string()))
}

/// Extract every single-level `{…}` fragment of `text`, in order, and parse
/// each as an `{x, y}` coordinate object.
///
/// Text around and between the fragments is ignored, so both the full
/// serialized form and a bare `[{…},{…}]` array parse identically. Zero
/// fragments yield an empty sequence.
///
/// # Errors
///
/// [`PlottingError::MalformedControlPointText`] if any fragment is not a
/// well-formed coordinate object.
pub fn control_points_from_json(text: &str) -> Result<Vec<Point2<Real>>, PlottingError> {
    let mut points = Vec::new();
    for fragment in coordinate_fragments(text) {
        let coordinate: CoordRecord = serde_json::from_str(fragment).map_err(|err| {
            PlottingError::MalformedControlPointText(format!("{fragment}: {err}"))
        })?;
        points.push(Point2::new(coordinate.x, coordinate.y));
    }
    Ok(points)
}

/// The single-level brace-delimited spans of `text`: each `{…}` containing no
/// nested brace, shortest match, left to right.
fn coordinate_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut open = None;
    for (index, byte) in text.bytes().enumerate() {
        match byte {
            // A nested open brace restarts the span: only the innermost counts.
            b'{' => open = Some(index),
            b'}' => {
                if let Some(start) = open.take() {
                    fragments.push(&text[start..=index]);
                }
            },
            _ => {},
        }
    }
    fragments
}
