//! A 2D geometry kernel for **military-style plotting symbols** built from a small
//! set of user-placed control points.
//!
//! Given 2-N control points, the kernel derives all auxiliary geometry (midpoints,
//! arrow barbs, line intersections, angular bisectors, and the two apex candidates
//! of a triangle given its base and base angles) needed to assemble compound
//! symbols (arrows, pincers, multi-segment lines with enclosed areas).
//!
//! Two layers cooperate:
//! - [`vector`]: stateless vector-math primitives over [`nalgebra`] points and vectors.
//! - [`multiline`]: [`MultiLineSymbol`], which owns an ordered control-point list
//!   and re-derives a collection of [`geo::LineString`] parts through a
//!   caller-supplied [`ShapeDeriver`] whenever the control points are replaced.
//!
//! Rendering, styling, and coordinate-reference-system transforms are the caller's
//! concern; the kernel produces pure geometric results.
//!
//! # Features
//! - **f64** (default): use f64 as Real
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod json;
pub mod multiline;
pub mod symbols;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::PlottingError;
pub use multiline::{MultiLineSymbol, NoShape, ShapeDeriver};
pub use symbols::PolylineArrow;
