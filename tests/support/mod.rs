//! Test support library
//! Provides helper functions shared by the integration tests.

use plotsym::float_types::Real;

/// Approximate scalar comparison with an absolute tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
