// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance for the parallel-direction test in
/// [`crate::vector::line_intersection`].
///
/// Two direction vectors count as parallel when the magnitude of their cross
/// product is at most this value. The default of `0.0` keeps the historical
/// exact-zero comparison; near-parallel directions then still intersect, far
/// away. Override it:
///  1) **Build-time**: set env var `PLOTSYM_PARALLEL_TOLERANCE`
///     (e.g. `PLOTSYM_PARALLEL_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_parallel_tolerance`] once before using the library
static PARALLEL_TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Returns the current parallel-direction tolerance.
/// If not set yet, it tries `PLOTSYM_PARALLEL_TOLERANCE` (parsed as the active
/// `Real`) and falls back to exact zero.
pub fn parallel_tolerance() -> Real {
    *PARALLEL_TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided, inherited by dependencies
        if let Some(environment_variable) = option_env!("PLOTSYM_PARALLEL_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(0.0);
            }
        }
        0.0
    })
}

/// Set the parallel-direction tolerance programmatically once (subsequent calls
/// are ignored). Call near program start:
/// `plotsym::float_types::set_parallel_tolerance(1e-9);`
pub fn set_parallel_tolerance(value: Real) {
    let _ = PARALLEL_TOLERANCE_CELL.set(value.max(0.0));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Frac Pi 3
/// π/3
#[cfg(feature = "f32")]
pub const FRAC_PI_3: Real = core::f32::consts::FRAC_PI_3;
/// π/3
#[cfg(feature = "f64")]
pub const FRAC_PI_3: Real = core::f64::consts::FRAC_PI_3;

// Frac Pi 4
/// π/4
#[cfg(feature = "f32")]
pub const FRAC_PI_4: Real = core::f32::consts::FRAC_PI_4;
/// π/4
#[cfg(feature = "f64")]
pub const FRAC_PI_4: Real = core::f64::consts::FRAC_PI_4;

// Frac Pi 6
/// π/6
#[cfg(feature = "f32")]
pub const FRAC_PI_6: Real = core::f32::consts::FRAC_PI_6;
/// π/6
#[cfg(feature = "f64")]
pub const FRAC_PI_6: Real = core::f64::consts::FRAC_PI_6;
