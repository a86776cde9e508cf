//! Zenith Angle State
//!
//! The three user-facing angles that describe the graph's orientation under
//! a zenith convention:
//! - **vertical**: angle between the zenith axis and the viewing direction
//! - **horizontal**: rotation of the camera's position around the zenith axis
//! - **screw**: roll of the camera about its own viewing axis
//!
//! All angles are radians. Vertical lives in [0, pi]; horizontal and screw
//! wrap into [0, 2*pi). The triple is a *derived* view of the orientation
//! matrix - see `camera::orientation` for the synchronization rules.

use std::f64::consts::TAU;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default vertical angle in radians (slightly above the equator).
pub const DEFAULT_VERTICAL: f64 = 1.04;
/// Default horizontal angle in radians (slightly off-axis).
pub const DEFAULT_HORIZONTAL: f64 = 0.65;
/// Default screw angle in radians (no roll).
pub const DEFAULT_SCREW: f64 = 0.0;

// ============================================================================
// ANGLE STATE
// ============================================================================

/// The zenith-angle triple (vertical, horizontal, screw) in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleState {
    /// Angle between the zenith axis and the viewing direction, in [0, pi].
    pub vertical: f64,
    /// Rotation around the zenith axis, in [0, 2*pi).
    pub horizontal: f64,
    /// Camera roll about its own viewing axis, in [0, 2*pi).
    pub screw: f64,
}

impl AngleState {
    /// The zero triple: the canonical view of the current zenith mode.
    pub const ZERO: Self = Self {
        vertical: 0.0,
        horizontal: 0.0,
        screw: 0.0,
    };

    /// Create an angle state, wrapping horizontal and screw into [0, 2*pi).
    ///
    /// Vertical is taken as-is; callers that accept arbitrary input should
    /// clamp it to [0, pi] (slider widgets never produce values outside it).
    pub fn new(vertical: f64, horizontal: f64, screw: f64) -> Self {
        Self {
            vertical,
            horizontal: normalize_angle(horizontal),
            screw: normalize_angle(screw),
        }
    }
}

impl Default for AngleState {
    /// The library's default view: a mild tilt and turn that shows all three
    /// box faces of a fresh plot.
    fn default() -> Self {
        Self {
            vertical: DEFAULT_VERTICAL,
            horizontal: DEFAULT_HORIZONTAL,
            screw: DEFAULT_SCREW,
        }
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Magnitude above which wrapping switches to a single `rem_euclid`.
///
/// Past a few dozen turns the iterative wrap gains nothing, and far
/// enough out (around 1e17) `angle - TAU` rounds back to `angle`, so the
/// loop alone would never terminate on inputs a hand-edited settings
/// file can contain.
const MAX_ITERATIVE_WRAP: f64 = 64.0 * TAU;

/// Wrap an angle into [0, 2*pi) by repeatedly adding or subtracting 2*pi.
///
/// Iteration (rather than a single fmod) keeps the result bit-compatible
/// with the wrapping the solvers apply to their own intermediate angles;
/// magnitudes beyond [`MAX_ITERATIVE_WRAP`] are reduced up front.
pub fn normalize_angle(mut angle: f64) -> f64 {
    if angle.abs() >= MAX_ITERATIVE_WRAP {
        angle = angle.rem_euclid(TAU);
    }
    while angle < 0.0 {
        angle += TAU;
    }
    while angle >= TAU {
        angle -= TAU;
    }
    angle
}

// ============================================================================
// TESTS
// ============================================================================
