//! Forward Solver (angles -> matrix)
//!
//! Builds the orientation matrix from a zenith-angle triple by composing
//! three elementary rotations about *view* axes onto the mode's canonical
//! basis permutation, in this fixed order:
//!
//! ```text
//! result = Rz(-screw) * Rx(-vertical) * Rz(-horizontal) * canonical
//! ```
//!
//! The negations reflect that rotating the *camera* by +angle is equivalent
//! to counter-rotating the *graph* by -angle. Order and signs must match the
//! inverse solver exactly or angle/matrix round trips break.

use crate::camera::angles::AngleState;
use crate::camera::matrix::{OrientationMatrix, ViewAxis};
use crate::camera::zenith::ZenithMode;

/// Compute the orientation matrix for an angle triple under a zenith mode.
pub fn solve(mode: ZenithMode, angles: AngleState) -> OrientationMatrix {
    let mut matrix = mode.canonical_matrix();
    matrix.apply_view_rotation(ViewAxis::Z, -angles.horizontal);
    matrix.apply_view_rotation(ViewAxis::X, -angles.vertical);
    matrix.apply_view_rotation(ViewAxis::Z, -angles.screw);
    matrix
}

// ============================================================================
// TESTS
// ============================================================================
