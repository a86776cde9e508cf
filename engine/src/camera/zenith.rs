//! Zenith Modes
//!
//! The plotter supports three mutually exclusive conventions for which graph
//! axis plays the "pole" in the angle decomposition. Each mode fixes a
//! canonical orientation (the matrix at vertical = horizontal = screw = 0)
//! that is a pure permutation of the graph axes onto the view axes:
//!
//! | mode       | view Z (pole) | view X | view Y |
//! |------------|---------------|--------|--------|
//! | `ZZenith`  | graph Z       | graph X| graph Y|
//! | `XZenith`  | graph X       | graph Y| graph Z|
//! | `YZenith`  | graph Y       | graph Z| graph X|
//!
//! All three follow the same cyclic pattern: the zenith axis faces the
//! viewer, its successor lands on screen-right, the remaining axis on
//! screen-up. The solvers exploit this: one algorithm, three column
//! selections.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::matrix::OrientationMatrix;

/// Which graph axis is treated as the pole for the angle decomposition.
///
/// A closed set dispatched by exhaustive matching; the conventions share no
/// behavior besides which axis plays which role. Changing the mode is a
/// discrete transition handled by `CameraOrientation::set_zenith_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZenithMode {
    /// Graph X is the pole.
    XZenith,
    /// Graph Y is the pole.
    YZenith,
    /// Graph Z is the pole (the plotter's startup convention).
    ZZenith,
}

impl ZenithMode {
    /// The orientation at zero angles: the mode's basis permutation.
    pub fn canonical_matrix(self) -> OrientationMatrix {
        match self {
            // Columns are graph X/Y/Z expressed in view coordinates.
            ZenithMode::XZenith => OrientationMatrix::from_cols(DVec3::Z, DVec3::X, DVec3::Y),
            ZenithMode::YZenith => OrientationMatrix::from_cols(DVec3::Y, DVec3::Z, DVec3::X),
            ZenithMode::ZZenith => OrientationMatrix::IDENTITY,
        }
    }

    /// Matrix column index of the zenith (pole) axis.
    #[inline]
    pub fn zenith_column(self) -> usize {
        match self {
            ZenithMode::XZenith => 0,
            ZenithMode::YZenith => 1,
            ZenithMode::ZZenith => 2,
        }
    }

    /// Column index of the graph axis that sits on view X (screen right) in
    /// the canonical orientation. The inverse solver's general branch reads
    /// the horizontal angle off this column.
    #[inline]
    pub fn azimuth_reference_column(self) -> usize {
        match self {
            ZenithMode::XZenith => 1,
            ZenithMode::YZenith => 2,
            ZenithMode::ZZenith => 0,
        }
    }

    /// Column index of the graph axis that sits on view Y (screen up) in the
    /// canonical orientation. At the poles the zenith column is degenerate
    /// in the view plane, so the pole branch reads the azimuth off this
    /// column instead.
    #[inline]
    pub fn pole_reference_column(self) -> usize {
        match self {
            ZenithMode::XZenith => 2,
            ZenithMode::YZenith => 0,
            ZenithMode::ZZenith => 1,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
