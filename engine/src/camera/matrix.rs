//! Orientation Matrix
//!
//! A 3x3 proper rotation matrix describing the graph's orientation in the
//! view frame. Columns are the graph's X/Y/Z unit axes expressed in view
//! coordinates (view +X = screen right, +Y = screen up, +Z = toward the
//! viewer).
//!
//! Incremental "drag" rotations are expressed about the *view* axes and
//! left-multiplied onto the matrix, so a drag always feels camera-relative
//! no matter how the graph is currently turned.

use glam::{DMat3, DVec3};

// ============================================================================
// VIEW AXIS ENUM
// ============================================================================

/// Axes of the fixed view (camera) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAxis {
    /// Screen right.
    X,
    /// Screen up.
    Y,
    /// Toward the viewer.
    Z,
}

// ============================================================================
// ORIENTATION MATRIX
// ============================================================================

/// A 3x3 orthonormal matrix with determinant +1.
///
/// Column `i` is graph axis `i` (X=0, Y=1, Z=2) expressed in the view frame.
/// The matrix is owned by `CameraOrientation` and mutated only through the
/// forward solver and [`OrientationMatrix::apply_view_rotation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationMatrix(DMat3);

impl OrientationMatrix {
    /// The identity orientation: graph axes aligned with view axes.
    pub const IDENTITY: Self = Self(DMat3::IDENTITY);

    /// Build from three columns (graph X/Y/Z axes in view coordinates).
    ///
    /// The caller is responsible for passing an orthonormal right-handed
    /// triple; this is only used for the canonical basis permutations.
    pub const fn from_cols(x_axis: DVec3, y_axis: DVec3, z_axis: DVec3) -> Self {
        Self(DMat3::from_cols(x_axis, y_axis, z_axis))
    }

    /// The view-frame vector of graph axis `index` (X=0, Y=1, Z=2).
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn column(&self, index: usize) -> DVec3 {
        self.0.col(index)
    }

    /// Left-multiply an elementary rotation about a view axis:
    /// `self = R(axis, angle) * self`.
    ///
    /// Angle sign follows the right-hand rule about the stated view axis.
    /// No renormalization is performed after composition.
    pub fn apply_view_rotation(&mut self, axis: ViewAxis, angle: f64) {
        let rotation = match axis {
            ViewAxis::X => DMat3::from_rotation_x(angle),
            ViewAxis::Y => DMat3::from_rotation_y(angle),
            ViewAxis::Z => DMat3::from_rotation_z(angle),
        };
        self.0 = rotation * self.0;
    }

    /// Row-major export for the renderer: `rows[r][c]` is row `r`, column `c`.
    ///
    /// The renderer multiplies graph-space coordinates by these rows once per
    /// frame to transform into view space before projection.
    pub fn to_rows_array(&self) -> [[f64; 3]; 3] {
        [
            self.0.row(0).to_array(),
            self.0.row(1).to_array(),
            self.0.row(2).to_array(),
        ]
    }

    /// Matrix determinant (+1 for a proper rotation).
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    /// Diagnostic: columns unit length and pairwise orthogonal, det near +1.
    ///
    /// Used by tests and debug assertions. Repeated incremental rotations are
    /// never renormalized, so long interactive sessions can drift; this is
    /// how the drift would be measured.
    pub fn is_special_orthogonal(&self, epsilon: f64) -> bool {
        let x = self.0.col(0);
        let y = self.0.col(1);
        let z = self.0.col(2);

        (x.length() - 1.0).abs() < epsilon
            && (y.length() - 1.0).abs() < epsilon
            && (z.length() - 1.0).abs() < epsilon
            && x.dot(y).abs() < epsilon
            && y.dot(z).abs() < epsilon
            && z.dot(x).abs() < epsilon
            && (self.determinant() - 1.0).abs() < epsilon
    }

    /// Largest absolute element-wise difference to another matrix.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        let mut max = 0.0_f64;
        for col in 0..3 {
            let d = (self.0.col(col) - other.0.col(col)).abs();
            max = max.max(d.x).max(d.y).max(d.z);
        }
        max
    }
}

impl Default for OrientationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// TESTS
// ============================================================================
