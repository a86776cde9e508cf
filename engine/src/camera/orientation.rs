//! Camera Orientation Facade
//!
//! [`CameraOrientation`] owns the orientation matrix and keeps the derived
//! zenith angles consistent with it. The matrix is the single source of
//! truth; the angle triple is a memoized view that is recomputed by the
//! inverse solver the first time it is read after any matrix write. Angle
//! setters go the other way: they update the triple and rebuild the matrix
//! through the forward solver, so the two representations can never diverge.
//!
//! [`SharedCameraOrientation`] wraps the facade in a coarse per-instance
//! lock for the plotter's two-thread call pattern: the UI thread applies
//! mode switches, angle writes, and drag deltas synchronously, while the
//! render thread takes a cheap matrix snapshot once per frame and never
//! holds the lock while rasterizing.

use std::cell::Cell;
use std::f64::consts::PI;
use std::sync::{Arc, Mutex, PoisonError};

use crate::camera::angles::{normalize_angle, AngleState};
use crate::camera::matrix::{OrientationMatrix, ViewAxis};
use crate::camera::zenith::ZenithMode;
use crate::camera::{forward, inverse};

// ============================================================================
// CAMERA ORIENTATION
// ============================================================================

/// The graph's orientation state: zenith mode, matrix, and cached angles.
#[derive(Clone, Debug)]
pub struct CameraOrientation {
    /// Active zenith convention.
    mode: ZenithMode,
    /// The orientation matrix (authoritative representation).
    matrix: OrientationMatrix,
    /// Memoized angle triple; `None` after a direct matrix mutation until
    /// the next angle read runs the inverse solver.
    cached_angles: Cell<Option<AngleState>>,
}

impl CameraOrientation {
    /// Create a camera in `ZZenith` mode at the library's default view
    /// (vertical 1.04, horizontal 0.65, no screw).
    pub fn new() -> Self {
        Self::with_mode(ZenithMode::ZZenith)
    }

    /// Create a camera in the given mode at the default view angles.
    pub fn with_mode(mode: ZenithMode) -> Self {
        let angles = AngleState::default();
        Self {
            mode,
            matrix: forward::solve(mode, angles),
            cached_angles: Cell::new(Some(angles)),
        }
    }

    // ========================================================================
    // ZENITH MODE
    // ========================================================================

    /// The active zenith convention.
    #[inline]
    pub fn zenith_mode(&self) -> ZenithMode {
        self.mode
    }

    /// Switch the zenith convention.
    ///
    /// A discrete transition: the angles reset to exactly (0, 0, 0) and the
    /// matrix to the mode's canonical basis permutation. No partial state is
    /// ever observable.
    pub fn set_zenith_mode(&mut self, mode: ZenithMode) {
        self.mode = mode;
        self.matrix = mode.canonical_matrix();
        self.cached_angles.set(Some(AngleState::ZERO));
    }

    // ========================================================================
    // ANGLES
    // ========================================================================

    /// The current angle triple, derived from the matrix on demand.
    pub fn angles(&self) -> AngleState {
        match self.cached_angles.get() {
            Some(angles) => angles,
            None => {
                let angles = inverse::solve(self.mode, &self.matrix);
                self.cached_angles.set(Some(angles));
                angles
            }
        }
    }

    /// Vertical angle in radians, in [0, pi].
    #[inline]
    pub fn vertical_angle(&self) -> f64 {
        self.angles().vertical
    }

    /// Horizontal angle in radians, in [0, 2*pi).
    #[inline]
    pub fn horizontal_angle(&self) -> f64 {
        self.angles().horizontal
    }

    /// Screw (roll) angle in radians, in [0, 2*pi).
    #[inline]
    pub fn screw_angle(&self) -> f64 {
        self.angles().screw
    }

    /// Set the vertical angle (clamped to [0, pi]) and rebuild the matrix.
    pub fn set_vertical_angle(&mut self, vertical: f64) {
        let mut angles = self.angles();
        angles.vertical = vertical.clamp(0.0, PI);
        self.set_angles(angles);
    }

    /// Set the horizontal angle (wrapped into [0, 2*pi)) and rebuild the
    /// matrix.
    pub fn set_horizontal_angle(&mut self, horizontal: f64) {
        let mut angles = self.angles();
        angles.horizontal = normalize_angle(horizontal);
        self.set_angles(angles);
    }

    /// Set the screw angle (wrapped into [0, 2*pi)) and rebuild the matrix.
    pub fn set_screw_angle(&mut self, screw: f64) {
        let mut angles = self.angles();
        angles.screw = normalize_angle(screw);
        self.set_angles(angles);
    }

    /// Set the whole triple at once and rebuild the matrix.
    pub fn set_angles(&mut self, angles: AngleState) {
        self.matrix = forward::solve(self.mode, angles);
        self.cached_angles.set(Some(angles));
    }

    // ========================================================================
    // DRAG ROTATIONS
    // ========================================================================

    /// Rotate about the view X axis (screen horizontal) by `delta` radians.
    pub fn rotate_around_view_x(&mut self, delta: f64) {
        self.rotate_around(ViewAxis::X, delta);
    }

    /// Rotate about the view Y axis (screen vertical) by `delta` radians.
    pub fn rotate_around_view_y(&mut self, delta: f64) {
        self.rotate_around(ViewAxis::Y, delta);
    }

    /// Rotate about the view Z axis (viewing direction) by `delta` radians.
    pub fn rotate_around_view_z(&mut self, delta: f64) {
        self.rotate_around(ViewAxis::Z, delta);
    }

    /// Apply an incremental camera-relative rotation to the matrix and drop
    /// the angle cache; the next angle read re-derives it.
    // TODO: decide with stakeholders whether to re-orthonormalize (e.g.
    // Gram-Schmidt) after long drag sessions; repeated compositions are
    // currently left to accumulate floating-point drift.
    fn rotate_around(&mut self, axis: ViewAxis, delta: f64) {
        self.matrix.apply_view_rotation(axis, delta);
        self.cached_angles.set(None);
    }

    // ========================================================================
    // MATRIX ACCESS
    // ========================================================================

    /// The orientation matrix.
    #[inline]
    pub fn matrix(&self) -> &OrientationMatrix {
        &self.matrix
    }

    /// Row-major copy of the matrix for the renderer.
    #[inline]
    pub fn matrix_rows(&self) -> [[f64; 3]; 3] {
        self.matrix.to_rows_array()
    }
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SHARED HANDLE
// ============================================================================

/// A cloneable, thread-safe handle to one [`CameraOrientation`].
///
/// All access goes through a coarse per-instance lock, so no reader ever
/// observes a matrix/angle pair mid-update. Every operation is O(1)
/// closed-form arithmetic; nothing blocks beyond the lock itself.
#[derive(Clone)]
pub struct SharedCameraOrientation {
    inner: Arc<Mutex<CameraOrientation>>,
}

impl SharedCameraOrientation {
    /// Wrap a camera in a shared handle.
    pub fn new(camera: CameraOrientation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(camera)),
        }
    }

    /// Run a closure against the locked camera.
    ///
    /// This is how the UI thread applies mode switches, angle writes, and
    /// drag deltas; each call is applied synchronously before returning.
    /// A poisoned lock is recovered: the camera's state is plain arithmetic
    /// data and is never left mid-update by a panicking writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut CameraOrientation) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Row-major matrix snapshot for the render thread.
    ///
    /// Takes the lock only long enough to copy nine doubles; the renderer
    /// uses whatever matrix is current and never waits for a specific
    /// update.
    pub fn matrix_snapshot(&self) -> [[f64; 3]; 3] {
        self.with(|camera| camera.matrix_rows())
    }

    /// Snapshot of the current angle triple (for the slider widgets).
    pub fn angles_snapshot(&self) -> AngleState {
        self.with(|camera| camera.angles())
    }
}

impl Default for SharedCameraOrientation {
    fn default() -> Self {
        Self::new(CameraOrientation::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================
