//! Camera Module
//!
//! Provides the camera orientation engine for the plotter. This module is
//! window-system agnostic - it only deals with orientation state and math.
//!
//! The graph's orientation in the view frame is a single logical state with
//! two representations: a 3x3 rotation matrix (what the renderer consumes)
//! and a triple of zenith angles (what the UI sliders expose). The
//! [`forward`] solver turns angles into the matrix, the [`inverse`] solver
//! recovers angles from the matrix, and [`CameraOrientation`] keeps the two
//! synchronized under the selected [`ZenithMode`].

pub mod angles;
pub mod forward;
pub mod inverse;
pub mod matrix;
pub mod orientation;
pub mod zenith;

pub use angles::{normalize_angle, AngleState};
pub use matrix::{OrientationMatrix, ViewAxis};
pub use orientation::{CameraOrientation, SharedCameraOrientation};
pub use zenith::ZenithMode;
