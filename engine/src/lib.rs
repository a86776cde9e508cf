//! Plot3D Engine Library
//!
//! Core library for the plot3d desktop 3D-graph plotter. This crate owns the
//! camera orientation engine: the piece that keeps a 3x3 rotation matrix and
//! the three user-facing zenith angles (vertical, horizontal, screw)
//! continuously consistent with each other, under three mutually exclusive
//! zenith-axis conventions, including the gimbal-lock singularities.
//!
//! The renderer, the GUI shell, and the data decoders are external
//! collaborators: the renderer reads only the matrix, the UI reads and
//! writes only angles and drag deltas, and the persistence layer stores
//! only `(ZenithMode, vertical, horizontal, screw)`.
//!
//! # Modules
//!
//! - [`camera`] - Orientation matrix, zenith modes, forward/inverse solvers,
//!   and the `CameraOrientation` facade that keeps them synchronized
//! - [`config`] - View settings persistence (JSON save/load)
//!
//! # Example
//!
//! ```ignore
//! use plot3d_engine::camera::{CameraOrientation, ZenithMode};
//!
//! let mut camera = CameraOrientation::new();
//!
//! // Slider input: set angles, the matrix follows.
//! camera.set_vertical_angle(1.2);
//! camera.set_horizontal_angle(0.4);
//!
//! // Mouse drag: rotate the matrix, the angles follow.
//! camera.rotate_around_view_y(0.01);
//!
//! // Render pass: read the matrix, row-major.
//! let m = camera.matrix_rows();
//!
//! // Menu selection: switch convention, resets to the canonical view.
//! camera.set_zenith_mode(ZenithMode::XZenith);
//! ```

pub mod camera;
pub mod config;
