//! Configuration Module
//!
//! Persistence for plotter view state. Configuration files store only the
//! zenith mode and the angle triple - never the raw matrix - and the
//! forward solver reconstructs the matrix on load.

pub mod view_settings;

pub use view_settings::{ViewSettings, ViewSettingsError};
