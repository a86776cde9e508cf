//! View Settings Save/Load
//!
//! JSON file format for persisting the camera view between sessions. The
//! file records `(zenith_mode, vertical, horizontal, screw)`; the matrix is
//! deliberately not stored because it is always reconstructible through the
//! forward solver, and storing both would reintroduce the possibility of a
//! file with diverging representations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{AngleState, CameraOrientation, ZenithMode};

// ============================================================================
// VIEW SETTINGS
// ============================================================================

/// The persisted camera view: zenith convention plus angle triple (radians).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewSettings {
    /// Active zenith convention.
    pub zenith_mode: ZenithMode,
    /// Vertical angle, expected in [0, pi].
    pub vertical: f64,
    /// Horizontal angle, expected in [0, 2*pi).
    pub horizontal: f64,
    /// Screw angle, expected in [0, 2*pi).
    pub screw: f64,
}

impl ViewSettings {
    /// Capture the current view of a camera.
    pub fn capture(camera: &CameraOrientation) -> Self {
        let angles = camera.angles();
        Self {
            zenith_mode: camera.zenith_mode(),
            vertical: angles.vertical,
            horizontal: angles.horizontal,
            screw: angles.screw,
        }
    }

    /// Rebuild a camera from these settings.
    ///
    /// The matrix is reconstructed through the forward solver. Non-finite
    /// angles are rejected before they can reach the solver; anything
    /// finite is usable (the setters wrap and clamp as usual).
    pub fn restore(&self) -> Result<CameraOrientation, ViewSettingsError> {
        self.validate()?;
        let mut camera = CameraOrientation::with_mode(self.zenith_mode);
        camera.set_angles(AngleState::new(
            self.vertical.clamp(0.0, std::f64::consts::PI),
            self.horizontal,
            self.screw,
        ));
        Ok(camera)
    }

    /// Reject NaN/infinite angles (a hand-edited or truncated file).
    fn validate(&self) -> Result<(), ViewSettingsError> {
        for (field, value) in [
            ("vertical", self.vertical),
            ("horizontal", self.horizontal),
            ("screw", self.screw),
        ] {
            if !value.is_finite() {
                return Err(ViewSettingsError::NonFiniteAngle { field, value });
            }
        }
        Ok(())
    }

    // ========================================================================
    // SAVE / LOAD
    // ========================================================================

    /// Write the settings to disk as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ViewSettingsError> {
        let json = serde_json::to_vec_pretty(self)?;

        // Ensure parent directories exist.
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read and validate settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ViewSettingsError> {
        let data = std::fs::read(path)?;
        let settings: ViewSettings = serde_json::from_slice(&data)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ViewSettings {
    /// The startup view: Z zenith at the library's default angles.
    fn default() -> Self {
        Self::capture(&CameraOrientation::new())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur during view settings save/load.
#[derive(Debug)]
pub enum ViewSettingsError {
    /// An angle in the file is NaN or infinite.
    NonFiniteAngle {
        /// Which angle field was invalid.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ViewSettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewSettingsError::NonFiniteAngle { field, value } => {
                write!(f, "non-finite {field} angle in view settings: {value}")
            }
            ViewSettingsError::IoError(e) => write!(f, "IO error: {e}"),
            ViewSettingsError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ViewSettingsError {}

impl From<std::io::Error> for ViewSettingsError {
    fn from(e: std::io::Error) -> Self {
        ViewSettingsError::IoError(e)
    }
}

impl From<serde_json::Error> for ViewSettingsError {
    fn from(e: serde_json::Error) -> Self {
        ViewSettingsError::JsonError(e)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_capture_default_camera() {
        let settings = ViewSettings::default();
        assert_eq!(settings.zenith_mode, ZenithMode::ZZenith);
        assert!((settings.vertical - 1.04).abs() < EPSILON);
        assert!((settings.horizontal - 0.65).abs() < EPSILON);
        assert!(settings.screw.abs() < EPSILON);
    }

    #[test]
    fn test_restore_rebuilds_matrix_through_forward_solver() {
        let mut camera = CameraOrientation::with_mode(ZenithMode::YZenith);
        camera.set_angles(AngleState::new(0.9, 2.4, 0.15));

        let settings = ViewSettings::capture(&camera);
        let restored = settings.restore().unwrap();

        assert_eq!(restored.zenith_mode(), ZenithMode::YZenith);
        assert!(
            restored.matrix().max_abs_diff(camera.matrix()) < EPSILON,
            "restored camera should carry the same matrix"
        );
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join("plot3d_view_settings_round_trip");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("view.json");

        let settings = ViewSettings {
            zenith_mode: ZenithMode::XZenith,
            vertical: 1.2,
            horizontal: 0.3,
            screw: 4.0,
        };
        settings.save(&path).unwrap();
        let loaded = ViewSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_restore_accepts_huge_finite_angles() {
        // A hand-edited file can hold any finite double; restore must wrap
        // it rather than spin in the normalization loop.
        let settings = ViewSettings {
            zenith_mode: ZenithMode::ZZenith,
            vertical: 0.8,
            horizontal: 1e300,
            screw: -1e300,
        };
        let camera = settings.restore().unwrap();
        let angles = camera.angles();
        assert!((0.0..std::f64::consts::TAU).contains(&angles.horizontal));
        assert!((0.0..std::f64::consts::TAU).contains(&angles.screw));
        assert!(camera.matrix().is_special_orthogonal(EPSILON));
    }

    #[test]
    fn test_restore_rejects_nan() {
        let settings = ViewSettings {
            zenith_mode: ZenithMode::ZZenith,
            vertical: f64::NAN,
            horizontal: 0.0,
            screw: 0.0,
        };
        match settings.restore() {
            Err(ViewSettingsError::NonFiniteAngle { field: "vertical", .. }) => {}
            other => panic!("expected NonFiniteAngle, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = std::env::temp_dir().join("plot3d_view_settings_malformed");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("broken.json");
        std::fs::write(&path, b"{ \"zenith_mode\": ").unwrap();

        match ViewSettings::load(&path) {
            Err(ViewSettingsError::JsonError(_)) => {}
            other => panic!("expected JsonError, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("plot3d_view_settings_nonexistent/view.json");
        match ViewSettings::load(&path) {
            Err(ViewSettingsError::IoError(_)) => {}
            other => panic!("expected IoError, got {other:?}"),
        }
    }
}
