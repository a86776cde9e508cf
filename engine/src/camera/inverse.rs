//! Inverse Solver (matrix -> angles)
//!
//! Recovers the zenith-angle triple from an orientation matrix. This is the
//! hard direction: the decomposition is unique except when the zenith axis
//! points straight at or away from the viewer (gimbal lock), where only the
//! combined azimuthal rotation is observable and a dedicated branch assigns
//! it entirely to the horizontal angle.
//!
//! The algorithm is identical for all three modes; only which matrix columns
//! play the zenith / reference roles changes (see `ZenithMode`).
//!
//! For a matrix produced by the forward solver away from the poles,
//! `solve(mode, forward::solve(mode, a)) == a` to floating-point accuracy.
//! At the poles the recovered triple differs from the input (screw folds
//! into horizontal) but forward-solving it reproduces the same matrix.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;

use crate::camera::angles::{normalize_angle, AngleState};
use crate::camera::matrix::OrientationMatrix;
use crate::camera::zenith::ZenithMode;

/// Pole detection threshold on the zenith column's view-plane components.
///
/// Below this the in-plane direction of the zenith axis is numerically
/// meaningless and the pole branch takes over.
pub const POLE_EPSILON: f64 = 1e-10;

/// Recover the angle triple from an orientation matrix under a zenith mode.
pub fn solve(mode: ZenithMode, matrix: &OrientationMatrix) -> AngleState {
    let zenith = matrix.column(mode.zenith_column());

    if zenith.x.abs() < POLE_EPSILON && zenith.y.abs() < POLE_EPSILON {
        solve_at_pole(mode, matrix, zenith)
    } else {
        solve_general(mode, matrix, zenith)
    }
}

// ============================================================================
// POLE BRANCH
// ============================================================================

/// Gimbal lock: the zenith axis is on the view-Z axis.
///
/// Vertical snaps to 0 or pi and screw to 0; the whole azimuthal rotation is
/// read off the pole-reference column (the axis that sits on screen-up in
/// the canonical orientation) and folded into horizontal. The offsets in the
/// two sub-branches make the result agree with the general branch's limit,
/// so an angle refresh at the pole never changes the matrix.
fn solve_at_pole(mode: ZenithMode, matrix: &OrientationMatrix, zenith: DVec3) -> AngleState {
    let reference = matrix.column(mode.pole_reference_column());

    if zenith.z > 0.0 {
        // Zenith axis facing the viewer.
        AngleState {
            vertical: 0.0,
            horizontal: normalize_angle(FRAC_PI_2 - reference.y.atan2(reference.x)),
            screw: 0.0,
        }
    } else {
        // Zenith axis facing away.
        AngleState {
            vertical: PI,
            horizontal: normalize_angle(reference.y.atan2(reference.x) - 1.5 * PI),
            screw: 0.0,
        }
    }
}

// ============================================================================
// GENERAL BRANCH
// ============================================================================

/// Non-degenerate decomposition.
///
/// Vertical and screw come directly from the zenith column. For horizontal,
/// build the auxiliary frame the azimuth-reference axis would occupy at
/// horizontal = 0 (`dash_a` in the view plane, `dash_b` completing it via
/// the cross product) and read the angle from the actual column's
/// projections onto that frame.
fn solve_general(mode: ZenithMode, matrix: &OrientationMatrix, zenith: DVec3) -> AngleState {
    // zenith.z is in [-1, 1] for any rotation matrix; the clamp only guards
    // accumulated round-off in long drag sessions.
    let vertical = zenith.z.clamp(-1.0, 1.0).acos();
    let screw = normalize_angle(FRAC_PI_2 - zenith.y.atan2(zenith.x));

    let dash_a = DVec3::new(screw.cos(), -screw.sin(), 0.0);
    let dash_b = zenith.cross(dash_a);

    let reference = matrix.column(mode.azimuth_reference_column());
    let ux = reference.dot(dash_a);
    let uy = reference.dot(dash_b);
    let horizontal = normalize_angle(-uy.atan2(ux));

    AngleState {
        vertical,
        horizontal,
        screw,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::forward;
    use crate::camera::matrix::ViewAxis;
    use std::f64::consts::TAU;

    const MODES: [ZenithMode; 3] = [
        ZenithMode::XZenith,
        ZenithMode::YZenith,
        ZenithMode::ZZenith,
    ];

    fn assert_angles_eq(actual: AngleState, expected: AngleState, tol: f64, context: &str) {
        // Compare horizontal/screw on the circle so 2*pi - 1e-9 matches 0.
        let wrap = |a: f64, b: f64| {
            let d = normalize_angle(a - b);
            d.min(TAU - d)
        };
        assert!(
            (actual.vertical - expected.vertical).abs() < tol,
            "{context}: vertical {} vs {}",
            actual.vertical,
            expected.vertical
        );
        assert!(
            wrap(actual.horizontal, expected.horizontal) < tol,
            "{context}: horizontal {} vs {}",
            actual.horizontal,
            expected.horizontal
        );
        assert!(
            wrap(actual.screw, expected.screw) < tol,
            "{context}: screw {} vs {}",
            actual.screw,
            expected.screw
        );
    }

    #[test]
    fn test_round_trip_all_modes() {
        // Deterministic sweep over the angle space, staying off the poles.
        let verticals = [1e-6, 0.1, 0.7, 1.04, FRAC_PI_2, 2.3, PI - 0.1, PI - 1e-6];
        let horizontals = [0.0, 0.65, 1.0, 2.9, 4.71, 6.28];
        let screws = [0.0, 0.4, 1.57, 3.3, 5.5];

        for mode in MODES {
            for &vertical in &verticals {
                for &horizontal in &horizontals {
                    for &screw in &screws {
                        let input = AngleState::new(vertical, horizontal, screw);
                        let matrix = forward::solve(mode, input);
                        let output = solve(mode, &matrix);
                        assert_angles_eq(
                            output,
                            input,
                            1e-6,
                            &format!("{mode:?} ({vertical}, {horizontal}, {screw})"),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_default_view_scenario() {
        // Z zenith, library defaults: inverse of Rz(0)*Rx(-1.04)*Rz(-0.65)*I
        // must return (1.04, 0.65, 0.0) to 1e-9.
        let matrix = forward::solve(ZenithMode::ZZenith, AngleState::default());
        let angles = solve(ZenithMode::ZZenith, &matrix);
        assert_angles_eq(angles, AngleState::default(), 1e-9, "default view");
    }

    #[test]
    fn test_pole_facing_viewer() {
        for mode in MODES {
            for horizontal in [0.0, 0.65, 2.0, 5.9] {
                let matrix = forward::solve(mode, AngleState::new(0.0, horizontal, 0.0));
                let angles = solve(mode, &matrix);
                assert_angles_eq(
                    angles,
                    AngleState::new(0.0, horizontal, 0.0),
                    1e-9,
                    &format!("{mode:?} facing pole h={horizontal}"),
                );
            }
        }
    }

    #[test]
    fn test_pole_facing_away() {
        for mode in MODES {
            for horizontal in [0.0, 0.65, 2.0, 5.9] {
                let matrix = forward::solve(mode, AngleState::new(PI, horizontal, 0.0));
                let angles = solve(mode, &matrix);
                assert_angles_eq(
                    angles,
                    AngleState::new(PI, horizontal, 0.0),
                    1e-9,
                    &format!("{mode:?} anti-pole h={horizontal}"),
                );
            }
        }
    }

    #[test]
    fn test_pole_folds_screw_into_horizontal() {
        // At the pole only horizontal + screw is observable. The branch
        // reports it all as horizontal; re-solving forward must reproduce
        // the exact same matrix.
        for mode in MODES {
            for (vertical, horizontal, screw) in
                [(0.0, 0.65, 1.1), (0.0, 5.0, 4.0), (PI, 0.65, 1.1), (PI, 2.2, 5.7)]
            {
                let matrix = forward::solve(mode, AngleState::new(vertical, horizontal, screw));
                let angles = solve(mode, &matrix);

                assert_eq!(angles.screw, 0.0, "{mode:?}: pole branch zeroes screw");
                assert!(
                    angles.vertical == 0.0 || angles.vertical == PI,
                    "{mode:?}: pole branch snaps vertical"
                );

                let rebuilt = forward::solve(mode, angles);
                assert!(
                    rebuilt.max_abs_diff(&matrix) < 1e-9,
                    "{mode:?} v={vertical} h={horizontal} s={screw}: \
                     pole angles must reproduce the matrix"
                );
            }
        }
    }

    #[test]
    fn test_pole_branch_continuous_with_general_branch() {
        // Just off the pole the general branch runs; its result must agree
        // with the pole branch's to the displacement's order of magnitude.
        for mode in MODES {
            let horizontal = 0.65;
            let at_pole = solve(mode, &forward::solve(mode, AngleState::new(0.0, horizontal, 0.0)));
            let near = solve(
                mode,
                &forward::solve(mode, AngleState::new(1e-7, horizontal, 0.0)),
            );
            assert!(
                (near.horizontal - at_pole.horizontal).abs() < 1e-6,
                "{mode:?}: horizontal should not jump across the pole"
            );
            assert!(near.vertical < 1e-6, "{mode:?}: vertical stays near zero");
        }
    }

    #[test]
    fn test_angles_in_documented_ranges() {
        for mode in MODES {
            for vertical in [0.0, 0.01, 1.6, PI] {
                for horizontal in [0.0, 3.0, 6.2] {
                    for screw in [0.0, 2.0, 6.1] {
                        let matrix =
                            forward::solve(mode, AngleState::new(vertical, horizontal, screw));
                        let a = solve(mode, &matrix);
                        assert!((0.0..=PI).contains(&a.vertical));
                        assert!((0.0..TAU).contains(&a.horizontal));
                        assert!((0.0..TAU).contains(&a.screw));
                    }
                }
            }
        }
    }

    #[test]
    fn test_inverse_after_drag_rotations() {
        // A matrix mutated by incremental view rotations (not the forward
        // solver) must still invert to angles that rebuild it.
        for mode in MODES {
            let mut matrix = forward::solve(mode, AngleState::default());
            matrix.apply_view_rotation(ViewAxis::X, 0.21);
            matrix.apply_view_rotation(ViewAxis::Y, -0.13);
            matrix.apply_view_rotation(ViewAxis::Z, 0.05);

            let angles = solve(mode, &matrix);
            let rebuilt = forward::solve(mode, angles);
            assert!(
                rebuilt.max_abs_diff(&matrix) < 1e-9,
                "{mode:?}: inverse angles of a dragged matrix must rebuild it"
            );
        }
    }
}
