use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Rotation matrix about one of the coordinate axes.
///
/// Builds the active (counter-clockwise) rotation of angle `alpha` about the
/// axis selected by `k`.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians.
/// * `k`: axis index, `0` = X, `1` = Y, `2` = Z.
///
/// Panics
/// -------
/// * If `k` is not 0, 1 or 2.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the orbital plane to the ecliptic frame.
///
/// The orbital plane has its X axis toward the periapsis. The three Euler
/// rotations are composed as `Rz(Ω) · Rx(i) · Rz(ω)`.
///
/// Arguments
/// ---------
/// * `periapsis_argument`: ω, radians.
/// * `inclination`: i, radians.
/// * `ascending_node_longitude`: Ω, radians.
pub fn orbital_plane_to_ecliptic(
    periapsis_argument: Radian,
    inclination: Radian,
    ascending_node_longitude: Radian,
) -> Matrix3<f64> {
    rotmt(ascending_node_longitude, 2) * rotmt(inclination, 0) * rotmt(periapsis_argument, 2)
}

/// Rotation from ecliptic to equatorial coordinates for a given obliquity.
pub fn ecliptic_to_equatorial(obliquity: Radian) -> Matrix3<f64> {
    rotmt(obliquity, 0)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotmt() {
        let rot = rotmt(FRAC_PI_2, 2);
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    #[should_panic]
    fn test_rotmt_invalid_axis() {
        rotmt(0.0, 3);
    }

    #[test]
    fn test_orbital_plane_to_ecliptic() {
        // A periapsis 90° past the node of a polar orbit whose node is on +Y
        // points to the ecliptic north pole.
        let rot = orbital_plane_to_ecliptic(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);

        // No inclination: plain rotation by ω + Ω in the ecliptic
        let rot = orbital_plane_to_ecliptic(0.3, 0.0, 0.4);
        assert_abs_diff_eq!(rot, rotmt(0.7, 2), epsilon = 1e-15);
    }

    #[test]
    fn test_ecliptic_to_equatorial() {
        let eps = 23.4393_f64.to_radians();
        let pole = ecliptic_to_equatorial(eps) * Vector3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(pole, Vector3::new(0.0, -eps.sin(), eps.cos()), epsilon = 1e-15);

        // Summer solstice direction rises to a declination of +ε
        let solstice = ecliptic_to_equatorial(eps) * Vector3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(solstice.z.asin(), eps, epsilon = 1e-15);
    }
}
