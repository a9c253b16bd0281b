use roots::{find_root_newton_raphson, SimpleConvergency};

use super::constants::{Radian, DPI};
use crate::{almanac_errors::AlmanacError, settings::SolverSettings};

/// Principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly `E`.
///
/// Newton–Raphson iteration seeded with `E₀ = M + e·sin(M)`; the search stops
/// once the Newton increment falls below `settings.kepler_tolerance`.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M, radians (any range).
/// * `eccentricity`: e, must lie in [0, 1).
/// * `settings`: tolerance and iteration cap.
///
/// Return
/// ------
/// * The eccentric anomaly in radians, on the same revolution as the seed.
///
/// Errors
/// ------
/// * [`AlmanacError::InvalidEccentricity`] for e < 0, e ≥ 1 or NaN.
/// * [`AlmanacError::KeplerNoConvergence`] if the iteration cap is reached.
pub fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
    settings: &SolverSettings,
) -> Result<Radian, AlmanacError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(AlmanacError::InvalidEccentricity(eccentricity));
    }

    // K(E) = E − e·sin(E) − M
    let f = |ecc_anom: f64| -> f64 { ecc_anom - eccentricity * ecc_anom.sin() - mean_anomaly };

    // K'(E)
    let df = |ecc_anom: f64| -> f64 { 1.0 - eccentricity * ecc_anom.cos() };

    let x0 = mean_anomaly + eccentricity * mean_anomaly.sin();

    let mut tol = SimpleConvergency {
        eps: settings.kepler_tolerance,
        max_iter: settings.kepler_max_iterations,
    };

    find_root_newton_raphson(x0, &f, &df, &mut tol).map_err(|source| {
        log::warn!(
            "Kepler equation failed to converge for e = {eccentricity}, M = {mean_anomaly}: {source}"
        );
        AlmanacError::KeplerNoConvergence {
            eccentricity,
            mean_anomaly,
            source,
        }
    })
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    fn residual(ecc_anom: f64, e: f64, m: f64) -> f64 {
        ecc_anom - e * ecc_anom.sin() - m
    }

    #[test]
    fn test_principal_angle() {
        assert_abs_diff_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-14);
        assert_eq!(principal_angle(0.0), 0.0);
    }

    #[test]
    fn test_circular_orbit() {
        let settings = SolverSettings::default();
        let ecc_anom = solve_kepler_equation(1.234, 0.0, &settings).unwrap();
        assert_eq!(ecc_anom, 1.234);
    }

    #[test]
    fn test_solve_kepler_equation() {
        let settings = SolverSettings::default();

        let ecc_anom = solve_kepler_equation(PI / 3.0, 0.5, &settings).unwrap();
        assert_abs_diff_eq!(ecc_anom, 1.547056664927038, epsilon = 1e-8);

        // Symmetry M → −M
        let neg = solve_kepler_equation(-PI / 3.0, 0.5, &settings).unwrap();
        assert_abs_diff_eq!(neg, -ecc_anom, epsilon = 1e-8);

        // M = π is a fixed point for any e
        let apo = solve_kepler_equation(PI, 0.8, &settings).unwrap();
        assert_abs_diff_eq!(apo, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_eccentricity() {
        let settings = SolverSettings::default();
        assert_eq!(
            solve_kepler_equation(1.0, 1.0, &settings),
            Err(AlmanacError::InvalidEccentricity(1.0))
        );
        assert_eq!(
            solve_kepler_equation(1.0, -0.1, &settings),
            Err(AlmanacError::InvalidEccentricity(-0.1))
        );
        assert!(solve_kepler_equation(1.0, f64::NAN, &settings).is_err());
    }

    #[test]
    fn test_iteration_cap() {
        let settings = SolverSettings {
            kepler_max_iterations: 1,
            ..SolverSettings::default()
        };
        let err = solve_kepler_equation(0.05, 0.95, &settings).unwrap_err();
        assert!(matches!(
            err,
            AlmanacError::KeplerNoConvergence {
                source: roots::SearchError::NoConvergency,
                ..
            }
        ));
    }

    #[test]
    fn test_converges_over_elliptic_range() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let settings = SolverSettings {
            kepler_max_iterations: 50,
            ..SolverSettings::default()
        };

        for _ in 0..5_000 {
            let e = rng.random_range(0.0..=0.9);
            let m = rng.random::<f64>() * DPI;
            let ecc_anom = solve_kepler_equation(m, e, &settings).unwrap();
            assert!(
                residual(ecc_anom, e, m).abs() < 1e-8,
                "residual too large for e = {e}, M = {m}"
            );
        }
    }
}
