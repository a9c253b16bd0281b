//! # Orbit model and derived coordinates
//!
//! [`OrbitalState`] is the position of a body at one instant: the time and the
//! Cartesian vector `(x, y, z)` in AU, in the ecliptic frame centred on the
//! observer's reference body (the Earth for the Sun and the Moon).
//!
//! The state is **immutable**: moving a body in time produces a new state via
//! [`OrbitalState::from_elements`], so the vector can never go stale with
//! respect to its time. Every spherical coordinate (distance, ecliptic
//! longitude/latitude, right ascension, declination, hour angle) is a pure
//! function of the stored vector and time, recomputed on each call.
//!
//! ## Element → position transform
//!
//! ```text
//! M = λ − ϖ,  ω = ϖ − Ω
//! M = E − e·sin E                              (Kepler, Newton iteration)
//! u = a (cos E − e),  v = a √(1 − e²) sin E    (orbital plane)
//! r = Rz(Ω) · Rx(i) · Rz(ω) · (u, v, 0)        (ecliptic)
//! ```
//!
//! ## Conventions
//!
//! - Longitudes and right ascensions use the `atan2(−y, −x) + 180°` form, which
//!   maps them into `[0°, 360°)` / `[0h, 24h)`.
//! - Hour angles are wrapped into `[0h, 24h)`.

use nalgebra::Vector3;

use crate::{
    almanac_errors::AlmanacError,
    constants::{AstronomicalUnit, Degree, Hour, Millis},
    earth_orientation::obliquity,
    kepler::solve_kepler_equation,
    orbit_type::keplerian_element::KeplerianElements,
    ref_system::{ecliptic_to_equatorial, orbital_plane_to_ecliptic},
    settings::SolverSettings,
    time::gmst,
};

/// Position of a body at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    /// Instant in milliseconds since the Unix epoch.
    pub time: Millis,
    /// Ecliptic Cartesian position in AU.
    pub position: Vector3<f64>,
}

impl OrbitalState {
    /// Compute the position of a body from its orbital elements.
    ///
    /// Arguments
    /// -----------------
    /// * `time`: instant the elements refer to (milliseconds since the Unix epoch).
    /// * `elements`: orbital elements at `time`.
    /// * `settings`: Kepler solver tolerance and iteration cap.
    ///
    /// Return
    /// ----------
    /// * The state `{ time, (x, y, z) }`.
    ///
    /// Errors
    /// ----------
    /// * [`AlmanacError::InvalidEccentricity`] or [`AlmanacError::KeplerNoConvergence`]
    ///   from [`solve_kepler_equation`].
    pub fn from_elements(
        time: Millis,
        elements: &KeplerianElements,
        settings: &SolverSettings,
    ) -> Result<Self, AlmanacError> {
        let a = elements.semi_major_axis;
        let e = elements.eccentricity;

        let ecc_anom = solve_kepler_equation(elements.mean_anomaly(), e, settings)?;

        let u = a * (ecc_anom.cos() - e);
        let v = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

        let rot = orbital_plane_to_ecliptic(
            elements.periapsis_argument(),
            elements.inclination,
            elements.ascending_node_longitude,
        );

        Ok(OrbitalState {
            time,
            position: rot * Vector3::new(u, v, 0.0),
        })
    }

    /// Distance to the origin, in AU.
    pub fn distance(&self) -> AstronomicalUnit {
        self.position.norm()
    }

    /// Ecliptic longitude in degrees.
    pub fn longitude(&self) -> Degree {
        (-self.position.y).atan2(-self.position.x).to_degrees() + 180.0
    }

    /// Ecliptic latitude in degrees, in [−90°, 90°].
    pub fn latitude(&self) -> Degree {
        (self.position.z / self.distance()).asin().to_degrees()
    }

    /// Position rotated into the equatorial frame of date.
    pub fn equatorial(&self) -> Vector3<f64> {
        ecliptic_to_equatorial(obliquity(self.time)) * self.position
    }

    /// Right ascension in hours.
    pub fn right_ascension(&self) -> Hour {
        let eq = self.equatorial();
        (-eq.y).atan2(-eq.x).to_degrees() / 15.0 + 12.0
    }

    /// Declination in degrees, in [−90°, 90°].
    pub fn declination(&self) -> Degree {
        (self.equatorial().z / self.distance()).asin().to_degrees()
    }

    /// Local hour angle at the given longitude (degrees, east positive), in [0h, 24h).
    pub fn hour_angle(&self, longitude: Degree) -> Hour {
        let ha = gmst(self.time) + longitude / 15.0 - self.right_ascension();
        ha - (ha / 24.0).floor() * 24.0
    }
}
