//! # Celestial bodies
//!
//! A body is an **ephemeris** (how its orbital elements evolve with time and
//! which altitude counts as "on the horizon" for it) paired with its
//! **current state** ([`OrbitalState`](crate::orbit_state::OrbitalState)).
//!
//! ## Capabilities
//!
//! - [`Ephemeris`](crate::bodies::Ephemeris) — element formulas and the rise/set altitude.
//!   Implemented by [`Sun`](crate::bodies::sun::Sun), [`Moon`](crate::bodies::moon::Moon)
//!   and [`Planet`](crate::bodies::planet::Planet).
//! - [`TwilightEphemeris`](crate::bodies::TwilightEphemeris) — additional twilight
//!   altitudes; only the Sun has them, so `dawn`/`dusk` only exist on `Body<Sun>`.
//!
//! ```text
//! Body<E: Ephemeris>
//! ├── ephemeris  (Sun | Moon | Planet | user type)
//! ├── state      (time, x, y, z)
//! └── settings   (solver tolerances)
//! ```
//!
//! ## Horizon altitudes
//!
//! | Body    | rise/set                   | twilight (dawn/dusk)     |
//! |---------|----------------------------|--------------------------|
//! | Sun     | −0.833°                    | −6° / −12° / −18°        |
//! | Moon    | −0.583° − parallax(r)      | —                        |
//! | Planet  | 0°                         | —                        |
//!
//! The Moon's altitude depends on its current distance, so the rise/set
//! search re-evaluates it at every step.
//!
//! ## Example
//!
//! ```rust
//! use almanac::bodies::{sun::Sun, Body};
//!
//! let sun = Body::new(Sun, 1_718_971_200_000.0).unwrap();
//! assert!(sun.declination() > 23.0);
//! ```

pub mod moon;
pub mod planet;
pub mod sun;

use hifitime::Epoch;

use crate::{
    almanac_errors::AlmanacError,
    constants::{AstronomicalUnit, Degree, Hour, Millis},
    orbit_state::OrbitalState,
    orbit_type::keplerian_element::KeplerianElements,
    settings::SolverSettings,
    time::epoch_to_millis,
};

/// Element formulas and horizon altitude of a body.
pub trait Ephemeris {
    /// Orbital elements at `time` (milliseconds since the Unix epoch).
    fn elements(&self, time: Millis) -> KeplerianElements;

    /// Altitude (degrees) at which the body is considered to rise or set,
    /// given its state at the instant being tested.
    ///
    /// Defaults to the geometric horizon.
    fn rise_set_altitude(&self, _state: &OrbitalState) -> Degree {
        0.0
    }
}

/// Twilight boundaries, by altitude of the body's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twilight {
    /// −6°
    Civil,
    /// −12°
    Nautical,
    /// −18°
    Astronomical,
}

impl Twilight {
    pub fn altitude(self) -> Degree {
        match self {
            Twilight::Civil => -6.0,
            Twilight::Nautical => -12.0,
            Twilight::Astronomical => -18.0,
        }
    }
}

/// Bodies for which dawn and dusk are meaningful.
pub trait TwilightEphemeris: Ephemeris {
    /// Altitude (degrees) marking the given twilight boundary.
    fn twilight_altitude(&self, twilight: Twilight) -> Degree {
        twilight.altitude()
    }
}

/// A body at a given instant.
///
/// The state is computed once at construction. Every coordinate accessor is
/// derived from it on demand, and the event queries in
/// [`riseset`](crate::riseset) never modify it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body<E: Ephemeris> {
    ephemeris: E,
    state: OrbitalState,
    settings: SolverSettings,
}

impl<E: Ephemeris> Body<E> {
    /// Construct a body at `time` with the default [`SolverSettings`].
    ///
    /// Errors
    /// ------
    /// * Any error of [`OrbitalState::from_elements`] (invalid eccentricity,
    ///   Kepler non-convergence).
    pub fn new(ephemeris: E, time: Millis) -> Result<Self, AlmanacError> {
        Self::with_settings(ephemeris, time, SolverSettings::default())
    }

    /// Construct a body at `time` with explicit solver settings.
    pub fn with_settings(
        ephemeris: E,
        time: Millis,
        settings: SolverSettings,
    ) -> Result<Self, AlmanacError> {
        let state = OrbitalState::from_elements(time, &ephemeris.elements(time), &settings)?;
        Ok(Body {
            ephemeris,
            state,
            settings,
        })
    }

    /// Construct a body at a hifitime [`Epoch`].
    pub fn from_epoch(ephemeris: E, epoch: Epoch) -> Result<Self, AlmanacError> {
        Self::new(ephemeris, epoch_to_millis(epoch))
    }

    /// State of the same body at another instant; `self` is left untouched.
    pub fn state_at(&self, time: Millis) -> Result<OrbitalState, AlmanacError> {
        OrbitalState::from_elements(time, &self.ephemeris.elements(time), &self.settings)
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    pub fn state(&self) -> &OrbitalState {
        &self.state
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn time(&self) -> Millis {
        self.state.time
    }

    /// Distance in AU.
    pub fn distance(&self) -> AstronomicalUnit {
        self.state.distance()
    }

    /// Ecliptic longitude in degrees, [0°, 360°).
    pub fn longitude(&self) -> Degree {
        self.state.longitude()
    }

    /// Ecliptic latitude in degrees.
    pub fn latitude(&self) -> Degree {
        self.state.latitude()
    }

    /// Right ascension in hours, [0h, 24h).
    pub fn right_ascension(&self) -> Hour {
        self.state.right_ascension()
    }

    /// Declination in degrees.
    pub fn declination(&self) -> Degree {
        self.state.declination()
    }

    /// Hour angle at `longitude` (degrees, east positive), in [0h, 24h).
    pub fn hour_angle(&self, longitude: Degree) -> Hour {
        self.state.hour_angle(longitude)
    }
}

impl<E: Ephemeris + Clone> Body<E> {
    /// The same body recomputed at another instant.
    pub fn at(&self, time: Millis) -> Result<Self, AlmanacError> {
        Ok(Body {
            ephemeris: self.ephemeris.clone(),
            state: self.state_at(time)?,
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod bodies_test {
    use super::*;
    use crate::bodies::{moon::Moon, planet::Planet, sun::Sun};
    use crate::orbit_type::linear_elements::{LinearElement, LinearElements};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_twilight_altitudes() {
        assert_eq!(Twilight::Civil.altitude(), -6.0);
        assert_eq!(Twilight::Nautical.altitude(), -12.0);
        assert_eq!(Twilight::Astronomical.altitude(), -18.0);
        assert_eq!(Sun.twilight_altitude(Twilight::Nautical), -12.0);
    }

    #[test]
    fn test_accessors_delegate_to_state() {
        let sun = Body::new(Sun, 0.0).unwrap();
        assert_eq!(sun.time(), 0.0);
        assert_eq!(sun.distance(), sun.state().distance());
        assert_eq!(sun.right_ascension(), sun.state().right_ascension());
        assert_eq!(sun.declination(), sun.state().declination());
        assert_eq!(sun.hour_angle(12.0), sun.state().hour_angle(12.0));
        assert_eq!(sun.settings(), &SolverSettings::default());
    }

    #[test]
    fn test_at_leaves_original_untouched() {
        let moon = Body::new(Moon, 1_718_971_200_000.0).unwrap();
        let before = *moon.state();

        let later = moon.at(1_718_971_200_000.0 + 3_600_000.0).unwrap();
        assert_eq!(moon.state(), &before);
        assert_eq!(later.time(), 1_718_971_200_000.0 + 3_600_000.0);

        // The Moon moves about half a degree per hour
        let moved = later.longitude() - moon.longitude();
        assert!(moved > 0.3 && moved < 0.8, "moved {moved}°");
    }

    #[test]
    fn test_from_epoch() {
        let time = 1_718_971_200_000.0;
        let epoch = crate::time::millis_to_epoch(time);
        let sun = Body::from_epoch(Sun, epoch).unwrap();
        assert_abs_diff_eq!(sun.time(), time, epsilon = 1e-3);
    }

    #[test]
    fn test_invalid_planet_is_rejected() {
        let fixed = LinearElement::fixed;
        let planet = Planet::new(LinearElements {
            semi_major_axis: fixed(1.0),
            eccentricity: fixed(1.5),
            inclination: fixed(0.0),
            mean_longitude: fixed(10.0),
            perihelion_longitude: fixed(0.0),
            ascending_node_longitude: fixed(0.0),
        });
        assert_eq!(
            Body::new(planet, 0.0),
            Err(AlmanacError::InvalidEccentricity(1.5))
        );
    }
}
