//! # Transit, rise, set, dawn and dusk
//!
//! Event times of a [`Body`] for an observer at geographic latitude/longitude
//! (degrees, east longitudes positive).
//!
//! ## Transit
//!
//! The meridian crossing follows directly from the hour angle: the
//! representative of `H` nearest to zero is converted to clock time with the
//! sidereal rate,
//!
//! ```text
//! t_transit = t − C · H,   H ∈ (−12h, 12h],   C = ms per sidereal hour
//! ```
//!
//! ## Rise and set
//!
//! A crossing of altitude `h₀` happens at local hour angle `H₀` with
//!
//! ```text
//! cos H₀ = (sin h₀ − sin φ · sin δ) / (cos φ · cos δ)
//! ```
//!
//! The declination δ (and for the Moon, `h₀` itself) depends on the time of
//! the event, so the instant is refined by successive substitution: evaluate
//! the body at the current candidate, recompute `H₀`, and stop once the
//! candidate moves by less than
//! [`SolverSettings::riseset_tolerance_ms`](crate::settings::SolverSettings).
//! When `|cos H₀| > 1` the body never crosses `h₀` on that day and the
//! search reports [`HorizonEvent::AlwaysAbove`] or [`HorizonEvent::AlwaysBelow`].
//!
//! All queries are pure: the candidate states live in the solver, the
//! queried body keeps its own time and position.
//!
//! ## Example
//!
//! ```rust
//! use almanac::bodies::{sun::Sun, Body};
//! use almanac::riseset::HorizonEvent;
//!
//! // London, 2024-06-21T12:00Z
//! let sun = Body::new(Sun, 1_718_971_200_000.0).unwrap();
//!
//! let sunrise = sun.rise(51.5, -0.13).unwrap();
//! assert!(matches!(sunrise, HorizonEvent::Occurs(_)));
//!
//! // No astronomical night in London at midsummer
//! use almanac::bodies::Twilight;
//! let dawn = sun.dawn_at(51.5, -0.13, Twilight::Astronomical).unwrap();
//! assert_eq!(dawn, HorizonEvent::AlwaysAbove);
//! ```

use std::fmt;

use crate::{
    almanac_errors::AlmanacError,
    bodies::{Body, Ephemeris, Twilight, TwilightEphemeris},
    constants::{Degree, Millis, MS_PER_HOUR_ANGLE_RADIAN, MS_PER_SIDEREAL_HOUR},
    orbit_state::OrbitalState,
    time::millis_to_epoch,
};

/// Which horizon crossing to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Crossing upwards, before transit.
    Rising,
    /// Crossing downwards, after transit.
    Setting,
}

impl Direction {
    /// −1 for a rising body, +1 for a setting body.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Rising => -1.0,
            Direction::Setting => 1.0,
        }
    }
}

/// Outcome of a rise/set/twilight query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonEvent {
    /// The crossing happens at this instant (milliseconds since the Unix epoch).
    Occurs(Millis),
    /// The body stays above the threshold altitude all day (circumpolar).
    AlwaysAbove,
    /// The body stays below the threshold altitude all day.
    AlwaysBelow,
}

impl HorizonEvent {
    /// Instant of the event, if there is one.
    pub fn time(&self) -> Option<Millis> {
        match self {
            HorizonEvent::Occurs(t) => Some(*t),
            HorizonEvent::AlwaysAbove | HorizonEvent::AlwaysBelow => None,
        }
    }

    /// Instant of the event, or NaN when the body does not cross the threshold.
    pub fn time_or_nan(&self) -> Millis {
        self.time().unwrap_or(f64::NAN)
    }

    pub fn occurs(&self) -> bool {
        matches!(self, HorizonEvent::Occurs(_))
    }
}

impl fmt::Display for HorizonEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizonEvent::Occurs(t) if t.is_finite() => write!(f, "{}", millis_to_epoch(*t)),
            HorizonEvent::Occurs(t) => write!(f, "{t}"),
            HorizonEvent::AlwaysAbove => write!(f, "always above"),
            HorizonEvent::AlwaysBelow => write!(f, "always below"),
        }
    }
}

/// Meridian crossing nearest to the time of `state`, for an observer at `longitude`.
///
/// Arguments
/// -----------------
/// * `state`: position of the body at its current time.
/// * `longitude`: observer longitude in degrees, east positive.
///
/// Return
/// ----------
/// * The transit instant in milliseconds since the Unix epoch, within half a
///   sidereal day of `state.time`.
pub fn transit_time(state: &OrbitalState, longitude: Degree) -> Millis {
    let mut ha = state.hour_angle(longitude);
    if ha > 12.0 {
        ha -= 24.0;
    }
    state.time - MS_PER_SIDEREAL_HOUR * ha
}

impl<E: Ephemeris> Body<E> {
    /// Local meridian crossing nearest to the body's time.
    ///
    /// The latitude does not change the result; it is taken for symmetry with
    /// the other event queries.
    pub fn transit(&self, _latitude: Degree, longitude: Degree) -> Millis {
        transit_time(self.state(), longitude)
    }

    /// Instant at which the body crosses a fixed altitude.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`, `longitude`: observer location in degrees (east positive).
    /// * `altitude`: threshold altitude of the body's centre, degrees.
    /// * `direction`: rising (before transit) or setting (after transit).
    ///
    /// Return
    /// ----------
    /// * [`HorizonEvent::Occurs`] with the crossing time, or
    ///   [`HorizonEvent::AlwaysAbove`]/[`HorizonEvent::AlwaysBelow`] when the
    ///   body does not reach the threshold at this latitude.
    ///
    /// Errors
    /// ----------
    /// * [`AlmanacError::RiseSetNoConvergence`] if the refinement exceeds
    ///   `riseset_max_iterations`.
    /// * Any error of the orbit model while evaluating a candidate instant.
    ///
    /// See also
    /// ------------
    /// * [`Body::rise`], [`Body::set`] – same search with the body's own horizon altitude.
    pub fn riseset(
        &self,
        latitude: Degree,
        longitude: Degree,
        altitude: Degree,
        direction: Direction,
    ) -> Result<HorizonEvent, AlmanacError> {
        self.horizon_crossing(latitude, longitude, direction, |_| altitude)
    }

    /// Rising time, using the body's rise/set altitude.
    pub fn rise(&self, latitude: Degree, longitude: Degree) -> Result<HorizonEvent, AlmanacError> {
        self.horizon_crossing(latitude, longitude, Direction::Rising, |state| {
            self.ephemeris().rise_set_altitude(state)
        })
    }

    /// Setting time, using the body's rise/set altitude.
    pub fn set(&self, latitude: Degree, longitude: Degree) -> Result<HorizonEvent, AlmanacError> {
        self.horizon_crossing(latitude, longitude, Direction::Setting, |state| {
            self.ephemeris().rise_set_altitude(state)
        })
    }

    /// Successive-substitution search shared by every rise/set query.
    ///
    /// `threshold` is re-evaluated on each candidate state, which lets the
    /// Moon's altitude follow its distance.
    fn horizon_crossing<F>(
        &self,
        latitude: Degree,
        longitude: Degree,
        direction: Direction,
        threshold: F,
    ) -> Result<HorizonEvent, AlmanacError>
    where
        F: Fn(&OrbitalState) -> Degree,
    {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let settings = self.settings();

        let mut current = *self.state();
        let mut iterations = 0;

        loop {
            let sin_alt = threshold(&current).to_radians().sin();
            let (sin_dec, cos_dec) = current.declination().to_radians().sin_cos();

            let cos_ha = (sin_alt - sin_lat * sin_dec) / (cos_lat * cos_dec);
            if cos_ha > 1.0 {
                log::debug!("No crossing at latitude {latitude}: cos H = {cos_ha}");
                return Ok(HorizonEvent::AlwaysBelow);
            }
            if cos_ha < -1.0 {
                log::debug!("No crossing at latitude {latitude}: cos H = {cos_ha}");
                return Ok(HorizonEvent::AlwaysAbove);
            }

            let candidate = transit_time(&current, longitude)
                + MS_PER_HOUR_ANGLE_RADIAN * direction.sign() * cos_ha.acos();
            let step = candidate - current.time;

            log::trace!("Rise/set iteration {iterations}: candidate {candidate} ms, step {step} ms");

            // A NaN step (invalid geometry) is accepted as is.
            if !(step.abs() >= settings.riseset_tolerance_ms) {
                log::debug!("Rise/set converged after {iterations} iterations (last step {step} ms)");
                return Ok(HorizonEvent::Occurs(candidate));
            }

            if iterations >= settings.riseset_max_iterations {
                log::warn!(
                    "Rise/set search stopped after {iterations} iterations (last step {step} ms)"
                );
                return Err(AlmanacError::RiseSetNoConvergence {
                    iterations,
                    last_step_ms: step,
                });
            }

            current = self.state_at(candidate)?;
            iterations += 1;
        }
    }
}

impl<E: TwilightEphemeris> Body<E> {
    /// Start of civil twilight in the morning.
    pub fn dawn(&self, latitude: Degree, longitude: Degree) -> Result<HorizonEvent, AlmanacError> {
        self.dawn_at(latitude, longitude, Twilight::Civil)
    }

    /// End of civil twilight in the evening.
    pub fn dusk(&self, latitude: Degree, longitude: Degree) -> Result<HorizonEvent, AlmanacError> {
        self.dusk_at(latitude, longitude, Twilight::Civil)
    }

    /// Morning crossing of the given twilight altitude.
    pub fn dawn_at(
        &self,
        latitude: Degree,
        longitude: Degree,
        twilight: Twilight,
    ) -> Result<HorizonEvent, AlmanacError> {
        let altitude = self.ephemeris().twilight_altitude(twilight);
        self.riseset(latitude, longitude, altitude, Direction::Rising)
    }

    /// Evening crossing of the given twilight altitude.
    pub fn dusk_at(
        &self,
        latitude: Degree,
        longitude: Degree,
        twilight: Twilight,
    ) -> Result<HorizonEvent, AlmanacError> {
        let altitude = self.ephemeris().twilight_altitude(twilight);
        self.riseset(latitude, longitude, altitude, Direction::Setting)
    }
}
