//! # Observer & horizontal coordinates
//!
//! An [`Observer`] is a site on the Earth given by its geographic latitude and
//! longitude (degrees, **east positive**). It projects a body's equatorial
//! position onto the local sky, producing [`HorizontalCoordinates`]:
//!
//! ```text
//! sin h_g = sin φ · sin δ + cos φ · cos δ · cos H
//! A       = atan2(cos δ · sin H, sin φ · cos δ · cos H − cos φ · sin δ) + 180°
//! h       = h_g − π(r) · cos h_g
//! ```
//!
//! with φ the latitude, δ the declination, H the local hour angle, and
//! `π(r)` the horizontal parallax of a body at distance `r`
//! ([`parallax`](crate::earth_orientation::parallax)).
//!
//! ## Conventions
//!
//! - Azimuth in `[0°, 360°)`, measured from **north** through east
//!   (90° = east, 180° = south, 270° = west).
//! - Altitude in degrees above the horizon, corrected for parallax
//!   (topocentric). Atmospheric refraction is not applied.
//!
//! ## Example
//!
//! ```rust
//! use almanac::bodies::{sun::Sun, Body};
//! use almanac::observers::Observer;
//!
//! let london = Observer::new(51.5, -0.13);
//! let sun = Body::new(Sun, 1_718_971_200_000.0).unwrap();
//!
//! let sky = london.horizontal(&sun);
//! assert!(sky.altitude() > 60.0);
//! assert!((sky.azimuth() - 180.0).abs() < 2.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    almanac_errors::AlmanacError,
    bodies::{Body, Ephemeris},
    constants::{Degree, Millis, RADEG},
    earth_orientation::parallax,
    orbit_state::OrbitalState,
    riseset::HorizonEvent,
};

/// A geographic site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observer {
    /// Geographic latitude in degrees, north positive.
    pub latitude: Degree,
    /// Geographic longitude in degrees, east positive.
    pub longitude: Degree,
    /// Optional site name, only used for display.
    #[serde(default)]
    pub name: Option<String>,
}

impl Observer {
    /// Create an anonymous site.
    ///
    /// Latitude and longitude are not validated: out-of-range or NaN values
    /// propagate through the trigonometry.
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        Observer {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Altitude and azimuth of `body` seen from this site at the body's time.
    pub fn horizontal<E: Ephemeris>(&self, body: &Body<E>) -> HorizontalCoordinates {
        HorizontalCoordinates::new(body.state(), self.latitude, self.longitude)
    }

    /// Meridian crossing of `body` nearest to its time.
    pub fn transit<E: Ephemeris>(&self, body: &Body<E>) -> Millis {
        body.transit(self.latitude, self.longitude)
    }

    /// Rising of `body` at this site. See [`Body::rise`].
    pub fn rise<E: Ephemeris>(&self, body: &Body<E>) -> Result<HorizonEvent, AlmanacError> {
        body.rise(self.latitude, self.longitude)
    }

    /// Setting of `body` at this site. See [`Body::set`].
    pub fn set<E: Ephemeris>(&self, body: &Body<E>) -> Result<HorizonEvent, AlmanacError> {
        body.set(self.latitude, self.longitude)
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Unnamed");
        write!(
            f,
            "{name} (lat: {:.4}°, lon: {:.4}°)",
            self.latitude, self.longitude
        )
    }
}

/// Topocentric altitude and azimuth of a body, frozen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalCoordinates {
    altitude: Degree,
    azimuth: Degree,
}

impl HorizontalCoordinates {
    /// Project a body state onto the sky of a site.
    ///
    /// Arguments
    /// -----------------
    /// * `state`: body position at the instant of observation.
    /// * `latitude`, `longitude`: site location in degrees (east positive).
    ///
    /// Return
    /// ----------
    /// * Parallax-corrected altitude and north-based azimuth, in degrees.
    pub fn new(state: &OrbitalState, latitude: Degree, longitude: Degree) -> Self {
        let (sin_lat, cos_lat) = (latitude * RADEG).sin_cos();
        let (sin_dec, cos_dec) = (state.declination() * RADEG).sin_cos();
        let (sin_ha, cos_ha) = (state.hour_angle(longitude) * 15.0 * RADEG).sin_cos();

        let sin_alt = sin_lat * sin_dec + cos_lat * cos_dec * cos_ha;
        let azimuth = (cos_dec * sin_ha)
            .atan2(sin_lat * cos_dec * cos_ha - cos_lat * sin_dec)
            .to_degrees()
            + 180.0;

        let geocentric_alt = sin_alt.asin();
        let altitude =
            geocentric_alt.to_degrees() - parallax(state.distance()) * geocentric_alt.cos();

        HorizontalCoordinates { altitude, azimuth }
    }

    /// Altitude above the horizon in degrees.
    pub fn altitude(&self) -> Degree {
        self.altitude
    }

    /// Azimuth in degrees from north through east, in [0°, 360°).
    pub fn azimuth(&self) -> Degree {
        self.azimuth
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alt: {:.4}°, az: {:.4}°", self.altitude, self.azimuth)
    }
}
