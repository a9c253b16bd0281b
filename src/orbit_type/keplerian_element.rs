//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`](crate::orbit_type::keplerian_element::KeplerianElements)
//! struct, the **longitude-based** element set used by the low-precision
//! Sun/Moon/planet tables.
//!
//! ## What are the elements?
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (radians)
//! 4. **λ** – Mean longitude (radians)
//! 5. **ϖ** – Longitude of perihelion (radians), ϖ = ω + Ω
//! 6. **Ω** – Longitude of ascending node (radians)
//!
//! The classical angles follow from these: mean anomaly `M = λ − ϖ` and
//! argument of periapsis `ω = ϖ − Ω`.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **radians**
//!
//! ## See also
//!
//! - [`LinearElements`](crate::orbit_type::linear_elements::LinearElements) – time-linear element formulas.
//! - [`OrbitalState::from_elements`](crate::orbit_state::OrbitalState::from_elements) – element → position transform.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::Radian;
use crate::kepler::principal_angle;

/// Keplerian orbital elements at one instant.
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless.
/// * `inclination`: radians.
/// * `mean_longitude`: radians (λ).
/// * `perihelion_longitude`: radians (ϖ).
/// * `ascending_node_longitude`: radians (Ω).
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub perihelion_longitude: f64,
    pub ascending_node_longitude: f64,
}

impl KeplerianElements {
    /// Mean anomaly `M = λ − ϖ`, reduced to [0, 2π).
    pub fn mean_anomaly(&self) -> Radian {
        principal_angle(self.mean_longitude - self.perihelion_longitude)
    }

    /// Argument of periapsis `ω = ϖ − Ω`.
    pub fn periapsis_argument(&self) -> Radian {
        self.perihelion_longitude - self.ascending_node_longitude
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  λ   (mean longitude)        = {:.6} rad ({:.6}°)",
            self.mean_longitude,
            self.mean_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ϖ   (long. of perihelion)   = {:.6} rad ({:.6}°)",
            self.perihelion_longitude,
            self.perihelion_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )
    }
}
