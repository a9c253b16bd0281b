//! # Constants and type definitions for Almanac
//!
//! This module centralizes the **physical constants**, **time-base constants**
//! and **unit aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants (AU, Earth radius)
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, days ↔ milliseconds)
//! - The reference epochs of the low-precision element tables and of GMST
//! - Core type aliases used across the crate
//!
//! All time values in this crate are **milliseconds since the Unix epoch**
//! (1970-01-01T00:00:00 UTC) stored as `f64`.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Earth equatorial radius in meters (GRS1980/WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth radius expressed in astronomical units
pub const ERAU: f64 = (EARTH_MAJOR_AXIS / 1000.) / AU;

// -------------------------------------------------------------------------------------------------
// Time base
// -------------------------------------------------------------------------------------------------

/// Number of milliseconds in a day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Unix milliseconds of 1999-12-31T00:00:00 UTC ("2000 Jan 0.0"),
/// the origin of the day count used by the Sun/Moon element tables.
pub const ELEMENTS_EPOCH_MS: f64 = 946_598_400_000.0;

/// Unix milliseconds of J2000.0 (2000-01-01T12:00:00)
pub const J2000_MS: f64 = 946_728_000_000.0;

/// Greenwich mean sidereal time at J2000.0, in hours
pub const GMST_AT_J2000: Hour = 18.697_374_558;

/// Sidereal hours elapsed per solar day
pub const GMST_RATE: f64 = 24.065_709_824_419_08;

/// Milliseconds of clock time per hour of hour angle.
///
/// Moving the clock by this amount advances the hour angle of a fixed
/// point of the sky by exactly one hour.
pub const MS_PER_SIDEREAL_HOUR: f64 = MS_PER_DAY / GMST_RATE;

/// Milliseconds of clock time per radian of hour angle.
pub const MS_PER_HOUR_ANGLE_RADIAN: f64 = MS_PER_SIDEREAL_HOUR * 12.0 / std::f64::consts::PI;

/// Length of one sidereal day in milliseconds
pub const SIDEREAL_DAY_MS: f64 = 24.0 * MS_PER_SIDEREAL_HOUR;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or duration in hours
pub type Hour = f64;
/// Instant in milliseconds since the Unix epoch
pub type Millis = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;

#[cfg(test)]
mod constants_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sidereal_day_is_shorter_than_solar_day() {
        assert_relative_eq!(SIDEREAL_DAY_MS / 1000.0, 86_164.09, epsilon = 0.01);
    }

    #[test]
    fn epochs_are_consistent() {
        // J2000.0 is one and a half days after 2000 Jan 0.0
        assert_eq!(J2000_MS - ELEMENTS_EPOCH_MS, 1.5 * MS_PER_DAY);
    }
}
