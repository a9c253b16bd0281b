use crate::{
    constants::{AstronomicalUnit, Degree, Millis, Radian, ERAU, RADEG},
    time::elements_day,
};

/// Compute the mean obliquity of the ecliptic at a given instant.
///
/// This function returns the obliquity ε, the angle between the Earth's
/// equator and the ecliptic plane, using a linear model that is adequate for
/// low-precision work within a few centuries of 2000:
///
/// ```text
/// ε(d) = 23.4393° − 3.563e-7° · d
/// ```
///
/// where `d` is the day count of [`elements_day`].
///
/// Arguments
/// ---------
/// * `time`: instant in milliseconds since the Unix epoch.
///
/// Returns
/// --------
/// * Obliquity of the ecliptic in radians.
///
/// # See also
/// * [`rotmt`](crate::ref_system::rotmt) – used with this angle to rotate
///   ecliptic vectors into the equatorial frame
pub fn obliquity(time: Millis) -> Radian {
    const OB0: Degree = 23.4393;
    const OB1: Degree = -3.563e-7;

    (OB0 + OB1 * elements_day(time)) * RADEG
}

/// Horizontal parallax of a body at the given geocentric distance.
///
/// The parallax is approximated as `ERAU / r` (small-angle form of
/// `asin(R⊕ / r)`), expressed in degrees.
///
/// A zero distance yields `inf`; orbiting bodies never reach it.
///
/// Arguments
/// ---------
/// * `distance`: geocentric distance in AU.
///
/// Returns
/// --------
/// * Parallax in degrees.
pub fn parallax(distance: AstronomicalUnit) -> Degree {
    ERAU.to_degrees() / distance
}
