use crate::{
    bodies::{Ephemeris, TwilightEphemeris},
    constants::{Degree, Millis},
    orbit_state::OrbitalState,
    orbit_type::{
        keplerian_element::KeplerianElements,
        linear_elements::{LinearElement, LinearElements},
    },
};

/// Geocentric elements of the Sun (the Earth's orbit seen from the Earth).
///
/// The orbit lies in the ecliptic, so inclination and node are zero.
/// Angles in degrees, rates per day since 1999-12-31T00:00 UTC.
pub const SUN_ELEMENTS: LinearElements = LinearElements {
    semi_major_axis: LinearElement::fixed(1.000000),
    eccentricity: LinearElement::new(0.016709, -1.151e-9),
    inclination: LinearElement::fixed(0.0),
    mean_longitude: LinearElement::new(278.9874, 0.985647352),
    perihelion_longitude: LinearElement::new(282.9404, 4.70935e-5),
    ascending_node_longitude: LinearElement::fixed(0.0),
};

/// Altitude of the Sun's centre at sunrise/sunset: solar semi-diameter plus
/// standard refraction.
pub const SUN_RISE_SET_ALTITUDE: Degree = -0.833;

/// The Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sun;

impl Ephemeris for Sun {
    fn elements(&self, time: Millis) -> KeplerianElements {
        SUN_ELEMENTS.at(time)
    }

    fn rise_set_altitude(&self, _state: &OrbitalState) -> Degree {
        SUN_RISE_SET_ALTITUDE
    }
}

impl TwilightEphemeris for Sun {}

#[cfg(test)]
mod sun_test {
    use super::*;
    use crate::bodies::Body;
    use crate::time::date_to_millis;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_at_unix_epoch() {
        let sun = Body::new(Sun, 0.0).unwrap();

        assert_abs_diff_eq!(sun.distance(), 0.9832910153143176, epsilon = 1e-10);
        assert_abs_diff_eq!(sun.longitude(), 280.16024742996933, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.latitude(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sun.right_ascension(), 18.736851244383384, epsilon = 1e-7);
        assert_abs_diff_eq!(sun.declination(), -23.05415353886573, epsilon = 1e-6);
        assert_abs_diff_eq!(sun.hour_angle(0.0), 11.945122241508216, epsilon = 1e-6);
    }

    #[test]
    fn test_equinox_and_solstice() {
        // Close to the March 2024 equinox (03-20 03:06 UTC)
        let equinox = Body::new(Sun, date_to_millis("2024-03-20T03:06:00").unwrap()).unwrap();
        assert_abs_diff_eq!(equinox.declination(), 0.0, epsilon = 0.05);

        let solstice = Body::new(Sun, date_to_millis("2024-06-20T20:51:00").unwrap()).unwrap();
        assert_abs_diff_eq!(solstice.declination(), 23.44, epsilon = 0.02);
        assert_abs_diff_eq!(solstice.longitude(), 90.0, epsilon = 0.05);
    }

    #[test]
    fn test_rise_set_altitude() {
        let sun = Body::new(Sun, 0.0).unwrap();
        assert_eq!(Sun.rise_set_altitude(sun.state()), -0.833);
    }
}
