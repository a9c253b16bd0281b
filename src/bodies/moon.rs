use crate::{
    bodies::Ephemeris,
    constants::{Degree, Millis, ERAU},
    earth_orientation::parallax,
    orbit_state::OrbitalState,
    orbit_type::{
        keplerian_element::KeplerianElements,
        linear_elements::{LinearElement, LinearElements},
    },
};

/// Geocentric mean elements of the Moon.
///
/// The semi-major axis is 60.2666 Earth radii, expressed in AU.
pub const MOON_ELEMENTS: LinearElements = LinearElements {
    semi_major_axis: LinearElement::fixed(60.2666 * ERAU),
    eccentricity: LinearElement::fixed(0.054900),
    inclination: LinearElement::fixed(5.1454),
    mean_longitude: LinearElement::new(198.5516, 13.1763964649),
    perihelion_longitude: LinearElement::new(83.1862, 0.1114035140),
    ascending_node_longitude: LinearElement::new(125.1228, -0.0529538083),
};

/// Lunar semi-diameter plus standard refraction, before the parallax correction.
pub const MOON_RISE_SET_ALTITUDE: Degree = -0.583;

/// The Moon.
///
/// Its rise/set altitude depends on the Earth–Moon distance: the horizontal
/// parallax (close to one degree) lifts the geocentric horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moon;

impl Ephemeris for Moon {
    fn elements(&self, time: Millis) -> KeplerianElements {
        MOON_ELEMENTS.at(time)
    }

    fn rise_set_altitude(&self, state: &OrbitalState) -> Degree {
        MOON_RISE_SET_ALTITUDE - parallax(state.distance())
    }
}
