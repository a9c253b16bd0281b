use serde::{Deserialize, Serialize};

use crate::{
    bodies::Ephemeris, constants::Millis, orbit_type::keplerian_element::KeplerianElements,
    orbit_type::linear_elements::LinearElements,
};

/// A body on a Keplerian orbit described by user-supplied element formulas.
///
/// The rise/set altitude is the geometric horizon (0°). Positions are
/// relative to the origin of the supplied elements: elements given around
/// the Sun yield heliocentric coordinates.
///
/// Example
/// -------
/// ```rust
/// use almanac::bodies::{planet::Planet, Body};
/// use almanac::orbit_type::linear_elements::{LinearElement, LinearElements};
///
/// let mars = Planet::new(LinearElements {
///     semi_major_axis: LinearElement::fixed(1.523688),
///     eccentricity: LinearElement::new(0.093405, 2.516e-9),
///     inclination: LinearElement::new(1.8497, -1.78e-8),
///     mean_longitude: LinearElement::new(355.4330, 0.5240207766),
///     perihelion_longitude: LinearElement::new(336.0602, 4.4441088e-5),
///     ascending_node_longitude: LinearElement::new(49.5574, 2.11081e-5),
/// });
///
/// let body = Body::new(mars, 1_700_000_000_000.0).unwrap();
/// assert!(body.distance() > 1.3 && body.distance() < 1.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub elements: LinearElements,
}

impl Planet {
    pub fn new(elements: LinearElements) -> Self {
        Planet { elements }
    }
}

impl Ephemeris for Planet {
    fn elements(&self, time: Millis) -> KeplerianElements {
        self.elements.at(time)
    }
}
