use serde::{Deserialize, Serialize};

use crate::{
    constants::{Millis, RADEG},
    orbit_type::keplerian_element::KeplerianElements,
    time::elements_day,
};

/// One orbital element modelled as `value + rate · d`.
///
/// `d` is the day count of [`elements_day`]. Angular elements are given in
/// **degrees** and **degrees/day**, the semi-major axis in **AU** and **AU/day**,
/// the eccentricity in **1/day**.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearElement {
    pub value: f64,
    pub rate: f64,
}

impl LinearElement {
    pub const fn new(value: f64, rate: f64) -> Self {
        LinearElement { value, rate }
    }

    /// An element that does not vary with time.
    pub const fn fixed(value: f64) -> Self {
        LinearElement { value, rate: 0.0 }
    }

    /// Evaluate the element for a day count `d`.
    pub fn at_day(&self, d: f64) -> f64 {
        self.value + self.rate * d
    }
}

/// Six time-linear orbital elements.
///
/// This is the shape of every low-precision element table: each element is a
/// constant plus a secular drift. Evaluating the set at an instant yields the
/// osculating [`KeplerianElements`] used by the orbit model.
///
/// Units
/// -----
/// * `semi_major_axis`: AU
/// * `eccentricity`: unitless
/// * `inclination`, `mean_longitude`, `perihelion_longitude`,
///   `ascending_node_longitude`: degrees (converted to radians on evaluation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearElements {
    pub semi_major_axis: LinearElement,
    pub eccentricity: LinearElement,
    pub inclination: LinearElement,
    pub mean_longitude: LinearElement,
    pub perihelion_longitude: LinearElement,
    pub ascending_node_longitude: LinearElement,
}

impl LinearElements {
    /// Evaluate the six elements at `time` (milliseconds since the Unix epoch).
    pub fn at(&self, time: Millis) -> KeplerianElements {
        let d = elements_day(time);
        KeplerianElements {
            semi_major_axis: self.semi_major_axis.at_day(d),
            eccentricity: self.eccentricity.at_day(d),
            inclination: self.inclination.at_day(d) * RADEG,
            mean_longitude: self.mean_longitude.at_day(d) * RADEG,
            perihelion_longitude: self.perihelion_longitude.at_day(d) * RADEG,
            ascending_node_longitude: self.ascending_node_longitude.at_day(d) * RADEG,
        }
    }
}
