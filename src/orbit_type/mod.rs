//! # Orbital element representations
//!
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) — Longitude-based elements
//!   `(a, e, i, λ, ϖ, Ω)` at one instant, the input of the orbit model.
//! - [`linear_elements`](crate::orbit_type::linear_elements) — Time-linear element
//!   formulas `value + rate · d` that produce [`KeplerianElements`](crate::orbit_type::keplerian_element::KeplerianElements)
//!   for any instant.
//!
//! ## Typical workflow
//!
//! ```rust
//! use almanac::orbit_type::linear_elements::{LinearElement, LinearElements};
//!
//! let table = LinearElements {
//!     semi_major_axis: LinearElement::fixed(1.523688),
//!     eccentricity: LinearElement::new(0.093405, 2.516e-9),
//!     inclination: LinearElement::new(1.8497, -1.78e-8),
//!     mean_longitude: LinearElement::new(355.4330, 0.5240207766),
//!     perihelion_longitude: LinearElement::new(336.0602, 4.4441088e-5),
//!     ascending_node_longitude: LinearElement::new(49.5574, 2.11081e-5),
//! };
//!
//! let elements = table.at(1_700_000_000_000.0);
//! assert!(elements.eccentricity > 0.09);
//! ```

/// Keplerian elements structure and derived angles.
pub mod keplerian_element;

/// Time-linear element formulas.
pub mod linear_elements;
