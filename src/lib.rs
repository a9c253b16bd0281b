//! # Almanac
//!
//! Low-precision apparent positions of the Sun, the Moon and Keplerian
//! planets, with transit, rise, set, dawn and dusk times and topocentric
//! altitude/azimuth for an observer on the Earth.
//!
//! ## Pipeline
//!
//! ```text
//! time (Unix ms) ─► element formulas ─► Kepler ─► ecliptic (x, y, z)
//!                                                  │
//!            distance, λ, β ◄──────────────────────┤
//!            RA, Dec, hour angle ◄── obliquity, GMST
//!                                                  │
//!            transit / rise / set  ◄── successive substitution on time
//!            altitude / azimuth    ◄── observer + parallax
//! ```
//!
//! ## Modules
//!
//! - [`bodies`] – [`Body`](crate::bodies::Body) and the [`Sun`](crate::bodies::sun::Sun),
//!   [`Moon`](crate::bodies::moon::Moon) and [`Planet`](crate::bodies::planet::Planet) ephemerides.
//! - [`orbit_state`] – position of a body and every derived coordinate.
//! - [`riseset`] – event solver.
//! - [`observers`] – sites and horizontal coordinates.
//! - [`kepler`], [`ref_system`], [`earth_orientation`], [`time`] – numerical building blocks.
//! - [`settings`] – solver tolerances, loadable from TOML.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::bodies::{moon::Moon, sun::Sun, Body};
//! use almanac::observers::Observer;
//! use almanac::time::date_to_millis;
//!
//! let t = date_to_millis("2024-06-21T12:00:00")?;
//! let london = Observer::new(51.5, -0.13);
//!
//! let sun = Body::new(Sun, t)?;
//! let sunrise = london.rise(&sun)?;
//! let sunset = london.set(&sun)?;
//! assert!(sunrise.time() < sunset.time());
//!
//! let moon = Body::new(Moon, t)?;
//! println!("Moon: {}", london.horizontal(&moon));
//! # Ok::<(), almanac::almanac_errors::AlmanacError>(())
//! ```
//!
//! All instants are `f64` milliseconds since the Unix epoch (UTC); angles
//! are degrees unless a function says otherwise.

pub mod almanac_errors;
pub mod bodies;
pub mod constants;
pub mod earth_orientation;
pub mod kepler;
pub mod observers;
pub mod orbit_state;
pub mod orbit_type;
pub mod ref_system;
pub mod riseset;
pub mod settings;
pub mod time;
