//! # Solver settings
//!
//! Tolerances and iteration caps for the two iterative parts of the crate:
//! the Newton solver of Kepler's equation and the fixed-point search for
//! rise/set instants.
//!
//! The defaults reproduce the classical behaviour (1e-8 rad on the eccentric
//! anomaly, one minute on rise/set instants). The caps only matter for
//! degenerate inputs: a well-conditioned problem converges long before
//! reaching them, and exceeding a cap is reported as an
//! [`AlmanacError`](crate::almanac_errors::AlmanacError) instead of looping forever.
//!
//! Settings can be loaded from a TOML fragment; missing keys keep their default:
//!
//! ```rust
//! use almanac::settings::SolverSettings;
//!
//! let settings = SolverSettings::from_toml_str("riseset_tolerance_ms = 1000.0").unwrap();
//! assert_eq!(settings.riseset_tolerance_ms, 1000.0);
//! assert_eq!(settings.kepler_tolerance, 1e-8);
//! ```

use serde::{Deserialize, Serialize};

use crate::{almanac_errors::AlmanacError, constants::Millis};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Absolute tolerance on the Newton increment of the eccentric anomaly (radians).
    pub kepler_tolerance: f64,
    /// Maximum number of Newton steps before giving up.
    pub kepler_max_iterations: usize,
    /// A rise/set candidate is accepted once it moves by less than this (milliseconds).
    pub riseset_tolerance_ms: Millis,
    /// Maximum number of fixed-point refinements of a rise/set candidate.
    pub riseset_max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            kepler_tolerance: 1e-8,
            kepler_max_iterations: 100,
            riseset_tolerance_ms: 60_000.0,
            riseset_max_iterations: 50,
        }
    }
}

impl SolverSettings {
    /// Parse settings from a TOML document.
    ///
    /// Keys absent from the document keep their [`Default`] value.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::InvalidSettings`] if the document is not valid TOML
    ///   or a key has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self, AlmanacError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod settings_test {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SolverSettings::default();
        assert_eq!(settings.kepler_tolerance, 1e-8);
        assert_eq!(settings.kepler_max_iterations, 100);
        assert_eq!(settings.riseset_tolerance_ms, 60_000.0);
        assert_eq!(settings.riseset_max_iterations, 50);
    }

    #[test]
    fn test_partial_toml() {
        let settings = SolverSettings::from_toml_str(
            "kepler_max_iterations = 12\nriseset_max_iterations = 7\n",
        )
        .unwrap();
        assert_eq!(settings.kepler_max_iterations, 12);
        assert_eq!(settings.riseset_max_iterations, 7);
        assert_eq!(settings.riseset_tolerance_ms, 60_000.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings = SolverSettings::from_toml_str("").unwrap();
        assert_eq!(settings, SolverSettings::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SolverSettings::from_toml_str("kepler_tolerance = \"tight\"").unwrap_err();
        assert!(matches!(err, AlmanacError::InvalidSettings(_)));
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = SolverSettings {
            kepler_tolerance: 1e-12,
            ..SolverSettings::default()
        };
        let toml_str = toml::to_string(&settings).unwrap();
        assert_eq!(SolverSettings::from_toml_str(&toml_str).unwrap(), settings);
    }
}
