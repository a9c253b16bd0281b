use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error("Eccentricity {0} is outside the elliptic range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("Kepler equation did not converge (e = {eccentricity}, M = {mean_anomaly} rad): {source}")]
    KeplerNoConvergence {
        eccentricity: f64,
        mean_anomaly: f64,
        #[source]
        source: roots::SearchError,
    },

    #[error("Rise/set search did not converge after {iterations} iterations (last step {last_step_ms} ms)")]
    RiseSetNoConvergence { iterations: usize, last_step_ms: f64 },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] hifitime::HifitimeError),

    #[error("Invalid solver settings: {0}")]
    InvalidSettings(#[from] toml::de::Error),
}

impl PartialEq for AlmanacError {
    fn eq(&self, other: &Self) -> bool {
        use AlmanacError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (
                KeplerNoConvergence {
                    eccentricity: e1,
                    mean_anomaly: m1,
                    source: s1,
                },
                KeplerNoConvergence {
                    eccentricity: e2,
                    mean_anomaly: m2,
                    source: s2,
                },
            ) => e1 == e2 && m1 == m2 && s1 == s2,
            (
                RiseSetNoConvergence {
                    iterations: i1,
                    last_step_ms: l1,
                },
                RiseSetNoConvergence {
                    iterations: i2,
                    last_step_ms: l2,
                },
            ) => i1 == i2 && l1 == l2,

            // Parser errors are not comparable: equal if same variant
            (InvalidDate(_), InvalidDate(_)) => true,
            (InvalidSettings(_), InvalidSettings(_)) => true,

            _ => false,
        }
    }
}
