use hifitime::Epoch;
use std::str::FromStr;

use crate::almanac_errors::AlmanacError;
use crate::constants::{
    Hour, Millis, ELEMENTS_EPOCH_MS, GMST_AT_J2000, GMST_RATE, J2000_MS, MS_PER_DAY,
};

/// Days elapsed since 1999-12-31T00:00 UTC, the origin of the element tables
///
/// Argument
/// --------
/// * `time`: instant in milliseconds since the Unix epoch
///
/// Return
/// ------
/// * the (fractional) day count used by the Sun and Moon element formulas
pub fn elements_day(time: Millis) -> f64 {
    (time - ELEMENTS_EPOCH_MS) / MS_PER_DAY
}

/// Days elapsed since J2000.0 (2000-01-01T12:00)
pub fn days_since_j2000(time: Millis) -> f64 {
    (time - J2000_MS) / MS_PER_DAY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in hours.
///
/// Linear approximation valid for a few centuries around J2000:
///
/// ```text
/// GMST = 18.697374558 + 24.06570982441908 · D
/// ```
///
/// with `D` the number of days since J2000.0.
///
/// # Arguments
/// * `time` - instant in milliseconds since the Unix epoch
///
/// # Returns
/// * GMST in hours, **not** wrapped into [0, 24): callers reduce it as needed.
pub fn gmst(time: Millis) -> Hour {
    GMST_AT_J2000 + GMST_RATE * days_since_j2000(time)
}

/// Convert a hifitime [`Epoch`] to milliseconds since the Unix epoch.
pub fn epoch_to_millis(epoch: Epoch) -> Millis {
    epoch.to_unix_milliseconds()
}

/// Convert milliseconds since the Unix epoch to a hifitime [`Epoch`] (UTC).
pub fn millis_to_epoch(time: Millis) -> Epoch {
    Epoch::from_unix_milliseconds(time)
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss (UTC) to Unix milliseconds
///
/// Argument
/// --------
/// * `date`: an ISO-8601 date string understood by hifitime
///
/// Return
/// ------
/// * the instant in milliseconds since the Unix epoch, or
///   [`AlmanacError::InvalidDate`] if the string cannot be parsed
pub fn date_to_millis(date: &str) -> Result<Millis, AlmanacError> {
    let epoch = Epoch::from_str(date)?;
    Ok(epoch_to_millis(epoch))
}
