#![allow(dead_code)]

use almanac::almanac_errors::AlmanacError;
use almanac::constants::Millis;
use almanac::riseset::HorizonEvent;
use almanac::time::date_to_millis;
use approx::assert_abs_diff_eq;

/// Unix milliseconds of an ISO-8601 UTC date.
pub fn ms(date: &str) -> Millis {
    date_to_millis(date).unwrap()
}

/// Check that an event happens within `tolerance_ms` of the given date.
pub fn assert_event_near(
    event: Result<HorizonEvent, AlmanacError>,
    expected: &str,
    tolerance_ms: f64,
) {
    match event {
        Ok(HorizonEvent::Occurs(time)) => {
            assert_abs_diff_eq!(time, ms(expected), epsilon = tolerance_ms)
        }
        other => panic!("expected an event near {expected}, got {other:?}"),
    }
}
