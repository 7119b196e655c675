use chrono::Utc;

/// Current time as a fractional Unix timestamp in seconds.
///
/// Stamped when request parameters are built, so repeated calls carry
/// fresh values.
pub(crate) fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
