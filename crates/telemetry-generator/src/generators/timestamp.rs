//! Timestamp generator.

use chrono::{Local, NaiveDateTime, SubsecRound};

/// Current local wall-clock time, without offset, truncated to microseconds.
///
/// Microsecond precision matches the serialized form, so a record's
/// timestamp survives a serialize/parse cycle unchanged. This is NOT
/// deterministic - each call reads the clock.
pub fn local_timestamp_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_local_timestamp_is_close_to_now() {
        let before = Local::now().naive_local().trunc_subsecs(6);
        let ts = local_timestamp_now();
        let after = Local::now().naive_local();

        assert!(before <= ts && ts <= after);
    }

    #[test]
    fn test_local_timestamp_has_microsecond_precision() {
        let ts = local_timestamp_now();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }
}
