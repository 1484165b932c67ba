//! Stateless start-of-day calculations over chrono's civil-calendar API.
//!
//! Zones with a DST transition at midnight may have no local midnight, or
//! two; these helpers resolve an ambiguous midnight to the earliest
//! instant and report a nonexistent one as `None` rather than inventing a
//! value.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

/// Midnight of `t`'s civil date, in `t`'s own zone.
#[must_use]
pub fn start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    start_of_day_in(t, &t.timezone())
}

/// Midnight of `t`'s civil date after converting to `tz`.
#[must_use]
pub fn start_of_day_in<Tz, Tz2>(t: &DateTime<Tz>, tz: &Tz2) -> Option<DateTime<Tz2>>
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    let midnight = t.with_timezone(tz).date_naive().and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight).earliest()
}

/// Whether `t` is exactly midnight in its own zone: hour, minute, second
/// and nanosecond all zero.
#[must_use]
pub fn is_start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    t.hour() == 0 && t.minute() == 0 && t.second() == 0 && t.nanosecond() == 0
}

/// Whether `t` is exactly midnight after converting to `tz`.
#[must_use]
pub fn is_start_of_day_in<Tz, Tz2>(t: &DateTime<Tz>, tz: &Tz2) -> bool
where
    Tz: TimeZone,
    Tz2: TimeZone,
{
    is_start_of_day(&t.with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta, Utc};

    #[test]
    fn start_of_day_truncates_time_of_day() {
        let t = Utc.with_ymd_and_hms(2024, 3, 15, 13, 45, 59).unwrap();
        let midnight = start_of_day(&t).unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn start_of_day_is_identity_at_midnight() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(start_of_day(&midnight), Some(midnight));
    }

    #[test]
    fn start_of_day_keeps_the_value_zone() {
        let plus_nine = FixedOffset::east_opt(9 * 3600).unwrap();
        let t = plus_nine.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap();
        let midnight = start_of_day(&t).unwrap();
        assert_eq!(
            midnight,
            plus_nine.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn start_of_day_in_uses_the_target_zone_civil_date() {
        // 23:00 UTC on the 14th is already the 15th in +05:00.
        let t = Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap();
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let midnight = start_of_day_in(&t, &plus_five).unwrap();
        assert_eq!(
            midnight,
            plus_five.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn start_of_day_in_agrees_with_converting_first() {
        let t = Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap();
        let minus_seven = FixedOffset::west_opt(7 * 3600).unwrap();
        let converted = t.with_timezone(&minus_seven);
        assert_eq!(start_of_day_in(&t, &minus_seven), start_of_day(&converted));
    }

    #[test]
    fn is_start_of_day_accepts_exact_midnight() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert!(is_start_of_day(&midnight));
    }

    #[test]
    fn is_start_of_day_rejects_any_nonzero_component() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert!(!is_start_of_day(&(midnight + TimeDelta::hours(1))));
        assert!(!is_start_of_day(&(midnight + TimeDelta::minutes(1))));
        assert!(!is_start_of_day(&(midnight + TimeDelta::seconds(1))));
        assert!(!is_start_of_day(&(midnight + TimeDelta::nanoseconds(1))));
    }

    #[test]
    fn is_start_of_day_in_depends_on_the_zone() {
        // Midnight in +02:00 is 22:00 of the previous day in UTC.
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = Utc.with_ymd_and_hms(2024, 3, 14, 22, 0, 0).unwrap();
        assert!(!is_start_of_day(&t.with_timezone(&Utc)));
        assert!(is_start_of_day_in(&t, &plus_two));
    }
}
