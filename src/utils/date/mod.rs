// Date utility functions
// Local wall-clock helpers shared by the geometry engine and the grid

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveTime, Timelike};

/// Milliseconds in one calendar day of the grid (24 hours).
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Combine a calendar date and a wall-clock time into a local instant.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// times that do not exist locally (DST spring-forward gap) yield `None`.
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    date.and_time(time).and_local_timezone(Local).earliest()
}

pub fn start_of_day(date: NaiveDate) -> Option<DateTime<Local>> {
    local_datetime(date, NaiveTime::MIN)
}

/// Milliseconds elapsed since local midnight on the instant's own day.
pub fn millis_since_midnight(instant: DateTime<Local>) -> i64 {
    let secs = i64::from(instant.num_seconds_from_midnight());
    let millis = i64::from(instant.nanosecond() % 1_000_000_000) / 1_000_000;
    secs * 1000 + millis
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let following = next_month(first);
    following.signed_duration_since(first).num_days() as u32
}

/// Every date of the month containing `date`, in order.
pub fn month_dates(date: NaiveDate) -> Vec<NaiveDate> {
    first_of_month(date)
        .iter_days()
        .take(days_in_month(date) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(ymd(2025, 1, 15)), 31);
        assert_eq!(days_in_month(ymd(2025, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2024, 2, 29)), 29);
        assert_eq!(days_in_month(ymd(2025, 4, 30)), 30);
    }

    #[test]
    fn test_month_dates_cover_whole_month() {
        let dates = month_dates(ymd(2025, 1, 10));
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], ymd(2025, 1, 1));
        assert_eq!(dates[30], ymd(2025, 1, 31));
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        assert_eq!(previous_month(ymd(2025, 1, 31)), ymd(2024, 12, 1));
        assert_eq!(next_month(ymd(2024, 12, 31)), ymd(2025, 1, 1));
    }

    #[test]
    fn test_millis_since_midnight() {
        let instant = Local.with_ymd_and_hms(2025, 1, 10, 6, 0, 0).unwrap();
        assert_eq!(millis_since_midnight(instant), MS_PER_DAY / 4);
    }
}
