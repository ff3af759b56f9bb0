//! Proleptic Gregorian calendar arithmetic.
//!
//! Date validity is plain arithmetic on (year, month, day) so that any
//! two-digit day field can be probed without constructing a date first.
//! Whole-year differences work on [`NaiveDate`].

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Returns true if (year, month, day) names a real calendar date.
///
/// `day` is signed so callers can probe `day - 60` without underflow.
pub fn is_valid_date(year: i32, month: u32, day: i32) -> bool {
    match days_in_month(year, month) {
        Some(max) => day >= 1 && day <= max as i32,
        None => false,
    }
}

/// Signed number of complete years between two dates.
///
/// Positive when `from` is later than `to`, so
/// `years_between(today, birth_date)` is an age. A year is complete once the
/// anniversary of the earlier date has been reached; the anniversary of
/// 29 February in a common year is 1 March. Swapping the arguments only
/// flips the sign.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let (sign, later, earlier) = match from.cmp(&to) {
        Ordering::Less => (-1, to, from),
        Ordering::Equal => return 0,
        Ordering::Greater => (1, from, to),
    };
    let year_diff = later.year() - earlier.year();

    let incomplete_year = anniversary(earlier, year_diff) > later;

    sign * (year_diff - i32::from(incomplete_year))
}

/// `date` moved forward by `years`, keeping month and day. A 29 February
/// that lands in a common year becomes 1 March.
fn anniversary(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1800i32..2200, 1u32..=12, 1u32..=31)
            .prop_filter_map("not a calendar date", |(y, m, d)| {
                NaiveDate::from_ymd_opt(y, m, d)
            })
    }

    proptest! {
        #[test]
        fn years_between_reflexive_zero(d in any_date()) {
            prop_assert_eq!(years_between(d, d), 0);
        }

        #[test]
        fn years_between_antisymmetric(a in any_date(), b in any_date()) {
            prop_assert_eq!(years_between(a, b), -years_between(b, a));
        }

        /// 29 February is always drawn from a leap year.
        #[test]
        fn years_between_antisymmetric_on_leap_days(
            y in (1800i32..2200).prop_filter("leap year", |y| is_leap_year(*y)),
            b in any_date(),
        ) {
            let a = NaiveDate::from_ymd_opt(y, 2, 29).unwrap();
            prop_assert_eq!(years_between(a, b), -years_between(b, a));
        }

        #[test]
        fn is_valid_date_agrees_with_chrono(y in 1600i32..2400, m in 0u32..14, d in -2i32..33) {
            let ours = is_valid_date(y, m, d);
            let chrono = u32::try_from(d)
                .ok()
                .and_then(|d| NaiveDate::from_ymd_opt(y, m, d))
                .is_some();
            prop_assert_eq!(ours, chrono);
        }
    }
}
