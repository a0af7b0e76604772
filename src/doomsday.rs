//! Conway's doomsday method for computing the day of the week.
//!
//! Every year has a "doomsday": the weekday that a handful of easy to
//! remember dates (4/4, 6/6, 8/8, 10/10, 12/12, ...) all fall on. The
//! weekday of an arbitrary date is the year's doomsday shifted by the
//! distance to the nearest such reference date.

use num_traits::FromPrimitive;

use crate::calendar::{is_leap_year, Date, Month, Weekday};

/// Anchor weekday code of the date's century. The Gregorian calendar
/// repeats every 400 years, so only `century mod 4` matters.
fn century_anchor(year: i32) -> i32 {
    let century = year / 100;
    (5 * (century % 4) + 2) % 7
}

/// Doomsday weekday code for the given year: the century anchor plus
/// the within-century offset `y + y/4`.
fn year_doomsday(year: i32) -> i32 {
    let y = year % 100;
    (century_anchor(year) + y + y / 4) % 7
}

/// The fixed doomsday reference date within the month. January and
/// February shift by one day in leap years.
fn reference_day(month: Month, year: i32) -> i32 {
    match month {
        Month::January => {
            if is_leap_year(year) {
                4
            } else {
                3
            }
        }
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::March => 14,
        Month::April => 4,
        Month::May => 9,
        Month::June => 6,
        Month::July => 11,
        Month::August => 8,
        Month::September => 5,
        Month::October => 10,
        Month::November => 7,
        Month::December => 12,
    }
}

/// Computes the day of the week for any valid date from year 1 onwards
/// (proleptic Gregorian).
pub fn day_of_week(date: &Date) -> Weekday {
    let doomsday = year_doomsday(date.year());
    let reference = reference_day(date.month(), date.year());
    let code = (doomsday + date.day() as i32 - reference).rem_euclid(7);

    Weekday::from_i32(code).expect("code is normalized into 0..7")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Date;

    fn weekday_of(year: i32, month: u32, day: u32) -> Weekday {
        day_of_week(&Date::from_ymd(year, month, day).unwrap())
    }

    #[test]
    fn known_dates() {
        assert_eq!(weekday_of(2000, 1, 1), Weekday::Saturday);
        assert_eq!(weekday_of(2024, 1, 1), Weekday::Monday);
        assert_eq!(weekday_of(1900, 1, 1), Weekday::Monday);
    }

    #[test]
    fn doomsday_reference_dates_share_a_weekday() {
        for year in [1900, 1999, 2000, 2023, 2024].iter().copied() {
            let doomsday = weekday_of(year, 4, 4);
            for (month, day) in [(6, 6), (8, 8), (10, 10), (12, 12), (5, 9), (9, 5)]
                .iter()
                .copied()
            {
                assert_eq!(weekday_of(year, month, day), doomsday, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn leap_year_february_adjustment() {
        // Last day of February is a doomsday in both year kinds.
        assert_eq!(weekday_of(2024, 2, 29), weekday_of(2024, 4, 4));
        assert_eq!(weekday_of(2023, 2, 28), weekday_of(2023, 4, 4));
    }

    #[test]
    fn century_boundaries_match_reference_calendar() {
        use chrono::Datelike;

        for year in [1600, 1700, 1800, 1900, 2000, 2100, 2200, 2300, 2400]
            .iter()
            .copied()
        {
            let expected = chrono::NaiveDate::from_ymd_opt(year, 1, 1)
                .unwrap()
                .weekday()
                .num_days_from_sunday();
            assert_eq!(
                weekday_of(year, 1, 1).num_days_from_sunday(),
                expected,
                "Jan 1, {}",
                year
            );
        }
    }

    #[test]
    fn matches_reference_calendar_for_every_date() {
        use chrono::Datelike;

        let mut current = chrono::NaiveDate::from_ymd_opt(1583, 1, 1).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(3000, 12, 31).unwrap();

        while current <= end {
            let ours = weekday_of(current.year(), current.month(), current.day());
            assert_eq!(
                ours.num_days_from_sunday(),
                current.weekday().num_days_from_sunday(),
                "{}",
                current
            );
            current = current.succ_opt().unwrap();
        }
    }

    #[test]
    fn works_before_the_generator_range() {
        use chrono::Datelike;

        // The calculator itself is not bounded to 1900..2100.
        for (year, month, day) in [(1, 1, 1), (800, 12, 25), (1582, 10, 15)].iter().copied() {
            let expected = chrono::NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .weekday()
                .num_days_from_sunday();
            assert_eq!(weekday_of(year, month, day).num_days_from_sunday(), expected);
        }
    }
}
