use std::fmt;

use num_traits::FromPrimitive;

use crate::doomsday;
use crate::error::{Error, ErrorKind, Result};

/// A day of the week with the quiz code convention: Sunday is 0,
/// Saturday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn num_days_from_sunday(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl FromPrimitive for Weekday {
    fn from_i64(n: i64) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        if n < 7 {
            Self::from_i64(n as i64)
        } else {
            None
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A calendar month, numbered 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn number_from_month(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl FromPrimitive for Month {
    fn from_i64(n: i64) -> Option<Self> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        if n <= 12 {
            Self::from_i64(n as i64)
        } else {
            None
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Gregorian leap year rule: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_of_month(month: Month, year: i32) -> u32 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// A valid proleptic Gregorian date. The constructors reject any
/// (year, month, day) triple whose day does not exist in that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u32,
}

impl Date {
    /// Creates a `Date` from a year and an already-typed month.
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self> {
        if year < 1 {
            return Err(Error::new(
                ErrorKind::InvalidYear,
                &format!("year {} is before year 1", year),
            ));
        }

        if day < 1 || day > days_of_month(month, year) {
            return Err(Error::new(
                ErrorKind::InvalidDay,
                &format!("day {} does not exist in {} {}", day, month, year),
            ));
        }

        Ok(Date { year, month, day })
    }

    /// Creates a `Date` from plain numbers, with the month in 1..=12.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let month = Month::from_u32(month)
            .ok_or_else(|| Error::new(ErrorKind::InvalidMonth, &format!("month {}", month)))?;

        Date::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The day of the week this date falls on, via the doomsday method.
    pub fn weekday(&self) -> Weekday {
        doomsday::day_of_week(self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.day, self.month, self.year)
    }
}
