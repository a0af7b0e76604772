//! Random date generation for the quiz.

use num_traits::FromPrimitive;
use rand::Rng;

use crate::calendar::{days_of_month, Date, Month};

/// Default year range for generated dates, upper bound exclusive.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Draws uniformly random valid dates from a half-open year range.
///
/// The random source is passed in by the caller, so a seeded generator
/// yields a reproducible sequence of dates.
#[derive(Debug, Clone)]
pub struct DatePicker {
    min_year: i32,
    max_year: i32,
}

impl Default for DatePicker {
    fn default() -> Self {
        DatePicker {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
        }
    }
}

impl DatePicker {
    pub fn new() -> Self {
        DatePicker::default()
    }

    pub fn random_year<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min_year..self.max_year)
    }

    pub fn random_month<R: Rng>(&self, rng: &mut R) -> Month {
        Month::from_u32(rng.gen_range(1..=12)).expect("drawn month is in 1..=12")
    }

    pub fn random_day<R: Rng>(&self, rng: &mut R, month: Month, year: i32) -> u32 {
        rng.gen_range(1..=days_of_month(month, year))
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> Date {
        let year = self.random_year(rng);
        let month = self.random_month(rng);
        let day = self.random_day(rng, month, year);

        Date::new(year, month, day).expect("drawn day is within the month")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picked_dates_are_always_valid_and_in_range() {
        let picker = DatePicker::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let date = picker.pick(&mut rng);
            assert!(MIN_YEAR <= date.year() && date.year() < MAX_YEAR);
            assert!(1 <= date.day() && date.day() <= days_of_month(date.month(), date.year()));
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_sequence() {
        let picker = DatePicker::new();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            assert_eq!(picker.pick(&mut rng1), picker.pick(&mut rng2));
        }
    }

    #[test]
    fn every_month_shows_up() {
        let picker = DatePicker::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = [false; 12];

        for _ in 0..1_000 {
            let date = picker.pick(&mut rng);
            seen[date.month().number_from_month() as usize - 1] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn day_31_shows_up_in_long_months() {
        let picker = DatePicker::new();
        let mut rng = StdRng::seed_from_u64(7);

        assert!((0..10_000).any(|_| picker.pick(&mut rng).day() == 31));
    }
}
