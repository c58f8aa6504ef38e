//! Calendar domain logic for the student roster.
//!
//! This module contains all date handling: strict birthdate parsing,
//! interpretation of partial filter bounds, and age calculation. The UI
//! only handles presentation concerns; everything date-shaped that a form
//! or table needs is computed here.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error raised when a birthdate string fails strict validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateParseError {
    #[error("date must be in YYYY/MM/DD format")]
    MalformedInput,
    #[error("no such calendar date: {0}")]
    ImpossibleDate(String),
}

/// A concrete calendar date with explicit year, month, and day components.
///
/// Strict parsing goes through chrono's `NaiveDate`, so a parsed
/// `CalendarDate` always names a real day: month 13 or February 30 never
/// get past `parse_strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Parse a strict `YYYY/MM/DD` birthdate string.
    ///
    /// The shape must be exactly four digits, a slash, two digits, a slash,
    /// two digits. The components must then name a real calendar date.
    pub fn parse_strict(input: &str) -> Result<CalendarDate, DateParseError> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() != 3
            || parts[0].len() != 4
            || parts[1].len() != 2
            || parts[2].len() != 2
            || parts.iter().any(|p| !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DateParseError::MalformedInput);
        }

        let year: i32 = parts[0].parse().map_err(|_| DateParseError::MalformedInput)?;
        let month: u32 = parts[1].parse().map_err(|_| DateParseError::MalformedInput)?;
        let day: u32 = parts[2].parse().map_err(|_| DateParseError::MalformedInput)?;

        // chrono refuses to construct a date that does not exist on the
        // calendar, which is what catches 2000/13/01 or a non-leap Feb 29.
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateParseError::ImpossibleDate(input.to_string()))?;

        Ok(CalendarDate { year, month, day })
    }

    /// Today's date from the local wall clock.
    pub fn today() -> CalendarDate {
        let now = Local::now();
        CalendarDate {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    /// Age in whole years on the given day.
    ///
    /// One year is subtracted when the birthday has not yet occurred in
    /// `today`'s year.
    pub fn age_on(&self, today: CalendarDate) -> i32 {
        let mut age = today.year - self.year;
        if (today.month, today.day) < (self.month, self.day) {
            age -= 1;
        }
        age
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// A partial-precision date bound typed into the filter form.
///
/// Only as much precision as the user supplied is kept: `"2000"` covers the
/// whole year, `"2000-05"` the whole month, `"2000-05-01"` a single day.
/// A bound without a year is inactive and matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBound {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateBound {
    /// Parse a `YYYY`, `YYYY-MM`, or `YYYY-MM-DD` bound.
    ///
    /// Never fails: a component that does not parse as a number is simply
    /// absent, so `"abc"` yields an inactive bound.
    pub fn parse(input: &str) -> DateBound {
        let mut parts = input.split('-');
        let year = parts.next().and_then(|p| p.trim().parse().ok());
        let month = parts.next().and_then(|p| p.trim().parse().ok());
        let day = parts.next().and_then(|p| p.trim().parse().ok());
        DateBound { year, month, day }
    }

    /// Whether this bound constrains anything at all.
    pub fn is_active(&self) -> bool {
        self.year.is_some()
    }

    /// Inclusive lower-bound check.
    ///
    /// Each finer component is only consulted while every coarser component
    /// compared equal; absent components impose no constraint at their
    /// level, so a bound of just `2000` admits any day of that year and
    /// every later year.
    pub fn matches_min(&self, date: CalendarDate) -> bool {
        let year = match self.year {
            Some(year) => year,
            None => return true,
        };
        if date.year != year {
            return date.year > year;
        }

        let month = match self.month {
            Some(month) => month,
            None => return true,
        };
        if date.month != month {
            return date.month > month;
        }

        match self.day {
            Some(day) => date.day >= day,
            None => true,
        }
    }

    /// Inclusive upper-bound check, the mirror image of `matches_min`.
    pub fn matches_max(&self, date: CalendarDate) -> bool {
        let year = match self.year {
            Some(year) => year,
            None => return true,
        };
        if date.year != year {
            return date.year < year;
        }

        let month = match self.month {
            Some(month) => month,
            None => return true,
        };
        if date.month != month {
            return date.month < month;
        }

        match self.day {
            Some(day) => date.day <= day,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate { year, month, day }
    }

    #[test]
    fn test_parse_strict_valid_dates() {
        assert_eq!(
            CalendarDate::parse_strict("2000/06/15").unwrap(),
            date(2000, 6, 15)
        );
        // Leap year
        assert_eq!(
            CalendarDate::parse_strict("2000/02/29").unwrap(),
            date(2000, 2, 29)
        );
        assert_eq!(
            CalendarDate::parse_strict("1999/12/31").unwrap(),
            date(1999, 12, 31)
        );
    }

    #[test]
    fn test_parse_strict_rejects_impossible_dates() {
        // Non-leap year has no Feb 29
        assert_eq!(
            CalendarDate::parse_strict("2001/02/29"),
            Err(DateParseError::ImpossibleDate("2001/02/29".to_string()))
        );
        // Month overflow
        assert_eq!(
            CalendarDate::parse_strict("2000/13/01"),
            Err(DateParseError::ImpossibleDate("2000/13/01".to_string()))
        );
        // Day overflow
        assert!(CalendarDate::parse_strict("2000/04/31").is_err());
        assert!(CalendarDate::parse_strict("2000/00/10").is_err());
    }

    #[test]
    fn test_parse_strict_rejects_malformed_input() {
        // Wrong separator
        assert_eq!(
            CalendarDate::parse_strict("2000-02-29"),
            Err(DateParseError::MalformedInput)
        );
        // Wrong component widths
        assert!(CalendarDate::parse_strict("2000/2/29").is_err());
        assert!(CalendarDate::parse_strict("00/02/29").is_err());
        assert!(CalendarDate::parse_strict("2000/02/2").is_err());
        // Non-digits and stray text
        assert!(CalendarDate::parse_strict("2000/ab/01").is_err());
        assert!(CalendarDate::parse_strict("2000/02/29 ").is_err());
        assert!(CalendarDate::parse_strict("").is_err());
        assert!(CalendarDate::parse_strict("2000/02").is_err());
        assert!(CalendarDate::parse_strict("2000/02/29/01").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["2000/02/29", "1987/01/01", "2010/11/30"] {
            let parsed = CalendarDate::parse_strict(input).unwrap();
            assert_eq!(parsed.to_string(), input);
            assert_eq!(CalendarDate::parse_strict(&parsed.to_string()).unwrap(), parsed);
        }
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let birth = CalendarDate::parse_strict("2000/06/15").unwrap();

        // Day before the 24th birthday
        assert_eq!(birth.age_on(date(2024, 6, 14)), 23);
        // On the birthday itself
        assert_eq!(birth.age_on(date(2024, 6, 15)), 24);
        // Day after
        assert_eq!(birth.age_on(date(2024, 6, 16)), 24);
        // Earlier month of the year
        assert_eq!(birth.age_on(date(2024, 5, 20)), 23);
        // Later month of the year
        assert_eq!(birth.age_on(date(2024, 7, 1)), 24);
    }

    #[test]
    fn test_parse_bound_precision_levels() {
        assert_eq!(
            DateBound::parse("2000"),
            DateBound {
                year: Some(2000),
                month: None,
                day: None
            }
        );
        assert_eq!(
            DateBound::parse("2000-05"),
            DateBound {
                year: Some(2000),
                month: Some(5),
                day: None
            }
        );
        assert_eq!(
            DateBound::parse("2000-05-01"),
            DateBound {
                year: Some(2000),
                month: Some(5),
                day: Some(1)
            }
        );
    }

    #[test]
    fn test_parse_bound_malformed_input_is_inactive() {
        assert!(!DateBound::parse("abc").is_active());
        assert!(!DateBound::parse("").is_active());

        // Non-numeric trailing components are absent, not errors
        let bound = DateBound::parse("2000-xy-01");
        assert_eq!(bound.year, Some(2000));
        assert_eq!(bound.month, None);
        assert_eq!(bound.day, Some(1));
        assert!(bound.is_active());
    }

    #[test]
    fn test_matches_min_year_only() {
        let bound = DateBound::parse("2000");
        assert!(!bound.matches_min(date(1999, 12, 31)));
        // Inclusive at every precision the bound carries
        assert!(bound.matches_min(date(2000, 1, 1)));
        assert!(bound.matches_min(date(2000, 12, 31)));
        assert!(bound.matches_min(date(2001, 5, 1)));
    }

    #[test]
    fn test_matches_min_full_precision() {
        let bound = DateBound::parse("2000-05-15");
        assert!(!bound.matches_min(date(2000, 5, 14)));
        assert!(bound.matches_min(date(2000, 5, 15)));
        assert!(bound.matches_min(date(2000, 5, 16)));
        assert!(!bound.matches_min(date(2000, 4, 30)));
        // Day only applies when year and month are both equal
        assert!(bound.matches_min(date(2000, 6, 1)));
        assert!(bound.matches_min(date(2001, 1, 1)));
        assert!(!bound.matches_min(date(1999, 12, 31)));
    }

    #[test]
    fn test_matches_max_mirrors_min() {
        let bound = DateBound::parse("2000-05-15");
        assert!(bound.matches_max(date(2000, 5, 15)));
        assert!(bound.matches_max(date(2000, 5, 14)));
        assert!(!bound.matches_max(date(2000, 5, 16)));
        assert!(bound.matches_max(date(2000, 4, 30)));
        assert!(!bound.matches_max(date(2000, 6, 1)));
        assert!(bound.matches_max(date(1999, 12, 31)));
        assert!(!bound.matches_max(date(2001, 1, 1)));
    }

    #[test]
    fn test_inactive_bound_matches_everything() {
        let bound = DateBound::parse("nonsense");
        assert!(bound.matches_min(date(1900, 1, 1)));
        assert!(bound.matches_max(date(2100, 12, 31)));
    }

    #[test]
    fn test_day_without_month_never_constrains() {
        // "2000--15": the month failed to parse, so the day is unreachable
        let bound = DateBound::parse("2000--15");
        assert_eq!(bound.month, None);
        assert_eq!(bound.day, Some(15));
        assert!(bound.matches_min(date(2000, 1, 1)));
        assert!(bound.matches_max(date(2000, 12, 31)));
    }
}
