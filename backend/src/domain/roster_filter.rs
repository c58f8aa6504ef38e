//! Roster filtering domain logic.
//!
//! Applies the table's filter criteria (free-text search plus partial
//! birthdate bounds) to a caller-owned list of students. Filtering never
//! fails and holds no state: every call is a pure function of the list and
//! the criteria, and the original record order is preserved.

use log::info;
use shared::{RosterFilterRequest, Student};

use crate::domain::calendar::{CalendarDate, DateBound};

/// Service that filters the roster for table display.
#[derive(Clone, Default)]
pub struct RosterFilterService;

impl RosterFilterService {
    /// Create a new RosterFilterService
    pub fn new() -> Self {
        Self
    }

    /// Filter students against the request, using today's wall-clock date
    /// for age matching.
    pub fn filter_students(
        &self,
        students: &[Student],
        request: &RosterFilterRequest,
    ) -> Vec<Student> {
        self.filter_students_on(students, request, CalendarDate::today())
    }

    /// Filter students as of an explicit `today`.
    ///
    /// A record matches when it satisfies the minimum bound, the maximum
    /// bound, and the search term, all at once. Bounds that do not parse
    /// impose no constraint, and an empty search term matches everything.
    pub fn filter_students_on(
        &self,
        students: &[Student],
        request: &RosterFilterRequest,
        today: CalendarDate,
    ) -> Vec<Student> {
        let min_bound = request
            .min_birthdate
            .as_deref()
            .map(DateBound::parse)
            .unwrap_or_default();
        let max_bound = request
            .max_birthdate
            .as_deref()
            .map(DateBound::parse)
            .unwrap_or_default();
        let search = request.search.as_deref().unwrap_or("").to_lowercase();

        let filtered: Vec<Student> = students
            .iter()
            .filter(|student| self.matches(student, &search, min_bound, max_bound, today))
            .cloned()
            .collect();

        info!(
            "Filtered roster: {} of {} students match",
            filtered.len(),
            students.len()
        );

        filtered
    }

    fn matches(
        &self,
        student: &Student,
        search: &str,
        min_bound: DateBound,
        max_bound: DateBound,
        today: CalendarDate,
    ) -> bool {
        // Records are validated on insert, so the birthdate parses for
        // anything built through StudentService. A fabricated record with a
        // bad date is not excluded by bounds and has no age to match.
        let birthdate = CalendarDate::parse_strict(&student.birthdate).ok();

        if let Some(date) = birthdate {
            if !min_bound.matches_min(date) || !max_bound.matches_max(date) {
                return false;
            }
        }

        self.matches_search(student, birthdate, search, today)
    }

    /// Case-insensitive substring match against last name, first name,
    /// course code, or the decimal form of the computed age.
    fn matches_search(
        &self,
        student: &Student,
        birthdate: Option<CalendarDate>,
        search: &str,
        today: CalendarDate,
    ) -> bool {
        if search.is_empty() {
            return true;
        }

        student.last_name.to_lowercase().contains(search)
            || student.first_name.to_lowercase().contains(search)
            || student.course.as_str().to_lowercase().contains(search)
            || birthdate
                .map(|date| date.age_on(today).to_string().contains(search))
                .unwrap_or(false)
    }
}
