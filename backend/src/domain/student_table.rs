//! Student table domain logic for the roster.
//!
//! This module handles the transformation of raw student records into
//! formatted, user-friendly table rows. It is pure data preparation:
//! birthdate display formatting and the derived age column live here,
//! independent of any specific UI framework.
//!
//! ## Core Components
//!
//! - **StudentTableService**: Main service for row preparation
//! - **StudentTableConfig**: Configuration for display preferences
//! - **FormattedStudent**: Structured data for table display

use serde::{Deserialize, Serialize};
use shared::{FormattedStudent, Student};

use crate::domain::calendar::CalendarDate;

/// Configuration for student table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentTableConfig {
    pub date_format: DateFormat,
    /// Whether the derived age column is populated
    pub show_age: bool,
}

/// Date formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    /// "2000/06/15", the stored form
    Slash,
    /// "June 15, 2000"
    MonthDayYear,
    /// "2000-06-15"
    Iso,
}

/// Student table service that prepares roster rows for display
#[derive(Clone)]
pub struct StudentTableService {
    config: StudentTableConfig,
}

impl StudentTableService {
    /// Create a new StudentTableService with default configuration
    pub fn new() -> Self {
        Self {
            config: StudentTableConfig::default(),
        }
    }

    /// Create a new StudentTableService with custom configuration
    pub fn with_config(config: StudentTableConfig) -> Self {
        Self { config }
    }

    /// Format a list of students for table display, with ages as of today
    pub fn format_students_for_table(&self, students: &[Student]) -> Vec<FormattedStudent> {
        self.format_students_for_table_on(students, CalendarDate::today())
    }

    /// Format a list of students with ages as of an explicit date
    pub fn format_students_for_table_on(
        &self,
        students: &[Student],
        today: CalendarDate,
    ) -> Vec<FormattedStudent> {
        students
            .iter()
            .map(|student| self.format_single_student(student, today))
            .collect()
    }

    /// Format a single student row
    pub fn format_single_student(&self, student: &Student, today: CalendarDate) -> FormattedStudent {
        let birthdate = CalendarDate::parse_strict(&student.birthdate).ok();

        FormattedStudent {
            last_name: student.last_name.clone(),
            first_name: student.first_name.clone(),
            course: student.course.as_str().to_string(),
            formatted_birthdate: birthdate
                .map(|date| self.format_date(date))
                // Fallback to the stored string
                .unwrap_or_else(|| student.birthdate.clone()),
            age: if self.config.show_age {
                birthdate.map(|date| date.age_on(today))
            } else {
                None
            },
            raw_birthdate: student.birthdate.clone(),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: CalendarDate) -> String {
        match self.config.date_format {
            DateFormat::Slash => date.to_string(),
            DateFormat::MonthDayYear => {
                format!("{} {}, {}", self.month_name(date.month), date.day, date.year)
            }
            DateFormat::Iso => format!("{}-{:02}-{:02}", date.year, date.month, date.day),
        }
    }

    /// Get human-readable month name
    fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }
}

impl Default for StudentTableService {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for StudentTableConfig {
    fn default() -> Self {
        Self {
            date_format: DateFormat::Slash,
            show_age: true,
        }
    }
}
