use serde::{Deserialize, Serialize};
use std::fmt;

/// A student record as it appears in the roster table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub last_name: String,
    pub first_name: String,
    /// Course the student is enrolled in
    pub course: Course,
    /// Birthdate in strict YYYY/MM/DD format, validated at creation
    pub birthdate: String,
}

/// Course a student can be enrolled in.
///
/// This is a closed set: the form's course selector offers exactly these
/// four options, so no other value can enter the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "IS")]
    Is,
    #[serde(rename = "CS")]
    Cs,
    #[serde(rename = "DS")]
    Ds,
}

impl Course {
    /// All selectable courses, in the order the form presents them
    pub const ALL: [Course; 4] = [Course::It, Course::Is, Course::Cs, Course::Ds];

    /// Two-letter course code as shown in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::It => "IT",
            Course::Is => "IS",
            Course::Cs => "CS",
            Course::Ds => "DS",
        }
    }

    /// Parse a course code submitted by the form selector
    pub fn parse(code: &str) -> Result<Course, CourseParseError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "IT" => Ok(Course::It),
            "IS" => Ok(Course::Is),
            "CS" => Ok(Course::Cs),
            "DS" => Ok(Course::Ds),
            _ => Err(CourseParseError {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseParseError {
    pub code: String,
}

impl fmt::Display for CourseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown course code: {}", self.code)
    }
}

impl std::error::Error for CourseParseError {}

/// Request for creating a new student from raw form input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateStudentRequest {
    pub last_name: String,
    pub first_name: String,
    /// Course code from the form selector ("IT", "IS", "CS", "DS")
    pub course: String,
    /// Birthdate in YYYY/MM/DD format
    pub birthdate: String,
}

/// Response after creating a student
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentResponse {
    pub student: Student,
    pub success_message: String,
}

/// Response containing a list of students
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

/// Filter criteria for the roster table.
///
/// Every criterion is optional; an absent or unparseable criterion imposes
/// no constraint, so an empty request returns the roster unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RosterFilterRequest {
    /// Case-insensitive text matched against last name, first name,
    /// course code, or age
    pub search: Option<String>,
    /// Inclusive lower birthdate bound: "YYYY", "YYYY-MM" or "YYYY-MM-DD"
    pub min_birthdate: Option<String>,
    /// Inclusive upper birthdate bound: "YYYY", "YYYY-MM" or "YYYY-MM-DD"
    pub max_birthdate: Option<String>,
}

/// Validation result for the add-student form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    /// Parsed course when the course field validated
    pub cleaned_course: Option<Course>,
}

/// Specific validation errors for the add-student form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ValidationError {
    EmptyLastName,
    EmptyFirstName,
    EmptyCourse,
    EmptyBirthdate,
    UnknownCourse(String),
    InvalidBirthdateFormat(String),
}

/// A student row prepared for table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormattedStudent {
    pub last_name: String,
    pub first_name: String,
    pub course: String,
    pub formatted_birthdate: String,
    /// Age in whole years as of the formatting date, when configured
    pub age: Option<i32>,
    pub raw_birthdate: String,
}
