//! Student creation and add-student form validation.
//!
//! The caller owns the roster: on success it appends the returned record to
//! its list and refreshes any filtered view it is holding. Whether a new
//! record should immediately appear in a filtered table is the caller's
//! policy, not this service's.

use anyhow::Result;
use log::{info, warn};
use shared::{
    Course, CreateStudentRequest, Student, StudentFormValidation, StudentResponse, ValidationError,
};

use crate::domain::calendar::CalendarDate;

/// Service for validating form input and building student records.
#[derive(Clone, Default)]
pub struct StudentService;

impl StudentService {
    /// Create a new StudentService
    pub fn new() -> Self {
        Self
    }

    /// Validate the add-student form input.
    ///
    /// Every problem is collected, not just the first, so the form can
    /// surface all of them at once.
    pub fn validate_student_input(&self, request: &CreateStudentRequest) -> StudentFormValidation {
        let mut errors = Vec::new();

        if request.last_name.trim().is_empty() {
            errors.push(ValidationError::EmptyLastName);
        }
        if request.first_name.trim().is_empty() {
            errors.push(ValidationError::EmptyFirstName);
        }

        let cleaned_course = if request.course.trim().is_empty() {
            errors.push(ValidationError::EmptyCourse);
            None
        } else {
            match Course::parse(&request.course) {
                Ok(course) => Some(course),
                Err(_) => {
                    errors.push(ValidationError::UnknownCourse(request.course.clone()));
                    None
                }
            }
        };

        if request.birthdate.trim().is_empty() {
            errors.push(ValidationError::EmptyBirthdate);
        } else if let Err(e) = CalendarDate::parse_strict(&request.birthdate) {
            errors.push(ValidationError::InvalidBirthdateFormat(e.to_string()));
        }

        StudentFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_course,
        }
    }

    /// Create an immutable student record from form input.
    ///
    /// Names are trimmed; the birthdate is kept exactly as validated.
    pub fn create_student(&self, request: CreateStudentRequest) -> Result<StudentResponse> {
        info!(
            "Creating student: {} {} ({})",
            request.first_name, request.last_name, request.course
        );

        let validation = self.validate_student_input(&request);
        if !validation.is_valid {
            let messages = self.validation_error_messages(&validation.errors).join("; ");
            warn!("Rejected add-student form input: {}", messages);
            return Err(anyhow::anyhow!(messages));
        }

        let course = Course::parse(&request.course)?;

        let student = Student {
            last_name: request.last_name.trim().to_string(),
            first_name: request.first_name.trim().to_string(),
            course,
            birthdate: request.birthdate,
        };

        info!(
            "Created student: {} {} ({}, born {})",
            student.first_name, student.last_name, student.course, student.birthdate
        );

        Ok(StudentResponse {
            student,
            success_message: "Student added successfully".to_string(),
        })
    }

    /// Get a user-facing message for a validation error.
    pub fn validation_error_message(&self, error: &ValidationError) -> String {
        match error {
            ValidationError::EmptyLastName => "Please enter a last name".to_string(),
            ValidationError::EmptyFirstName => "Please enter a first name".to_string(),
            ValidationError::EmptyCourse => "Please choose a course".to_string(),
            ValidationError::EmptyBirthdate => "Please enter a birthdate".to_string(),
            ValidationError::UnknownCourse(code) => format!("Unknown course: {}", code),
            ValidationError::InvalidBirthdateFormat(_) => {
                "Please enter a valid birthdate in the format YYYY/MM/DD.".to_string()
            }
        }
    }

    /// Get all validation error messages for a submission.
    pub fn validation_error_messages(&self, errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|e| self.validation_error_message(e)).collect()
    }
}
