//! # Domain Module
//!
//! Contains all business logic for the student roster.
//!
//! This module encapsulates the core rules for how student records are
//! validated, filtered, and prepared for display. It operates independently
//! of any specific UI framework; the presentation layer hands it plain data
//! and renders whatever comes back.
//!
//! ## Module Organization
//!
//! - **calendar**: Strict birthdate parsing, partial filter bounds, and age math
//! - **student_service**: Add-student form validation and record creation
//! - **roster_filter**: Text and birthdate-range filtering of the roster
//! - **student_table**: Roster row formatting for table display
//!
//! ## Business Rules
//!
//! - Students must have a non-empty last name, first name, course, and birthdate
//! - Birthdates are stored in strict YYYY/MM/DD form and never mutated
//! - Courses come from a closed set (IT, IS, CS, DS)
//! - Filtering never fails: malformed criteria impose no constraint
//! - The caller owns the record list; every operation here is a pure
//!   function of its inputs

pub mod calendar;
pub mod roster_filter;
pub mod student_service;
pub mod student_table;

pub use calendar::*;
pub use roster_filter::*;
pub use student_service::*;
pub use student_table::*;
