pub mod domain;

pub use domain::calendar::{CalendarDate, DateBound, DateParseError};
pub use domain::roster_filter::RosterFilterService;
pub use domain::student_service::StudentService;
pub use domain::student_table::{DateFormat, StudentTableConfig, StudentTableService};
