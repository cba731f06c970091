//! schoolbook-report: derived attendance reports and CSV export.

pub mod csv;
pub mod report;

pub use csv::{by_day_csv, by_student_csv, to_csv};
pub use report::AttendanceReport;
