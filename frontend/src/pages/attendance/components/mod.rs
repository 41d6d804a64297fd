pub mod form;

pub use form::MarkAttendanceForm;
