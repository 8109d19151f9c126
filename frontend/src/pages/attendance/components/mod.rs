pub mod event_details;
pub mod location_status;
pub mod student_info;
pub mod submit;
