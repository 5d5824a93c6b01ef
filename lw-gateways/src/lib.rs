pub mod clipboard;
pub mod date;
pub mod notify;
pub mod report;
