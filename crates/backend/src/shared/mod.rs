pub mod config;
pub mod email;
pub mod format;
pub mod submission;
