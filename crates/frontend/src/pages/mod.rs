pub mod about;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod service_detail;
pub mod services;
