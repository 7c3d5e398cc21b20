//! Contact form: configuration, submission with a single fallback, and UI.

pub mod api;
pub mod config;
pub mod submit;
pub mod ui;

pub use crate::shared::api_utils::resolve_api_base;
pub use config::ClientConfig;
pub use submit::{submit_with_fallback, SubmitError};
