pub mod dto;
pub mod validation;

pub use dto::{ContactErrorCode, ContactRequest, ContactResponse, CONTACT_PATH};
pub use validation::{ContactField, FieldErrors};
