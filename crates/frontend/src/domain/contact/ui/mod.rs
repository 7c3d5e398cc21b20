pub mod form;

pub use form::ContactForm;
