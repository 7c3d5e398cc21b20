pub mod resend_provider;
pub mod template;
pub mod types;

pub use resend_provider::ResendProvider;
pub use types::{EmailError, EmailProvider, OutgoingEmail, SentEmail};
