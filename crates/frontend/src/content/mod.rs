//! Static site content. Loaded with the binary, never mutated.

pub mod case_studies;
pub mod faqs;
pub mod services;
pub mod testimonials;

pub const SITE_NAME: &str = "Flowline Automation";
pub const CONTACT_EMAIL: &str = "hello@flowline.dev";
