use serde::{Deserialize, Serialize};

/// Path of the contact endpoint, relative to an API base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// Payload posted by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Full URL of the page the form was submitted from. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ContactRequest {
    /// Presence check applied by the server: every field must be non-blank.
    ///
    /// Format and length rules are client-side only (see [`ContactRequest::validate`]).
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// Uniform response envelope: `{ ok: true }` or `{ ok: false, error: "<code>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self { ok: true, error: None }
    }

    pub fn failure(code: ContactErrorCode) -> Self {
        Self {
            ok: false,
            error: Some(code.as_str().to_string()),
        }
    }
}

/// Error codes returned by `POST /api/contact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactErrorCode {
    InvalidPayload,
    ResendNotConfigured,
    EmailSendFailed,
    EmailSendException,
}

impl ContactErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactErrorCode::InvalidPayload => "invalid_payload",
            ContactErrorCode::ResendNotConfigured => "resend_not_configured",
            ContactErrorCode::EmailSendFailed => "email_send_failed",
            ContactErrorCode::EmailSendException => "email_send_exception",
        }
    }

    /// HTTP status code that accompanies this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ContactErrorCode::InvalidPayload => 400,
            _ => 500,
        }
    }
}

impl std::fmt::Display for ContactErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
