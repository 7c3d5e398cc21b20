//! Two-attempt submission sequence, independent of the transport.

use std::fmt;
use std::future::Future;

use contracts::contact::{ContactRequest, ContactResponse, CONTACT_PATH};

use crate::shared::api_utils::{api_url, trim_base};

/// Why a submission did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered, but not with `{ ok: true }`.
    Rejected { status: u16, code: Option<String> },
    /// Nothing usable came back: network error, timeout, unreadable body.
    Transport(String),
}

impl SubmitError {
    /// Text shown to the visitor. Both causes read the same.
    pub fn user_message(&self) -> &'static str {
        "Something went wrong while sending your message. Please try again or email us directly."
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected { status, code } => write!(
                f,
                "rejected by server (HTTP {}, {})",
                status,
                code.as_deref().unwrap_or("no error code")
            ),
            SubmitError::Transport(detail) => write!(f, "request failed: {}", detail),
        }
    }
}

/// Classify one HTTP exchange. An unreadable body is a transport failure
/// whatever the status was.
pub fn interpret_response(
    status: u16,
    status_ok: bool,
    body: Result<ContactResponse, String>,
) -> Result<(), SubmitError> {
    let body = body.map_err(|e| SubmitError::Transport(format!("bad response body: {}", e)))?;
    if status_ok && body.ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status,
            code: body.error,
        })
    }
}

/// Post `payload` to the primary base, then at most once to the fallback.
///
/// The fallback runs only when it is set, differs from the primary, and the
/// primary attempt failed. Attempts are strictly sequential.
pub async fn submit_with_fallback<F, Fut>(
    primary_base: &str,
    fallback_base: Option<&str>,
    payload: &ContactRequest,
    send: F,
) -> Result<(), SubmitError>
where
    F: Fn(String, ContactRequest) -> Fut,
    Fut: Future<Output = Result<(), SubmitError>>,
{
    let primary_url = api_url(primary_base, CONTACT_PATH);
    let primary_err = match send(primary_url.clone(), payload.clone()).await {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    log::warn!("Contact submit to {} failed: {}", primary_url, primary_err);

    let fallback = fallback_base
        .map(trim_base)
        .filter(|fb| !fb.is_empty() && *fb != trim_base(primary_base));
    let Some(fallback) = fallback else {
        return Err(primary_err);
    };

    let fallback_url = api_url(fallback, CONTACT_PATH);
    let result = send(fallback_url.clone(), payload.clone()).await;
    if let Err(e) = &result {
        log::error!("Contact submit to fallback {} failed: {}", fallback_url, e);
    }
    result
}
