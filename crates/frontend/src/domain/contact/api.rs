use contracts::contact::{ContactRequest, ContactResponse};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use super::config::ClientConfig;
use super::submit::{interpret_response, submit_with_fallback, SubmitError};

/// Upper bound for one attempt.
pub const ATTEMPT_TIMEOUT_MS: u32 = 15_000;

async fn post_once(url: &str, payload: &ContactRequest) -> Result<(), SubmitError> {
    let response = Request::post(url)
        .json(payload)
        .map_err(|e| SubmitError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(format!("Request failed: {}", e)))?;

    let body = response
        .json::<ContactResponse>()
        .await
        .map_err(|e| e.to_string());
    interpret_response(response.status(), response.ok(), body)
}

/// POST one contact payload, giving up after [`ATTEMPT_TIMEOUT_MS`].
pub async fn post_contact(url: String, payload: ContactRequest) -> Result<(), SubmitError> {
    let request = Box::pin(post_once(&url, &payload));
    match select(request, TimeoutFuture::new(ATTEMPT_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::Transport(format!(
            "timed out after {} ms",
            ATTEMPT_TIMEOUT_MS
        ))),
    }
}

fn current_page_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Отправить форму: primary, затем (при ошибке) один раз fallback.
pub async fn submit_contact(mut payload: ContactRequest) -> Result<(), SubmitError> {
    payload.source_url = current_page_url();
    let config = ClientConfig::from_env();
    let primary = config.primary_base();
    log::debug!("Submitting contact form to {}", primary);
    submit_with_fallback(&primary, config.fallback.as_deref(), &payload, post_contact).await
}
