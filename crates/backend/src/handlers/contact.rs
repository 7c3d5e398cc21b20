use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use contracts::contact::{ContactErrorCode, ContactRequest, ContactResponse};

use crate::shared::email::{template, EmailError};
use crate::shared::submission::SubmissionRecord;
use crate::AppState;

type ContactReply = (StatusCode, Json<ContactResponse>);

fn reply_error(code: ContactErrorCode) -> ContactReply {
    let status =
        StatusCode::from_u16(code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ContactResponse::failure(code)))
}

/// POST /api/contact
///
/// Проверяет наличие полей, пишет заявку в лог и пересылает её почтовому провайдеру.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactReply {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Contact payload rejected: {}", rejection.body_text());
            return reply_error(ContactErrorCode::InvalidPayload);
        }
    };

    if !request.has_required_fields() {
        tracing::warn!("Contact payload is missing required fields");
        return reply_error(ContactErrorCode::InvalidPayload);
    }

    let record = SubmissionRecord::new(&request);
    record.log();

    let recipients = state.email.recipients();
    let mailer = match state.mailer.as_ref() {
        Some(mailer) if !recipients.is_empty() => mailer,
        Some(_) => {
            tracing::error!(id = %record.id, "No contact recipients configured, email not sent");
            return reply_error(ContactErrorCode::ResendNotConfigured);
        }
        None => {
            tracing::error!(id = %record.id, "Email provider not configured, email not sent");
            return reply_error(ContactErrorCode::ResendNotConfigured);
        }
    };

    let email = template::compose(&record, &state.email.from, recipients);

    match mailer.send(&email).await {
        Ok(sent) => {
            tracing::info!(
                id = %record.id,
                provider = mailer.name(),
                provider_id = sent.id.as_deref().unwrap_or("-"),
                "Contact email sent"
            );
            (StatusCode::OK, Json(ContactResponse::success()))
        }
        Err(EmailError::Provider(detail)) => {
            tracing::error!(
                id = %record.id,
                provider = mailer.name(),
                "Email provider returned an error: {}",
                detail
            );
            reply_error(ContactErrorCode::EmailSendFailed)
        }
        Err(EmailError::Transport(detail)) => {
            tracing::error!(
                id = %record.id,
                provider = mailer.name(),
                "Email send raised an exception: {}",
                detail
            );
            reply_error(ContactErrorCode::EmailSendException)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::EmailConfig;
    use crate::shared::email::{EmailProvider, OutgoingEmail, SentEmail};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum Behavior {
        Accept,
        Reject,
        Fail,
    }

    struct MockProvider {
        behavior: Behavior,
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                sent: Mutex::new(Vec::new()),
            })
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EmailProvider for MockProvider {
        async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, EmailError> {
            self.sent.lock().unwrap().push(email.clone());
            match self.behavior {
                Behavior::Accept => Ok(SentEmail {
                    id: Some("msg_1".into()),
                }),
                Behavior::Reject => Err(EmailError::Provider("validation_error".into())),
                Behavior::Fail => Err(EmailError::Transport("connection reset".into())),
            }
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn email_config(to: &str) -> Arc<EmailConfig> {
        Arc::new(EmailConfig {
            api_key: Some("re_test".into()),
            to: to.into(),
            ..EmailConfig::default()
        })
    }

    fn state(provider: Option<Arc<MockProvider>>, to: &str) -> AppState {
        AppState {
            email: email_config(to),
            mailer: provider.map(|p| p as Arc<dyn EmailProvider>),
        }
    }

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".into(),
            email: "jane@acme.com".into(),
            subject: "Pricing question".into(),
            message: "Can you tell me more about your automation pricing tiers please?".into(),
            source_url: Some("https://example.com/contact".into()),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_sent() {
        let provider = MockProvider::new(Behavior::Accept);
        let (status, Json(body)) = submit(
            State(state(Some(provider.clone()), "sales@agency.com, ops@agency.com")),
            Ok(Json(valid_request())),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ContactResponse::success());
        assert_eq!(provider.sent_count(), 1);

        let sent = provider.sent.lock().unwrap()[0].clone();
        assert_eq!(sent.to, vec!["sales@agency.com", "ops@agency.com"]);
        assert_eq!(sent.reply_to.as_deref(), Some("jane@acme.com"));
        assert!(sent.html.contains("Jane"));
        assert!(sent.html.contains("https:"));
    }

    #[tokio::test]
    async fn test_missing_provider_is_not_configured() {
        let (status, Json(body)) =
            submit(State(state(None, "sales@agency.com")), Ok(Json(valid_request()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("resend_not_configured"));
        assert!(!body.ok);
    }

    #[tokio::test]
    async fn test_empty_recipient_list_is_not_configured() {
        let provider = MockProvider::new(Behavior::Accept);
        let (status, Json(body)) = submit(
            State(state(Some(provider.clone()), " , ")),
            Ok(Json(valid_request())),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("resend_not_configured"));
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_name_is_invalid_payload() {
        let provider = MockProvider::new(Behavior::Accept);
        let request = ContactRequest {
            name: "".into(),
            email: "x@x.com".into(),
            subject: "s".into(),
            message: "1234567890".into(),
            source_url: None,
        };
        let (status, Json(body)) = submit(
            State(state(Some(provider.clone()), "sales@agency.com")),
            Ok(Json(request)),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ContactResponse::failure(ContactErrorCode::InvalidPayload));
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_is_send_failed() {
        let provider = MockProvider::new(Behavior::Reject);
        let (status, Json(body)) = submit(
            State(state(Some(provider), "sales@agency.com")),
            Ok(Json(valid_request())),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("email_send_failed"));
    }

    #[tokio::test]
    async fn test_transport_error_is_send_exception() {
        let provider = MockProvider::new(Behavior::Fail);
        let (status, Json(body)) = submit(
            State(state(Some(provider), "sales@agency.com")),
            Ok(Json(valid_request())),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("email_send_exception"));
    }

    /// Collects everything the fmt layer writes during one test.
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    async fn submit_with_logs(app_state: AppState) -> (StatusCode, String) {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _) = submit(State(app_state), Ok(Json(valid_request()))).await;
        (status, capture.text())
    }

    fn assert_record_logged(logs: &str) {
        let request = valid_request();
        for value in [
            request.name.as_str(),
            request.email.as_str(),
            request.subject.as_str(),
            request.message.as_str(),
            "https://example.com/contact",
        ] {
            assert!(logs.contains(value), "{:?} missing from log:\n{}", value, logs);
        }
        assert!(logs.contains("contact_submission"));
    }

    #[tokio::test]
    async fn test_submission_logged_when_provider_rejects() {
        let provider = MockProvider::new(Behavior::Reject);
        let (status, logs) = submit_with_logs(state(Some(provider), "sales@agency.com")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_record_logged(&logs);
    }

    #[tokio::test]
    async fn test_submission_logged_without_provider() {
        let (status, logs) = submit_with_logs(state(None, "sales@agency.com")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_record_logged(&logs);
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_independent() {
        let provider = MockProvider::new(Behavior::Accept);
        let app_state = state(Some(provider.clone()), "sales@agency.com");
        for _ in 0..2 {
            let (status, _) = submit(State(app_state.clone()), Ok(Json(valid_request()))).await;
            assert_eq!(status, StatusCode::OK);
        }
        assert_eq!(provider.sent_count(), 2);
    }
}
