use super::types::{EmailError, EmailProvider, OutgoingEmail, SentEmail};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Resend провайдер (https://resend.com)
pub struct ResendProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ResendSuccess {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ResendProvider {
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

/// Человекочитаемое описание ошибки из тела ответа Resend
fn describe_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<ResendErrorBody>(body) {
        Ok(ResendErrorBody {
            name: Some(name),
            message: Some(message),
        }) => format!("{} ({}): {}", name, status, message),
        Ok(ResendErrorBody {
            message: Some(message),
            ..
        }) => format!("HTTP {}: {}", status, message),
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => format!("HTTP {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, EmailError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            // Тело ответа нужно только для id; письмо уже принято
            let id = response
                .json::<ResendSuccess>()
                .await
                .ok()
                .and_then(|body| body.id);
            return Ok(SentEmail { id });
        }

        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Provider(describe_error(status.as_u16(), &body)))
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
