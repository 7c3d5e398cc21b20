use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Ошибки отправки письма
///
/// `Provider`: провайдер ответил, но отказал (ошибка в теле ответа).
/// `Transport`: запрос не дошёл или ответ не получен.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Письмо, готовое к отправке
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Результат успешной отправки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentEmail {
    /// Идентификатор письма у провайдера, если он его вернул
    pub id: Option<String>,
}

/// Трейт для почтовых провайдеров
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, EmailError>;

    /// Имя провайдера для логов
    fn name(&self) -> &'static str;
}
