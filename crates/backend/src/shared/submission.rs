use chrono::{DateTime, Utc};
use contracts::contact::ContactRequest;
use uuid::Uuid;

/// Source recorded when the client did not send `sourceUrl`
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Запись о заявке. Пишется в лог до попытки отправки письма, поэтому заявка
/// не теряется даже при сбое доставки.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub source: String,
}

impl SubmissionRecord {
    pub fn new(request: &ContactRequest) -> Self {
        let source = request
            .source_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string();

        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            subject: request.subject.trim().to_string(),
            message: request.message.trim().to_string(),
            source,
        }
    }

    /// Write the record to the operational log.
    pub fn log(&self) {
        tracing::info!(
            target: "contact_submission",
            id = %self.id,
            name = %self.name,
            email = %self.email,
            subject = %self.subject,
            source = %self.source,
            message = %self.message,
            "Contact form submission received"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source_url: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: " Jane Doe ".into(),
            email: "jane@acme.com".into(),
            subject: "Pricing question".into(),
            message: "Can you tell me more about your automation pricing tiers please?".into(),
            source_url: source_url.map(str::to_string),
        }
    }

    #[test]
    fn test_record_keeps_all_fields() {
        let record = SubmissionRecord::new(&request(Some("https://example.com/contact")));
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@acme.com");
        assert_eq!(record.subject, "Pricing question");
        assert!(record.message.starts_with("Can you tell me"));
        assert_eq!(record.source, "https://example.com/contact");
    }

    #[test]
    fn test_missing_source_is_unknown() {
        assert_eq!(SubmissionRecord::new(&request(None)).source, UNKNOWN_SOURCE);
        assert_eq!(SubmissionRecord::new(&request(Some("  "))).source, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_each_record_gets_its_own_id() {
        let a = SubmissionRecord::new(&request(None));
        let b = SubmissionRecord::new(&request(None));
        assert_ne!(a.id, b.id);
    }
}
