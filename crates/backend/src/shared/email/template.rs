//! HTML-письмо с заявкой из формы обратной связи.

use super::types::OutgoingEmail;
use crate::shared::submission::SubmissionRecord;

/// Escape user text for HTML; line breaks become `<br>`.
fn escape_multiline(text: &str) -> String {
    text.lines()
        .map(ammonia::clean_text)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Subject line for the notification. Line breaks are folded so a header cannot be split.
fn subject_line(subject: &str) -> String {
    let folded = subject.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("New inquiry: {}", folded)
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><td style=\"padding:4px 12px 4px 0;font-weight:bold;vertical-align:top\">{}</td><td style=\"padding:4px 0\">{}</td></tr>",
        label,
        escape_multiline(value)
    )
}

/// Compose the notification for one submission. Replies go to the submitter.
pub fn compose(record: &SubmissionRecord, from: &str, to: Vec<String>) -> OutgoingEmail {
    let html = format!(
        concat!(
            "<div style=\"font-family:sans-serif;font-size:14px\">",
            "<h2 style=\"margin:0 0 12px\">New contact form submission</h2>",
            "<table>{}{}{}{}</table>",
            "<h3 style=\"margin:16px 0 8px\">Message</h3>",
            "<p style=\"white-space:normal\">{}</p>",
            "<p style=\"color:#888;font-size:12px\">Submission {} received {}</p>",
            "</div>"
        ),
        row("Name", &record.name),
        row("Email", &record.email),
        row("Subject", &record.subject),
        row("Source", &record.source),
        escape_multiline(&record.message),
        record.id,
        record.received_at.to_rfc3339(),
    );

    OutgoingEmail {
        from: from.to_string(),
        to,
        subject: subject_line(&record.subject),
        html,
        reply_to: Some(record.email.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::contact::ContactRequest;

    fn record(message: &str) -> SubmissionRecord {
        SubmissionRecord::new(&ContactRequest {
            name: "Jane <b>Doe</b>".into(),
            email: " jane@acme.com ".into(),
            subject: "Pricing\nquestion".into(),
            message: message.into(),
            source_url: Some("https://example.com/contact".into()),
        })
    }

    #[test]
    fn test_reply_to_is_submitter() {
        let email = compose(&record("hello there"), "Site <a@b.com>", vec!["x@y.com".into()]);
        assert_eq!(email.reply_to.as_deref(), Some("jane@acme.com"));
        assert_eq!(email.from, "Site <a@b.com>");
        assert_eq!(email.to, vec!["x@y.com".to_string()]);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let email = compose(&record("<script>alert(1)</script>"), "a@b.com", vec![]);
        assert!(!email.html.contains("<script>"));
        assert!(!email.html.contains("<b>Doe</b>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_message_lines_become_breaks() {
        let email = compose(&record("line one\nline two"), "a@b.com", vec![]);
        assert!(email.html.contains("<br>"));
    }

    #[test]
    fn test_subject_is_single_line() {
        let email = compose(&record("hello there"), "a@b.com", vec![]);
        assert_eq!(email.subject, "New inquiry: Pricing question");
    }
}
