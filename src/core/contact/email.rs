//! Email notification for contact submissions
//!
//! Sends a notification to the site owners through the SendGrid v3 API
//! whenever the contact form is submitted. Delivery is reported as a plain
//! `bool`; failures are logged and never surface provider details to the
//! caller.

use serde_json::json;

use crate::core::contact::validation::ValidatedContact;

/// SendGrid v3 mail send endpoint
const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Inbox that receives contact form notifications
const CONTACT_RECIPIENT: &str = "idan.t@82labs.io";

/// Verified sender address configured in SendGrid
const CONTACT_SENDER: &str = "contact@82labs.com";

/// Something that can deliver a contact form notification.
///
/// Returns `true` on successful delivery. The submission pipeline aborts
/// before persisting when this returns `false`.
pub trait ContactNotifier {
    fn send_contact_email(
        &self,
        contact: &ValidatedContact,
    ) -> impl std::future::Future<Output = bool> + Send;
}

/// SendGrid-backed notifier used in production
#[derive(Clone)]
pub struct EmailNotifier {
    http: reqwest::Client,
    api_key: String,
}

impl EmailNotifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

impl ContactNotifier for EmailNotifier {
    async fn send_contact_email(&self, contact: &ValidatedContact) -> bool {
        let payload = json!({
            "personalizations": [{
                "to": [{ "email": CONTACT_RECIPIENT }]
            }],
            "from": { "email": CONTACT_SENDER },
            "reply_to": { "email": contact.email(), "name": contact.name() },
            "subject": subject(contact),
            "content": [
                { "type": "text/plain", "value": text_body(contact) },
                { "type": "text/html", "value": html_body(contact) }
            ]
        });

        let response = self
            .http
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::error!("SendGrid email error: {} {}", status, body);
                false
            }
            Err(err) => {
                tracing::error!("SendGrid email error: {}", err);
                false
            }
        }
    }
}

/// Subject line for the notification email
pub fn subject(contact: &ValidatedContact) -> String {
    format!("New Project Inquiry from {}", contact.name())
}

/// Plain-text body for the notification email
pub fn text_body(contact: &ValidatedContact) -> String {
    format!(
        "New Contact Form Submission - 82 Labs\n\
         \n\
         Contact Details:\n\
         Name: {name}\n\
         Email: {email}\n\
         \n\
         Project Brief:\n\
         {brief}\n\
         \n\
         ---\n\
         This email was sent from the 82 Labs contact form.\n\
         Reply directly to this email to respond to {name}.\n",
        name = contact.name(),
        email = contact.email(),
        brief = contact.brief(),
    )
}

/// HTML body for the notification email
pub fn html_body(contact: &ValidatedContact) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #1a1a1a; border-bottom: 2px solid #f97316; padding-bottom: 10px;">
    New Contact Form Submission - 82 Labs
  </h2>
  <div style="background-color: #f9fafb; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #374151; margin-top: 0;">Contact Details</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
  </div>
  <div style="background-color: #fff; padding: 20px; border: 1px solid #e5e7eb; border-radius: 8px;">
    <h3 style="color: #374151; margin-top: 0;">Project Brief</h3>
    <p style="white-space: pre-wrap; line-height: 1.6;">{brief}</p>
  </div>
  <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e5e7eb; color: #6b7280; font-size: 14px;">
    <p>This email was sent from the 82 Labs contact form.</p>
    <p>Reply directly to this email to respond to {name}.</p>
  </div>
</div>"#,
        name = contact.name(),
        email = contact.email(),
        brief = contact.brief(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::validation::{ContactInput, validate_contact};

    fn sample_contact() -> ValidatedContact {
        validate_contact(&ContactInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            brief: "We need a private AI deployment.".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_subject_includes_name() {
        assert_eq!(
            subject(&sample_contact()),
            "New Project Inquiry from Jane Doe"
        );
    }

    #[test]
    fn test_text_body_contains_all_fields() {
        let body = text_body(&sample_contact());

        assert!(body.contains("New Contact Form Submission - 82 Labs"));
        assert!(body.contains("Name: Jane Doe"));
        assert!(body.contains("Email: jane@example.com"));
        assert!(body.contains("We need a private AI deployment."));
        assert!(body.contains("Reply directly to this email to respond to Jane Doe."));
    }

    #[test]
    fn test_html_body_contains_mailto_link() {
        let body = html_body(&sample_contact());

        assert!(body.contains(r#"<a href="mailto:jane@example.com">jane@example.com</a>"#));
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("We need a private AI deployment."));
    }

    #[test]
    fn test_notifier_construction() {
        let notifier = EmailNotifier::new("SG.test-key");
        assert_eq!(notifier.api_key, "SG.test-key");
    }
}
