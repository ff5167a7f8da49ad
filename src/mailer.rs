//! Contact relay over the Resend transactional-email API.
//!
//! Each submission sends two emails: a notification to the site operator and
//! a confirmation back to the sender. The notification is mandatory; a
//! failed confirmation is reported as a warning but does not fail the
//! submission. Designed to run in a separate Tokio task.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use crate::content;

/// Resend API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

/// Sender identity for the operator notification
const FROM_ADDRESS: &str = "Portfolio Contact <onboarding@resend.dev>";
/// Mailbox both outgoing emails are sent through
const FROM_MAILBOX: &str = "onboarding@resend.dev";

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_MESSAGE_LEN: usize = 1000;

/// A validated contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Build a request from raw form input, trimming whitespace.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("Name is required");
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err("Name is too long");
        }
        if self.email.is_empty() {
            return Err("Email is required");
        }
        if self.email.chars().count() > MAX_EMAIL_LEN {
            return Err("Email is too long");
        }
        if !self.email.contains('@') {
            return Err("Email looks invalid");
        }
        if self.message.is_empty() {
            return Err("Message is required");
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err("Message is too long");
        }
        Ok(())
    }
}

/// Resend email payload
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Operator notification carrying the submission
    pub fn notification(request: &ContactRequest, to: &str) -> Self {
        Self {
            from: FROM_ADDRESS.to_string(),
            to: vec![to.to_string()],
            subject: format!("New Portfolio Contact from {}", request.name),
            html: format!(
                "<div><h2>New Contact Form Submission</h2>\
                 <p><strong>Name:</strong> {}</p>\
                 <p><strong>Email:</strong> {}</p>\
                 <h3>Message:</h3><p>{}</p>\
                 <p>This email was sent from your portfolio contact form.</p></div>",
                request.name, request.email, request.message
            ),
        }
    }

    /// Confirmation sent back to the person who wrote in, signed with the
    /// personal display name rather than the relay's
    pub fn confirmation(request: &ContactRequest) -> Self {
        Self {
            from: format!("{} <{}>", content::NAME, FROM_MAILBOX),
            to: vec![request.email.clone()],
            subject: "Thanks for reaching out!".to_string(),
            html: format!(
                "<div><h2>Hey {}!</h2>\
                 <p>Thank you for reaching out through my portfolio! I've received \
                 your message and I'll get back to you as soon as possible.</p>\
                 <p><strong>Your message:</strong><br>\"{}\"</p>\
                 <p>Best regards,<br><strong>{}</strong><br>\
                 <em>Applied AI &amp; Data Science Student @ IIT Jodhpur</em></p></div>",
                request.name, request.message, content::NAME
            ),
        }
    }
}

/// Outcome of a contact submission
#[derive(Debug, Clone)]
pub struct SendReport {
    /// Set when the confirmation email failed; the submission still counts
    /// as delivered.
    pub confirmation_warning: Option<String>,
}

/// Mail client for the Resend API
#[derive(Debug, Clone)]
pub struct MailClient {
    client: Client,
    base_url: String,
    api_key: String,
    operator_address: String,
}

impl MailClient {
    /// Create a new mail client against the given API base URL
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        operator_address: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            operator_address: operator_address.into(),
        })
    }

    /// Create a client from the environment: `RESEND_API_KEY` (required)
    /// and `FOLIO_CONTACT_TO` (defaults to the portfolio email).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("RESEND_API_KEY")
            .context("RESEND_API_KEY is not set; contact form cannot send mail")?;
        let to = std::env::var("FOLIO_CONTACT_TO").unwrap_or_else(|_| content::EMAIL.to_string());
        Self::new(DEFAULT_BASE_URL, api_key, to)
    }

    async fn send_email(&self, email: &OutgoingEmail) -> Result<()> {
        let url = format!("{}/emails", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .context("Failed to send request to the email API")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Email API error: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            );
        }
        Ok(())
    }

    /// Relay a contact submission.
    ///
    /// The operator notification must succeed; a confirmation failure is
    /// downgraded to a warning in the returned report.
    pub async fn send_contact(&self, request: &ContactRequest) -> Result<SendReport> {
        request.validate().map_err(anyhow::Error::msg)?;

        let notification = OutgoingEmail::notification(request, &self.operator_address);
        self.send_email(&notification)
            .await
            .context("Failed to send notification email")?;

        let confirmation = OutgoingEmail::confirmation(request);
        let confirmation_warning = match self.send_email(&confirmation).await {
            Ok(()) => None,
            Err(e) => Some(format!("Confirmation email failed: {:#}", e)),
        };

        Ok(SendReport { confirmation_warning })
    }
}

/// Commands sent from the TUI to the mail worker
#[derive(Debug, Clone)]
pub enum MailCommand {
    /// Relay a contact submission
    SendContact(ContactRequest),
    /// Shut down the worker
    Shutdown,
}

/// Messages sent from the mail worker back to the TUI
#[derive(Debug, Clone)]
pub enum MailMessage {
    /// Submission delivered; carries a warning if the confirmation email
    /// failed
    Sent { warning: Option<String> },
    /// Submission failed outright
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest::new("John Doe", "john@example.com", "Hello there!")
    }

    #[test]
    fn validation_requires_all_fields() {
        assert!(request().validate().is_ok());

        let mut r = request();
        r.name.clear();
        assert_eq!(r.validate(), Err("Name is required"));

        let mut r = request();
        r.email.clear();
        assert_eq!(r.validate(), Err("Email is required"));

        let mut r = request();
        r.message.clear();
        assert_eq!(r.validate(), Err("Message is required"));
    }

    #[test]
    fn validation_enforces_length_caps() {
        let mut r = request();
        r.name = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(r.validate(), Err("Name is too long"));

        let mut r = request();
        r.email = format!("{}@x.com", "x".repeat(MAX_EMAIL_LEN));
        assert_eq!(r.validate(), Err("Email is too long"));

        let mut r = request();
        r.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(r.validate(), Err("Message is too long"));

        let mut r = request();
        r.message = "x".repeat(MAX_MESSAGE_LEN);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn validation_rejects_addresses_without_at() {
        let mut r = request();
        r.email = "not-an-email".to_string();
        assert_eq!(r.validate(), Err("Email looks invalid"));
    }

    #[test]
    fn new_trims_whitespace() {
        let r = ContactRequest::new("  Jane  ", " jane@example.com ", "  hi  ");
        assert_eq!(r.name, "Jane");
        assert_eq!(r.email, "jane@example.com");
        assert_eq!(r.message, "hi");
    }

    #[test]
    fn notification_payload_has_resend_fields() {
        let email = OutgoingEmail::notification(&request(), "owner@example.com");
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["to"][0], "owner@example.com");
        assert!(json["subject"].as_str().unwrap().contains("John Doe"));
        assert!(json["html"].as_str().unwrap().contains("Hello there!"));
        assert!(json["from"].as_str().unwrap().contains("resend.dev"));
    }

    #[test]
    fn confirmation_goes_back_to_the_sender() {
        let email = OutgoingEmail::confirmation(&request());
        assert_eq!(email.to, vec!["john@example.com".to_string()]);
        assert!(email.html.contains("Hello there!"));
        assert!(email.html.contains(content::NAME));
    }

    #[test]
    fn confirmation_is_from_the_personal_display_name() {
        let email = OutgoingEmail::confirmation(&request());
        assert_eq!(email.from, format!("{} <{}>", content::NAME, FROM_MAILBOX));

        let notification = OutgoingEmail::notification(&request(), "owner@example.com");
        assert_eq!(notification.from, FROM_ADDRESS);
    }
}
