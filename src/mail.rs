//! Contact submissions and outbound mail.
//!
//! A submission is ephemeral: it exists for the duration of one request,
//! is never persisted, and either becomes exactly one outbound email or
//! nothing at all. This module owns the whole journey:
//!
//! 1. [`ContactSubmission`] — the four-field payload as posted by the form
//! 2. [`OutboundMail`] — the composed message (plain-text and HTML bodies,
//!    reply-to set to the submitter so the operator can answer directly)
//! 3. [`Mailer`] — the transport port the relay handler talks to
//!
//! The production transport is [`SmtpMailer`] (lettre, STARTTLS).
//! [`MemoryMailer`] records deliveries in memory so tests can assert the
//! relay's contract: when the transport is invoked, and with what.
//!
//! Field validation is presence-only. No format checks, no length limits,
//! no sanitization — HTML escaping happens structurally when the HTML body
//! is composed with maud.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use maud::html;
use serde::Deserialize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not assemble message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("delivery refused: {0}")]
    Refused(String),
}

/// One contact-form payload.
///
/// Fields default to empty strings on deserialization, so a missing field
/// and an empty field fail validation the same way and the handler owns
/// the error response shape (rather than the JSON extractor).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Presence check over all four fields. This is the relay's entire
    /// input validation.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }
}

/// A composed outbound email, transport-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    /// Operator inbox the submission is delivered to.
    pub to: String,
    /// The submitter's address, so a plain reply reaches them.
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundMail {
    /// Compose the operator-facing email for a submission.
    ///
    /// Both bodies carry all four submitted values verbatim. The HTML body
    /// is built with maud so the submitter's text is escaped, not
    /// interpolated raw.
    pub fn compose(submission: &ContactSubmission, inbox: &str) -> Self {
        let text_body = format!(
            "Name: {}\nEmail: {}\nSubject: {}\nMessage: {}\n",
            submission.name, submission.email, submission.subject, submission.message
        );
        let html_body = html! {
            h3 { "New Contact Form Submission" }
            p { strong { "Name: " } (submission.name) }
            p { strong { "Email: " } (submission.email) }
            p { strong { "Subject: " } (submission.subject) }
            p { strong { "Message: " } (submission.message) }
        }
        .into_string();

        Self {
            to: inbox.to_string(),
            reply_to: submission.email.clone(),
            subject: format!("Contact Form: {}", submission.subject),
            text_body,
            html_body,
        }
    }
}

/// Outbound mail transport port.
///
/// The relay handler depends on this trait only, so the delivery side can
/// be swapped without touching request handling.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, mail: &OutboundMail) -> Result<(), MailError>;
}

/// Production transport: async SMTP submission with STARTTLS.
///
/// The envelope sender is always the authenticated account — submission
/// servers reject spoofed senders — and the submitter rides along as
/// reply-to.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let sender: Mailbox = config.username.parse()?;
        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn deliver(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .reply_to(mail.reply_to.parse()?)
            .to(mail.to.parse()?)
            .subject(&mail.subject)
            .multipart(MultiPart::alternative_plain_html(
                mail.text_body.clone(),
                mail.html_body.clone(),
            ))?;
        self.transport.send(message).await?;
        Ok(())
    }
}

/// In-memory transport that records every delivery.
///
/// Used by the test suite (and handy for running the server without SMTP
/// credentials): `deliver` appends to an internal log and succeeds, or
/// fails every call when constructed with [`MemoryMailer::failing`].
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<OutboundMail>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that refuses every delivery.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of everything delivered so far.
    pub fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// How many times `deliver` was invoked, refused calls included.
    /// Distinguishes "invoked and refused" from "never invoked".
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn deliver(&self, mail: &OutboundMail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MailError::Refused("simulated transport failure".into()));
        }
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Test".to_string(),
        }
    }

    #[test]
    fn complete_requires_every_field() {
        assert!(submission().is_complete());
        for field in ["name", "email", "subject", "message"] {
            let mut s = submission();
            match field {
                "name" => s.name.clear(),
                "email" => s.email.clear(),
                "subject" => s.subject.clear(),
                _ => s.message.clear(),
            }
            assert!(!s.is_complete(), "empty {field} should fail");
        }
    }

    #[test]
    fn missing_json_field_deserializes_empty() {
        let s: ContactSubmission =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","subject":"Hi"}"#).unwrap();
        assert!(s.message.is_empty());
        assert!(!s.is_complete());
    }

    #[test]
    fn compose_sets_reply_to_submitter() {
        let mail = OutboundMail::compose(&submission(), "inbox@example.com");
        assert_eq!(mail.reply_to, "a@x.com");
        assert_eq!(mail.to, "inbox@example.com");
    }

    #[test]
    fn compose_prefixes_subject() {
        let mail = OutboundMail::compose(&submission(), "inbox@example.com");
        assert_eq!(mail.subject, "Contact Form: Hi");
    }

    #[test]
    fn both_bodies_carry_all_fields_verbatim() {
        let s = ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Let's talk about the dashboard.".to_string(),
        };
        let mail = OutboundMail::compose(&s, "inbox@example.com");
        for value in [&s.name, &s.email, &s.subject] {
            assert!(mail.text_body.contains(value.as_str()));
        }
        assert!(mail.text_body.contains(&s.message));
        assert!(mail.html_body.contains("Jane Doe"));
        assert!(mail.html_body.contains("jane@example.com"));
        assert!(mail.html_body.contains("Project Inquiry"));
    }

    #[test]
    fn html_body_escapes_markup_in_message() {
        let s = ContactSubmission {
            message: "<script>alert('hi')</script>".to_string(),
            ..submission()
        };
        let mail = OutboundMail::compose(&s, "inbox@example.com");
        assert!(!mail.html_body.contains("<script>alert"));
        assert!(mail.html_body.contains("&lt;script&gt;"));
        // The plain-text body is untouched.
        assert!(mail.text_body.contains("<script>"));
    }

    #[tokio::test]
    async fn memory_mailer_records_deliveries() {
        let mailer = MemoryMailer::new();
        let mail = OutboundMail::compose(&submission(), "inbox@example.com");
        mailer.deliver(&mail).await.unwrap();
        assert_eq!(mailer.delivery_count(), 1);
        assert_eq!(mailer.attempt_count(), 1);
        assert_eq!(mailer.sent()[0], mail);
    }

    #[tokio::test]
    async fn failing_mailer_counts_the_attempt_but_records_nothing() {
        let mailer = MemoryMailer::failing();
        let mail = OutboundMail::compose(&submission(), "inbox@example.com");
        assert!(mailer.deliver(&mail).await.is_err());
        assert_eq!(mailer.delivery_count(), 0);
        assert_eq!(mailer.attempt_count(), 1);
    }
}
