//! Contact form validation and relay e-mail composition.
//!
//! Delivery is left to the caller; this module only decides whether a
//! submission is acceptable and what the relayed message looks like.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mailbox that receives contact form submissions.
pub const RELAY_RECIPIENT: &str = "info@gotaxhub.com";
pub const RELAY_SUBJECT: &str = "New Contact Form Submission - GoTaxHub";

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Reasons a submission is rejected before any send is attempted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

impl ContactError {
    /// Text shown to the visitor.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in all required fields.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
        }
    }
}

/// A contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The message handed to the mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl ContactRequest {
    /// Checks required fields and e-mail shape.
    ///
    /// ```
    /// use gotax_core::{ContactError, ContactRequest};
    ///
    /// let request = ContactRequest {
    ///     name: "Asha".into(),
    ///     email: "asha@example".into(),
    ///     phone: "9876543210".into(),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(request.validate(), Err(ContactError::InvalidEmail("asha@example".into())));
    /// ```
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Builds the relay e-mail; replies go straight to the visitor.
    pub fn compose_email(
        &self,
        sender: &str,
        submitted_at: DateTime<Utc>,
    ) -> ContactEmail {
        let submitted = submitted_at
            .with_timezone(&india_standard_time())
            .format("%d/%m/%Y, %I:%M:%S %p");

        let body = format!(
            "New contact form submission from GoTaxHub website:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Service Required: {service}\n\
             Message: {message}\n\
             \n\
             Submitted on: {submitted}\n",
            name = self.name.trim(),
            email = self.email.trim(),
            phone = self.phone.trim(),
            service = non_blank(&self.service).unwrap_or("Not specified"),
            message = non_blank(&self.message).unwrap_or("None provided"),
        );

        ContactEmail {
            from: sender.to_string(),
            to: RELAY_RECIPIENT.to_string(),
            reply_to: self.email.trim().to_string(),
            subject: RELAY_SUBJECT.to_string(),
            body,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn india_standard_time() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// JSON body returned to the website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Thank you for your message. We will get back to you within 24 hours."
                .to_string(),
        }
    }

    pub fn rejected(error: &ContactError) -> Self {
        Self {
            success: false,
            message: error.user_message().to_string(),
        }
    }

    /// The send itself failed.
    pub fn delivery_failed() -> Self {
        Self {
            success: false,
            message: "Sorry, there was an error sending your message. Please try again or contact us directly."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.in".to_string(),
            phone: "+91 98765 43210".to_string(),
            service: Some("GST Filing".to_string()),
            message: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_missing() {
        let mut r = request();
        r.name = "   ".to_string();

        assert_eq!(r.validate(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn blank_phone_is_missing() {
        let mut r = request();
        r.phone.clear();

        assert_eq!(r.validate(), Err(ContactError::MissingField("phone")));
    }

    #[test]
    fn email_without_domain_dot_is_invalid() {
        for bad in ["ravi@example", "ravi example@x.in", "@example.in", "ravi@@x.in"] {
            let mut r = request();
            r.email = bad.to_string();
            assert!(
                matches!(r.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn compose_email_uses_fallbacks_and_ist() {
        let submitted_at = Utc.with_ymd_and_hms(2025, 7, 31, 6, 30, 0).unwrap();

        let email = request().compose_email("noreply@gotaxhub.com", submitted_at);

        assert_eq!(email.to, RELAY_RECIPIENT);
        assert_eq!(email.reply_to, "ravi@example.in");
        assert_eq!(email.subject, RELAY_SUBJECT);
        assert!(email.body.contains("Service Required: GST Filing\n"));
        assert!(email.body.contains("Message: None provided\n"));
        assert!(email.body.contains("Submitted on: 31/07/2025, 12:00:00 PM"));
    }

    #[test]
    fn rejected_response_carries_user_message() {
        let response = ContactResponse::rejected(&ContactError::MissingField("email"));

        assert!(!response.success);
        assert_eq!(response.message, "Please fill in all required fields.");
    }
}
