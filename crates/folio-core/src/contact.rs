//! Contact draft composition.
//!
//! Submitting the contact form never sends anything. It only builds a
//! `mailto:` link for the visitor's own mail client.

use serde::Deserialize;

/// Prefix of every draft subject line.
pub const SUBJECT_PREFIX: &str = "Portfolio Inquiry — ";

/// Values entered in the contact form. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX}{}", self.name)
    }

    /// Plain-text body, before percent-encoding.
    #[must_use]
    pub fn body(&self) -> String {
        [
            format!("From: {}", self.name),
            format!("Email: {}", self.email),
            String::new(),
            self.message.clone(),
        ]
        .join("\n")
    }

    /// `mailto:` URL addressed to `recipient`. No field is validated.
    #[must_use]
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }
}
