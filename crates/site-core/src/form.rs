//! Contact form payload, validation, and response acceptance.
//!
//! Wire field names and the alert copy are fixed by the remote form
//! processor and the page; changing either side alone breaks the contract.

use crate::constants::PHONE_DIGITS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON payload POSTed to the form endpoint. Serialized names are the
/// endpoint's, not Rust's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub anything_else: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub website: String,
    pub phone: String,
}

impl Inquiry {
    /// Trim every field, the way values come off the inputs.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.anything_else,
            &mut self.email,
            &mut self.company,
            &mut self.service,
            &mut self.budget,
            &mut self.website,
            &mut self.phone,
        ] {
            *field = field.trim().to_string();
        }
        self
    }

    /// Checks run in page order; the first failure wins and its message is
    /// exactly what the page alerts.
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.is_empty() {
            return Err(InquiryError::MissingName);
        }
        if !email_is_valid(&self.email) {
            return Err(InquiryError::InvalidEmail);
        }
        if !phone_is_valid(&self.phone) {
            return Err(InquiryError::InvalidPhone);
        }
        Ok(())
    }
}

/// Validation failures; `Display` is the user-facing alert text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address (must include @ and domain).")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
}

/// Exactly one `@`, no whitespace anywhere, a non-empty local part, and a
/// dot strictly inside the domain.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let len = domain.chars().count();
    domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < len)
}

/// Exactly `PHONE_DIGITS` ASCII digits, nothing else.
pub fn phone_is_valid(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Shape of the endpoint's JSON reply. Anything unparseable counts as an
/// empty ack.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitAck {
    pub ok: Option<bool>,
}

/// The endpoint is free to answer with plain text or JSON; a submission
/// failed only on a non-OK status or an explicit `"ok": false` body.
pub fn submission_accepted(http_ok: bool, raw_body: &str) -> bool {
    if !http_ok {
        return false;
    }
    let ack: SubmitAck = serde_json::from_str(raw_body).unwrap_or_default();
    ack.ok != Some(false)
}
