// src/request.rs

use std::fmt;

/// Longest recipient accepted, in characters.
pub const MAX_RECIPIENT_CHARS: usize = 10;

/// Longest message accepted, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4095;

/// A user-facing validation failure.
///
/// `code` is stable and machine readable; `message` is what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error. {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// One notification to send: who gets it and what it says.
///
/// Only constructible through [`NotificationRequest::new`], so every value
/// in circulation has already passed the length checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    recipient: String,
    message: String,
}

impl NotificationRequest {
    pub fn new(recipient: String, message: String) -> Result<Self, ValidationError> {
        if recipient.chars().count() > MAX_RECIPIENT_CHARS {
            return Err(ValidationError::new(
                "RECIPIENT_TOO_LONG",
                format!(
                    "CellPhoneNum cannot be greater than {} chars.",
                    MAX_RECIPIENT_CHARS
                ),
            ));
        }

        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ValidationError::new(
                "MESSAGE_TOO_LONG",
                format!(
                    "Message cannot be greater than {} chars.",
                    MAX_MESSAGE_CHARS
                ),
            ));
        }

        Ok(Self { recipient, message })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_at_the_bounds() {
        let req = NotificationRequest::new("1".repeat(10), "m".repeat(4095)).unwrap();
        assert_eq!(req.recipient().len(), 10);
        assert_eq!(req.message().len(), 4095);
    }

    #[test]
    fn rejects_recipient_over_ten_chars() {
        let err = NotificationRequest::new("12345678901".into(), "hi".into()).unwrap_err();
        assert_eq!(err.code, "RECIPIENT_TOO_LONG");
        assert!(err.to_string().contains("10 chars"));
    }

    #[test]
    fn rejects_message_over_limit() {
        let err = NotificationRequest::new("5551234567".into(), "m".repeat(4096)).unwrap_err();
        assert_eq!(err.code, "MESSAGE_TOO_LONG");
    }

    #[test]
    fn recipient_is_checked_before_message() {
        let err = NotificationRequest::new("x".repeat(11), "m".repeat(5000)).unwrap_err();
        assert_eq!(err.code, "RECIPIENT_TOO_LONG");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 10 two-byte characters
        let recipient = "é".repeat(10);
        assert!(NotificationRequest::new(recipient, "hi".into()).is_ok());
    }
}
