use serde::{Deserialize, Serialize};

pub const MAX_SESSION_ID_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Inbound chat turn as received at the boundary, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("session_id required")]
    MissingSessionId,
    #[error("session_id too long (max 100)")]
    SessionIdTooLong,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message too long (max 2000)")]
    MessageTooLong,
}

impl TurnRequest {
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
        }
    }

    /// Trim both fields and enforce the length bounds the engine relies on.
    /// Lengths are counted in characters, not bytes.
    pub fn validate(self) -> Result<TurnRequest, ValidationError> {
        let session_id = self.session_id.trim();
        let message = self.message.trim();

        if session_id.is_empty() {
            return Err(ValidationError::MissingSessionId);
        }
        if session_id.chars().count() > MAX_SESSION_ID_LEN {
            return Err(ValidationError::SessionIdTooLong);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ValidationError::MessageTooLong);
        }
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        Ok(TurnRequest {
            session_id: session_id.to_owned(),
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_fields() {
        let req = TurnRequest::new("  s1 ", "\n xin chao  ").validate().unwrap();
        assert_eq!(req.session_id, "s1");
        assert_eq!(req.message, "xin chao");
    }

    #[test]
    fn validate_rejects_blank_message() {
        let err = TurnRequest::new("s1", "   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyMessage);
        assert_eq!(err.to_string(), "message cannot be empty");
    }

    #[test]
    fn validate_rejects_missing_session() {
        let err = TurnRequest::new("  ", "hello").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingSessionId);
    }

    #[test]
    fn validate_session_id_bound() {
        let ok = "s".repeat(MAX_SESSION_ID_LEN);
        assert!(TurnRequest::new(ok, "hi").validate().is_ok());

        let long = "s".repeat(MAX_SESSION_ID_LEN + 1);
        let err = TurnRequest::new(long, "hi").validate().unwrap_err();
        assert_eq!(err.to_string(), "session_id too long (max 100)");
    }

    #[test]
    fn validate_message_bound_counts_chars() {
        // 2000 multi-byte characters is still within bounds.
        let ok = "ă".repeat(MAX_MESSAGE_LEN);
        assert!(TurnRequest::new("s1", ok).validate().is_ok());

        let long = "a".repeat(MAX_MESSAGE_LEN + 1);
        let err = TurnRequest::new("s1", long).validate().unwrap_err();
        assert_eq!(err.to_string(), "message too long (max 2000)");
    }
}
