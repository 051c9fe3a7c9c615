use serde::{Deserialize, Serialize};

// -------------------------
// Response DTOs
// -------------------------

/// Static `{"message": ...}` body returned by the placeholder handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
