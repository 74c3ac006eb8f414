use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response confirming a create or delete operation that has no record to return
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human readable confirmation
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
