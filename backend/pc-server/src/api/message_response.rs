use serde::Serialize;

/// Confirmation body for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    /// Number of records affected, when more than one can be
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            count: None,
        }
    }
}
