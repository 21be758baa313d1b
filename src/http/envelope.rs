//! JSON success envelope shared by task endpoints.

use serde::Serialize;

/// Success envelope: `{ success, data?, message?, count? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload.
    #[must_use]
    pub const fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Adds a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a list payload together with its length.
    #[must_use]
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            success: true,
            data: Some(items),
            message: None,
            count: Some(count),
        }
    }
}

impl ApiResponse<()> {
    /// Creates an envelope that carries only a message.
    #[must_use]
    pub const fn message(message: &'static str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message),
            count: None,
        }
    }
}
