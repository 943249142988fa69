use serde_json::Value;

/// Message shown when the backend gave no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred.";

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the backend or never came back (including timeouts).
    #[error("Connection failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {code}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { code: u16, detail: Option<String> },
    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user-facing notice: backend detail when present.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the backend could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub(crate) fn from_status(code: u16, body: &str) -> Self {
        Self::Status {
            code,
            detail: extract_detail(body),
        }
    }
}

/// Pull the validation message out of an error body.
///
/// Accepts `{"detail": "text"}` and `{"detail": [{"msg": "text"}, ...]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let detail = match value.get("detail")? {
        Value::String(text) => Some(text.as_str()),
        Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(Value::as_str),
        _ => None,
    };
    detail.filter(|text| !text.is_empty()).map(str::to_string)
}
