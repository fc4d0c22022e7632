use serde::Deserialize;
use thiserror::Error;

/// Failures of catalog backend calls.
///
/// `Backend` renders as the bare message so callers can show it to
/// the user verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure or an unreadable response
    #[error("Error de red: {0}")]
    Transport(String),

    /// Non-2xx response; message already chosen for display
    #[error("{message}")]
    Backend { status: u16, message: String },
}

/// Structured error body of non-2xx responses. All fields optional;
/// older endpoints send a plain `message`.
#[derive(Debug, Deserialize, Default)]
pub struct BackendErrorBody {
    #[serde(rename = "messageUsr", default)]
    pub message_usr: Option<String>,
    #[serde(rename = "messageDev", default)]
    pub message_dev: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Build the error for a non-2xx response: user-facing message when
/// present, then developer message, then a generic fallback.
pub fn backend_error(status: u16, body: &str) -> ApiError {
    let parsed: BackendErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message_usr
        .filter(|m| !m.trim().is_empty())
        .or(parsed.message_dev.filter(|m| !m.trim().is_empty()))
        .or(parsed.message.filter(|m| !m.trim().is_empty()))
        .unwrap_or_else(|| format!("La solicitud falló con estado {}", status));
    ApiError::Backend { status, message }
}
