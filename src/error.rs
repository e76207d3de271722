//! Frontend Errors

use thiserror::Error;

/// Alert shown for every submission failure that carries no server message.
pub const SUBMIT_FALLBACK_MESSAGE: &str =
    "Ocorreu um erro ao salvar a atividade. Por favor, tente novamente.";

/// Why an activity submission failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The server answered with a status other than "success".
    #[error("activity rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Text for the user-facing alert. Only a rejection with a message is
    /// shown verbatim.
    pub fn alert_text(&self) -> &str {
        match self {
            SubmitError::Rejected { message: Some(message) } => message,
            _ => SUBMIT_FALLBACK_MESSAGE,
        }
    }
}

/// Score chart initialization failures.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart payload element #{0} not found")]
    MissingPayload(String),
    #[error("chart payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("chart canvas unavailable: {0}")]
    Canvas(String),
    #[error("chart construction failed: {0}")]
    Render(String),
}

/// Theme preference persistence failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("failed to persist theme preference: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_text() {
        let rejected = SubmitError::Rejected {
            message: Some("Pontos inválidos".to_string()),
        };
        assert_eq!(rejected.alert_text(), "Pontos inválidos");

        let silent = SubmitError::Rejected { message: None };
        assert_eq!(silent.alert_text(), SUBMIT_FALLBACK_MESSAGE);

        let offline = SubmitError::Transport("connection refused".to_string());
        assert_eq!(offline.alert_text(), SUBMIT_FALLBACK_MESSAGE);
        assert_eq!(offline.to_string(), "request failed: connection refused");
    }
}
