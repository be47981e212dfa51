use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("edit page is missing the `id` query parameter")]
    MissingPostId,
    #[error("post id `{0}` is not a valid path segment")]
    InvalidPostId(String),
    #[error("invalid page location `{location}`: {source}")]
    Location {
        location: String,
        source: url::ParseError,
    },
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("request to `{target}` failed: {message}")]
    Transport { target: String, message: String },
    #[error("request to `{target}` returned status {status}: {body}")]
    Status {
        target: String,
        status: u16,
        body: String,
    },
    #[error("request to `{target}` was refused: {message}")]
    Refused { target: String, message: String },
    #[error("unexpected response body: {message}")]
    InvalidResponse { message: String },
}

impl EditorError {
    pub fn transport(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Text shown to the user when the error interrupts a form action.
    pub fn alert_text(&self) -> String {
        match self {
            Self::MissingPostId => "No post selected for editing.".to_string(),
            Self::Status { status, .. } => format!("Request failed with status {status}."),
            Self::Refused { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
