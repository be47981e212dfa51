//! Classification of submit responses.

use serde_json::Value;

use super::error::EditorError;

/// Status and raw body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReply {
    Success {
        id: String,
    },
    Failure {
        message: Option<Value>,
        data: Option<Value>,
        raw: String,
    },
}

impl SubmitReply {
    /// An object carrying a truthy `error` is a failure whatever the status;
    /// any other non-2xx reply is a transport-level error.
    pub fn classify(target: &str, reply: &ApiReply) -> Result<Self, EditorError> {
        if let Some(failure) = Self::error_envelope(&reply.body) {
            return Ok(failure);
        }

        if !reply.is_success() {
            return Err(EditorError::Status {
                target: target.to_string(),
                status: reply.status,
                body: reply.body.clone(),
            });
        }

        let id = serde_json::from_str::<Value>(&reply.body)
            .ok()
            .as_ref()
            .and_then(|value| value.get("id"))
            .and_then(id_text)
            .ok_or_else(|| {
                EditorError::invalid_response(format!("no post id in `{}`", reply.body))
            })?;

        Ok(Self::Success { id })
    }

    /// A body that is a JSON object with a truthy `error`, as a failure.
    pub fn error_envelope(body: &str) -> Option<Self> {
        let parsed = serde_json::from_str::<Value>(body).ok()?;
        let fields = parsed
            .as_object()
            .filter(|fields| fields.get("error").is_some_and(is_truthy))?;
        Some(Self::Failure {
            message: fields.get("message").cloned(),
            data: fields.get("data").cloned(),
            raw: body.to_string(),
        })
    }

    /// Text to display for a failure: `message`, then `data`, then the raw body.
    pub fn alert_text(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, data, raw } => Some(
                [message, data]
                    .into_iter()
                    .flatten()
                    .find(|value| is_truthy(value))
                    .map_or_else(|| raw.clone(), display_text),
            ),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
