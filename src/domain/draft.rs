//! The post draft edited by the form.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::error::EditorError;

/// Wire key used for the post heading.
///
/// New drafts send `message`; a loaded record is sent back under whichever
/// key the server returned it with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingKey {
    #[default]
    Message,
    Title,
    Name,
}

impl HeadingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Title => "title",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFields {
    pub heading_key: HeadingKey,
    pub heading: String,
    pub summary: String,
    pub content: String,
}

impl BlogFields {
    pub fn new(
        heading: impl Into<String>,
        summary: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            heading_key: HeadingKey::default(),
            heading: heading.into(),
            summary: summary.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn with_heading_key(mut self, key: HeadingKey) -> Self {
        self.heading_key = key;
        self
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Heading => self.heading = value,
            DraftField::Summary => self.summary = value,
            DraftField::Content => self.content = value,
        }
    }
}

impl Serialize for BlogFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.heading_key.as_str(), &self.heading)?;
        map.serialize_entry("summary", &self.summary)?;
        map.serialize_entry("content", &self.content)?;
        map.end()
    }
}

/// Loose shape of a record returned by the API. Anything other than the
/// three edited fields is dropped, including the post id. Numbers and
/// booleans are shown as their text.
#[derive(Deserialize)]
struct RawBlogFields {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    summary: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
}

fn field_text<E: serde::de::Error>(
    key: &str,
    value: Option<Value>,
) -> Result<Option<String>, E> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(E::custom(format!(
            "field `{key}` must be a string, number or boolean"
        ))),
    }
}

impl<'de> Deserialize<'de> for BlogFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlogFields::deserialize(deserializer)?;
        let mut heading = None;
        for (key, value) in [
            (HeadingKey::Title, raw.title),
            (HeadingKey::Message, raw.message),
            (HeadingKey::Name, raw.name),
        ] {
            let text = field_text::<D::Error>(key.as_str(), value)?;
            if heading.is_none() {
                heading = text.map(|text| (key, text));
            }
        }
        let (heading_key, heading) = heading.unwrap_or_default();

        Ok(Self {
            heading_key,
            heading,
            summary: field_text::<D::Error>("summary", raw.summary)?.unwrap_or_default(),
            content: field_text::<D::Error>("content", raw.content)?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Heading,
    Summary,
    Content,
}

impl FromStr for DraftField {
    type Err = EditorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "heading" | "title" | "message" | "name" => Ok(Self::Heading),
            "summary" => Ok(Self::Summary),
            "content" => Ok(Self::Content),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading => f.write_str("heading"),
            Self::Summary => f.write_str("summary"),
            Self::Content => f.write_str("content"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Alert text; never sent to the API.
    pub message: String,
    pub blog: BlogFields,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_draft_serializes_with_message_key() {
        let value = serde_json::to_value(&PostDraft::default().blog).expect("serialize");
        assert_eq!(value, json!({"message": "", "summary": "", "content": ""}));
    }

    #[test]
    fn loaded_title_is_sent_back_under_title() {
        let blog: BlogFields =
            serde_json::from_value(json!({"title": "T", "summary": "S", "content": "C"}))
                .expect("deserialize");
        assert_eq!(blog, BlogFields::new("T", "S", "C").with_heading_key(HeadingKey::Title));
        assert_eq!(
            serde_json::to_value(&blog).expect("serialize"),
            json!({"title": "T", "summary": "S", "content": "C"})
        );
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let blog: BlogFields =
            serde_json::from_value(json!({"name": "N", "summary": null})).expect("deserialize");
        assert_eq!(blog.heading_key, HeadingKey::Name);
        assert_eq!(blog.heading, "N");
        assert_eq!(blog.summary, "");
        assert_eq!(blog.content, "");
    }

    #[test]
    fn extra_fields_are_dropped() {
        let blog: BlogFields = serde_json::from_value(json!({
            "id": "0015",
            "user_name": "admin",
            "created_at": 1.5,
            "message": "M",
            "summary": "S",
            "content": "C"
        }))
        .expect("deserialize");
        assert_eq!(
            serde_json::to_value(&blog).expect("serialize"),
            json!({"message": "M", "summary": "S", "content": "C"})
        );
    }

    #[test]
    fn scalar_fields_are_shown_as_text() {
        let blog: BlogFields =
            serde_json::from_value(json!({"title": 2024, "summary": 5, "content": true}))
                .expect("deserialize");
        assert_eq!(blog, BlogFields::new("2024", "5", "true").with_heading_key(HeadingKey::Title));
    }

    #[test]
    fn structured_fields_are_rejected() {
        let err = serde_json::from_value::<BlogFields>(json!({"title": "T", "content": ["a"]}))
            .expect_err("array content");
        assert!(err.to_string().contains("content"), "{err}");
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("title".parse::<DraftField>().ok(), Some(DraftField::Heading));
        assert_eq!("content".parse::<DraftField>().ok(), Some(DraftField::Content));
        assert!(matches!(
            "tags".parse::<DraftField>(),
            Err(EditorError::UnknownField(name)) if name == "tags"
        ));
    }
}
