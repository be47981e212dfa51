//! Page location: everything the form derives from the URL it is mounted on.
//!
//! Nothing here is cached. Mode, target and redirect are recomputed from the
//! current location on every call, so a controller that is navigated to a new
//! page picks up the change without being rebuilt.

use std::fmt;

use serde::Serialize;
use url::{Url, form_urlencoded};

use super::error::EditorError;

/// Default collection path of the blog API.
pub const DEFAULT_API_PATH: &str = "/api/blog/";

const EDIT_SUFFIX: &str = "/edit";
const ID_PARAM: &str = "id";
const MANAGE_SEGMENT: &str = "manage";
const POST_PAGE_PREFIX: &str = "blog/";
const PLACEHOLDER_ORIGIN: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    Create,
    Edit,
}

impl EditorMode {
    pub fn method(self) -> SubmitMethod {
        match self {
            Self::Create => SubmitMethod::Post,
            Self::Edit => SubmitMethod::Put,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Edit => f.write_str("edit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitMethod {
    Post,
    Put,
}

impl SubmitMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for SubmitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Accepts an absolute URL or a site-relative `path?query`.
    pub fn parse(input: &str) -> Result<Self, EditorError> {
        let parsed = match Url::parse(input) {
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(PLACEHOLDER_ORIGIN).and_then(|origin| origin.join(input))
            }
            other => other,
        };

        parsed
            .map(|url| Self { url })
            .map_err(|source| EditorError::Location {
                location: input.to_string(),
                source,
            })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn mode(&self) -> EditorMode {
        if self.path().ends_with(EDIT_SUFFIX) {
            EditorMode::Edit
        } else {
            EditorMode::Create
        }
    }

    /// First non-empty `id` query parameter.
    pub fn post_id(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == ID_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    /// API endpoint for the current mode.
    pub fn target(&self, api_path: &str) -> Result<String, EditorError> {
        match self.mode() {
            EditorMode::Create => Ok(api_path.to_string()),
            EditorMode::Edit => {
                let id = self.post_id().ok_or(EditorError::MissingPostId)?;
                if matches!(id.as_str(), "." | "..") {
                    return Err(EditorError::InvalidPostId(id));
                }
                Ok(format!("{api_path}{}", path_segment(&id)))
            }
        }
    }

    /// Public page of a saved post, relative to the part of the path that
    /// precedes the management area.
    pub fn redirect_for(&self, post_id: &str) -> String {
        let path = self.path();
        let prefix = path
            .find(MANAGE_SEGMENT)
            .map_or(path, |index| &path[..index]);
        format!("{prefix}{POST_PAGE_PREFIX}{}", path_segment(post_id))
    }
}

/// Percent-encode `value` so it stays a single path segment: `/`, `?`, `#`
/// and `%` are all escaped.
fn path_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
