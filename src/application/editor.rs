//! Create/edit form controller for a single blog post.
//!
//! The controller owns the draft and the page location. Field edits are
//! explicit [`BlogEditor::input`] calls and [`BlogEditor::render`] reads the
//! draft back out; there is no implicit binding. Both network operations take
//! `&mut self`, so at most one request is in flight per form.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::ports::{BlogApi, PageHost};
use crate::domain::{
    BlogFields, DEFAULT_API_PATH, DraftField, EditorError, EditorMode, PageLocation, PostDraft,
    SubmitMethod, SubmitReply,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Collection path of the blog API, with a trailing slash.
    pub api_path: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            api_path: DEFAULT_API_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; the page was sent to the post.
    Redirected(String),
    /// The API refused the draft; the alert text was shown.
    Rejected(String),
}

/// Snapshot of what the form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub mode: EditorMode,
    pub method: SubmitMethod,
    pub target: Option<String>,
    pub blog: BlogFields,
    pub alert: Option<String>,
}

pub struct BlogEditor<A, H> {
    api: A,
    host: H,
    location: PageLocation,
    options: EditorOptions,
    draft: PostDraft,
}

impl<A: BlogApi, H: PageHost> BlogEditor<A, H> {
    pub fn new(api: A, host: H, location: PageLocation, options: EditorOptions) -> Self {
        Self {
            api,
            host,
            location,
            options,
            draft: PostDraft::default(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.location.mode()
    }

    pub fn target(&self) -> Result<String, EditorError> {
        self.location.target(&self.options.api_path)
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    /// Point the form at a new page. The draft is kept.
    pub fn navigate(&mut self, location: PageLocation) {
        self.location = location;
    }

    pub fn input(&mut self, field: DraftField, value: impl Into<String>) {
        debug!(%field, "field edited");
        self.draft.blog.set(field, value.into());
    }

    pub fn render(&self) -> FormView {
        let mode = self.mode();
        FormView {
            mode,
            method: mode.method(),
            target: self.target().ok(),
            blog: self.draft.blog.clone(),
            alert: (!self.draft.message.is_empty()).then(|| self.draft.message.clone()),
        }
    }

    /// Load the existing post when editing. Creating needs no request.
    pub async fn init(&mut self) -> Result<(), EditorError> {
        if self.mode() == EditorMode::Create {
            return Ok(());
        }

        let loaded = self.load().await;
        match loaded {
            Ok(blog) => {
                self.draft.blog = blog;
                self.draft.message.clear();
                Ok(())
            }
            Err(err) => Err(self.report(err)),
        }
    }

    async fn load(&self) -> Result<BlogFields, EditorError> {
        let target = self.target()?;
        let reply = self.api.fetch(&target).await?;
        if let Some(failure) = SubmitReply::error_envelope(&reply.body) {
            return Err(EditorError::Refused {
                message: failure.alert_text().unwrap_or_default(),
                target,
            });
        }
        if !reply.is_success() {
            return Err(EditorError::Status {
                target,
                status: reply.status,
                body: reply.body,
            });
        }

        let blog = serde_json::from_str(&reply.body).map_err(|err| {
            EditorError::invalid_response(format!("post record from `{target}`: {err}"))
        })?;
        info!(url = %target, "loaded post into editor");
        Ok(blog)
    }

    /// Send the draft. Not idempotent: each call in create mode makes a new post.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, EditorError> {
        let sent = self.send().await;
        let reply = match sent {
            Ok(reply) => reply,
            Err(err) => return Err(self.report(err)),
        };

        match reply {
            SubmitReply::Success { id } => {
                let redirect = self.location.redirect_for(&id);
                info!(post_id = %id, redirect = %redirect, "post saved");
                self.draft.message.clear();
                self.host.assign(&redirect);
                Ok(SubmitOutcome::Redirected(redirect))
            }
            failure @ SubmitReply::Failure { .. } => {
                let text = failure.alert_text().unwrap_or_default();
                warn!(alert = %text, "post rejected by api");
                self.show_alert(&text);
                Ok(SubmitOutcome::Rejected(text))
            }
        }
    }

    async fn send(&self) -> Result<SubmitReply, EditorError> {
        let target = self.target()?;
        let method = self.mode().method();
        let reply = self.api.send(method, &target, &self.draft.blog).await?;
        SubmitReply::classify(&target, &reply)
    }

    fn show_alert(&mut self, text: &str) {
        self.draft.message = text.to_string();
        self.host.alert(text);
    }

    fn report(&mut self, err: EditorError) -> EditorError {
        warn!(error = %err, mode = %self.mode(), "editor request failed");
        self.show_alert(&err.alert_text());
        err
    }
}
