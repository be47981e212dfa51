use async_trait::async_trait;

use crate::domain::{ApiReply, BlogFields, EditorError, SubmitMethod};

/// Blog API as seen by the form. Transport failures are errors; any HTTP
/// response, successful or not, is returned as an [`ApiReply`].
#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn fetch(&self, target: &str) -> Result<ApiReply, EditorError>;

    async fn send(
        &self,
        method: SubmitMethod,
        target: &str,
        body: &BlogFields,
    ) -> Result<ApiReply, EditorError>;
}

/// Page hosting the form: navigation and alert display.
pub trait PageHost {
    /// Leave the page for `url`.
    fn assign(&mut self, url: &str);

    fn alert(&mut self, message: &str);
}

/// Host that records what the form asked of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedPage {
    pub assigned: Option<String>,
    pub alerts: Vec<String>,
}

impl RecordedPage {
    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl PageHost for RecordedPage {
    fn assign(&mut self, url: &str) {
        self.assigned = Some(url.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
