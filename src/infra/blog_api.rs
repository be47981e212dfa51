use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;

use crate::application::ports::BlogApi;
use crate::domain::{ApiReply, BlogFields, EditorError, SubmitMethod};

/// reqwest-backed [`BlogApi`] rooted at a site URL.
#[derive(Clone, Debug)]
pub struct HttpBlogApi {
    client: Client,
    base: Url,
}

impl HttpBlogApi {
    pub fn new(site: &Url) -> Result<Self, EditorError> {
        let base = site
            .join("/")
            .map_err(|err| EditorError::transport(site.as_str(), err.to_string()))?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(|err| EditorError::transport(base.as_str(), err.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("blog-editor/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, target: &str) -> Result<Url, EditorError> {
        self.base
            .join(target)
            .map_err(|err| EditorError::transport(target, err.to_string()))
    }

    async fn execute(&self, target: &str, req: RequestBuilder) -> Result<ApiReply, EditorError> {
        let resp = req
            .send()
            .await
            .map_err(|err| EditorError::transport(target, err.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|err| EditorError::transport(target, err.to_string()))?;
        debug!(url = %target, status, "blog api replied");
        Ok(ApiReply { status, body })
    }
}

fn method(method: SubmitMethod) -> Method {
    match method {
        SubmitMethod::Post => Method::POST,
        SubmitMethod::Put => Method::PUT,
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn fetch(&self, target: &str) -> Result<ApiReply, EditorError> {
        let url = self.url(target)?;
        debug!(%url, "GET");
        self.execute(target, self.client.get(url)).await
    }

    async fn send(
        &self,
        submit: SubmitMethod,
        target: &str,
        body: &BlogFields,
    ) -> Result<ApiReply, EditorError> {
        let url = self.url(target)?;
        debug!(%url, method = %submit, "sending draft");
        let req = self.client.request(method(submit), url).json(body);
        self.execute(target, req).await
    }
}
