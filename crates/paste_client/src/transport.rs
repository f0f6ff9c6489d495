//! HTTP POST transport

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Response type of [`HttpTransport`]
pub type HttpResponse = reqwest::Response;

/// Error type of [`HttpTransport`]
pub type HttpError = reqwest::Error;

/// Something that can POST a JSON body to a path on the backend
#[async_trait]
pub trait PostTransport: Send + Sync {
    /// Whatever the transport hands back on completion
    type Response: Send;
    /// Transport failure, passed through to callers untouched
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue exactly one POST of `body` to `path`
    async fn post_json(&self, path: &str, body: &Value) -> Result<Self::Response, Self::Error>;
}

/// reqwest-backed transport rooted at a base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http_client: Client,
}

impl HttpTransport {
    /// Create a new transport for `base_url`
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("pastebin-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(base_url, http_client))
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl PostTransport for HttpTransport {
    type Response = HttpResponse;
    type Error = HttpError;

    async fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, HttpError> {
        // status codes are not inspected, a 4xx/5xx is still a response
        self.http_client.post(self.url(path)).json(body).send().await
    }
}
