use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientSettings;
use crate::error::BookingError;

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx reply into `BookingError::HttpStatus`.
    pub fn into_success(self, path: &str) -> Result<String, BookingError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(BookingError::HttpStatus {
                path: path.to_string(),
                status: self.status,
            })
        }
    }
}

/// Same-origin requests the search page makes. Paths include the query string.
#[async_trait]
pub trait PageHttpClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpReply, BookingError>;
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, BookingError>;
}

pub struct ReqwestPageClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestPageClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, BookingError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_reply(response: reqwest::Response) -> Result<HttpReply, BookingError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl PageHttpClient for ReqwestPageClient {
    async fn get(&self, path: &str) -> Result<HttpReply, BookingError> {
        debug!("GET {path}");
        let response = self.client.get(self.url_for(path)).send().await?;
        Self::read_reply(response).await
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, BookingError> {
        debug!("POST {path} ({} bytes)", body.len());
        let response = self
            .client
            .post(self.url_for(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Self::read_reply(response).await
    }
}
