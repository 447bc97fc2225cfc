//! HTTP client abstraction for testability

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;

use crate::HomeworkBotError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request with extra headers and query parameters
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> crate::Result<HttpResponse>;

    /// Send a POST request with form-encoded body
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HomeworkBotError::Http(format!("Building HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> crate::Result<HttpResponse> {
        let shown = redact_url(url);
        let full_url = reqwest::Url::parse_with_params(url, query)
            .map_err(|e| HomeworkBotError::Http(format!("Invalid URL {}: {}", shown, e)))?;

        tracing::debug!("GET {} {:?}", shown, query);
        let mut request = self.client.get(full_url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request.send().await.map_err(|e| {
            HomeworkBotError::Http(format!("GET {} failed: {}", shown, e.without_url()))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            HomeworkBotError::Http(format!("Reading response body: {}", e.without_url()))
        })?;

        tracing::debug!("GET {} -> {} ({} bytes)", shown, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse> {
        let shown = redact_url(url);
        tracing::debug!("POST {}", shown);
        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| {
                HomeworkBotError::Http(format!("POST {} failed: {}", shown, e.without_url()))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            HomeworkBotError::Http(format!("Reading response body: {}", e.without_url()))
        })?;

        tracing::debug!("POST {} -> {} ({} bytes)", shown, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Hide a Telegram bot token embedded in a URL path (`/bot<token>/...`)
pub fn redact_url(url: &str) -> Cow<'_, str> {
    let Some(start) = url.find("/bot") else {
        return Cow::Borrowed(url);
    };
    let token_start = start + "/bot".len();
    let token_end = url[token_start..]
        .find('/')
        .map_or(url.len(), |i| token_start + i);
    if token_start == token_end {
        return Cow::Borrowed(url);
    }
    Cow::Owned(format!("{}***{}", &url[..token_start], &url[token_end..]))
}
