//! Homework status API client

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::io::HttpClient;
use crate::HomeworkBotError;

/// Source of raw status payloads
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait StatusApi: Send + Sync {
    /// Fetch every status change since `from_date` (seconds since epoch).
    ///
    /// The decoded body is returned unvalidated. Transport failures, non-200
    /// statuses and undecodable bodies all surface as [`HomeworkBotError::Api`].
    async fn fetch(&self, from_date: i64) -> crate::Result<Value>;
}

/// Client for the Practicum homework status endpoint
pub struct PracticumClient {
    endpoint: String,
    authorization: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", config.endpoint);

        Self {
            endpoint: config.endpoint.clone(),
            authorization: format!("OAuth {}", config.practicum_token),
            http,
        }
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> crate::Result<Value> {
        let from_date = from_date.to_string();
        let headers = [("Authorization", self.authorization.as_str())];
        let query = [("from_date", from_date.as_str())];

        tracing::debug!("Requesting statuses from_date={}", from_date);

        let response = match self.http.get(&self.endpoint, &headers, &query).await {
            Ok(response) => response,
            Err(e) => {
                let message = format!("request to {} failed: {}", self.endpoint, e);
                tracing::error!("{}", message);
                return Err(HomeworkBotError::Api(message));
            }
        };

        if response.status != 200 {
            let message = format!("{} returned status {}", self.endpoint, response.status);
            tracing::error!("{}: {}", message, response.body);
            return Err(HomeworkBotError::Api(message));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            let message = format!("{} returned a body that is not JSON: {}", self.endpoint, e);
            tracing::error!("{}", message);
            HomeworkBotError::Api(message)
        })
    }
}
