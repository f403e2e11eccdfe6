//! HTTP client helpers for tests.

use std::time::Duration;

use serde_json::Value;
use twist_judge::ScoreResult;
use twist_judge::gateway::HealthResponse;
use twist_judge::gateway::payload::SemanticScoreResponse;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<reqwest::Response, TestClientError> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn score(&self, body: Value) -> Result<ScoreResult, TestClientError> {
        let resp = self.post("/score", &body).await?;
        Self::decode(resp).await
    }

    pub async fn semantic_score(
        &self,
        body: Value,
    ) -> Result<SemanticScoreResponse, TestClientError> {
        let resp = self.post("/semantic-score", &body).await?;
        Self::decode(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.text().await?)),
            503 => Err(TestClientError::Unavailable(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
