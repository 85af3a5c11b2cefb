/// Product API client — the single point of entry for the remote
/// upload/matching backend.
///
/// ARCHITECTURAL RULE: no other module may call the product API directly.
/// The business logic itself (parsing, scoring, matching) lives behind this
/// API; the front end only reads display data from it.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Status { status: u16 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchOverview {
    pub open_roles: u32,
    pub matched: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    pub file_name: String,
    pub status: String,
    /// Server-authored rich text. Must pass through `sanitize` before being
    /// embedded in a page.
    pub highlights_html: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /v1/match/overview
    pub async fn match_overview(&self) -> Result<MatchOverview, ApiError> {
        self.get_json("/v1/match/overview").await
    }

    /// GET /v1/resumes/{id}
    pub async fn resume_summary(&self, id: &str) -> Result<ResumeSummary, ApiError> {
        self.get_json(&format!("/v1/resumes/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}
