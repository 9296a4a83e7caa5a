//! Candidate Index Gateway — thin REST client for the remote vector index.
//!
//! Two operations only: upsert one candidate vector, query the top-K nearest
//! vectors with metadata. Concurrency semantics are delegated entirely to
//! the remote service; each call here is a single awaited request.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::candidates::models::CandidateMetadata;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Index API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One vector as the index stores it.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateVector {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: CandidateMetadata,
}

/// One query match as the index returns it. `metadata` is optional on the
/// wire even with `includeMetadata: true`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredMatch {
    pub score: f32,
    pub metadata: Option<CandidateMetadata>,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: Vec<&'a CandidateVector>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: u32,
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<ScoredMatch>,
}

/// The index operations the candidate pipeline depends on. Carried as
/// `&dyn CandidateIndex` so tests can substitute a stub index.
#[async_trait]
pub trait CandidateIndex: Send + Sync {
    async fn upsert(&self, vector: &CandidateVector) -> Result<(), IndexError>;
    async fn query(&self, vector: &[f32], top_k: u32) -> Result<Vec<ScoredMatch>, IndexError>;
}

/// Pinecone-backed index gateway.
#[derive(Clone)]
pub struct PineconeIndex {
    client: Client,
    host: String,
    api_key: String,
}

impl PineconeIndex {
    pub fn new(host: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            host: host.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response, IndexError> {
        let response = self
            .client
            .post(format!("{}{path}", self.host))
            .header("Api-Key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IndexError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CandidateIndex for PineconeIndex {
    async fn upsert(&self, vector: &CandidateVector) -> Result<(), IndexError> {
        debug!("Upserting vector {} ({} dims)", vector.id, vector.values.len());
        self.post(
            "/vectors/upsert",
            &UpsertRequest {
                vectors: vec![vector],
            },
        )
        .await?;
        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: u32) -> Result<Vec<ScoredMatch>, IndexError> {
        let response = self
            .post(
                "/query",
                &QueryRequest {
                    vector,
                    top_k,
                    include_metadata: true,
                },
            )
            .await?;

        let body: QueryResponse = response.json().await?;
        debug!("Query returned {} matches", body.matches.len());
        Ok(body.matches)
    }
}
