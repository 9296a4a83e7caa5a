/// Inference Client — the single point of entry for all Hugging Face
/// Inference API calls in the Intake API.
///
/// ARCHITECTURAL RULE: No other module may call the inference endpoint
/// directly. Embeddings and text tasks (summary, feedback) MUST go through
/// this module.
///
/// Model: sentence-transformers/all-MiniLM-L6-v2 (hardcoded — the index
/// dimensionality is tied to it, so it must not drift per deployment)
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub mod handlers;

const INFERENCE_API_URL: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2";

/// Embedding inputs are cut to this many characters before transmission.
pub const MAX_EMBED_CHARS: usize = 128;

/// Task hint header understood by the inference endpoint.
const TASK_HEADER: &str = "X-Inference-Task";

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed embedding response: {0}")]
    MalformedEmbedding(String),
}

/// Expected shape of one element of the feature-extraction response.
/// Decoded explicitly so a shape mismatch surfaces as `MalformedEmbedding`,
/// never as a panic further down the pipeline.
#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

/// Anything that can turn a short text into an embedding vector.
/// Carried by the candidate pipeline as `&dyn Embedder` so tests can
/// substitute a stub backend.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError>;
}

/// The single inference client used by all services in the Intake API.
/// One request per call; failures are terminal to the enclosing request
/// (no retries, no backoff).
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_key: String,
}

impl InferenceClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Requests a feature-extraction embedding for `text`.
    /// The input is sanitized and truncated to [`MAX_EMBED_CHARS`] first.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        let input = sanitize_for_embedding(text);
        debug!("Embedding {} chars", input.len());

        let body = self
            .post_task("feature-extraction", &json!({ "inputs": input }))
            .await?;

        decode_embedding(body)
    }

    /// Requests a summary of `text`, returning the provider's raw payload.
    pub async fn summarize(&self, text: &str) -> Result<Value, InferenceError> {
        self.post_task("summarization", &json!({ "inputs": text }))
            .await
    }

    /// Requests hiring feedback over the three free-text fields, returning
    /// the provider's raw payload.
    pub async fn feedback(
        &self,
        skills: &str,
        experience: &str,
        job_description: &str,
    ) -> Result<Value, InferenceError> {
        self.post_task(
            "feature-extraction",
            &json!({
                "inputs": {
                    "skills": skills,
                    "experience": experience,
                    "jobDescription": job_description,
                }
            }),
        )
        .await
    }

    /// Single-shot POST to the inference endpoint with the given task hint.
    async fn post_task(&self, task: &str, body: &Value) -> Result<Value, InferenceError> {
        let response = self
            .client
            .post(INFERENCE_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .header(TASK_HEADER, task)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Embedder for InferenceClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        InferenceClient::embed(self, text).await
    }
}

/// Normalizes text for the embedding model: whitespace runs collapse to a
/// single space, the input is trimmed, the bullet glyphs U+2022 and U+F0A7
/// become hyphens, and the result is cut to [`MAX_EMBED_CHARS`] characters.
pub fn sanitize_for_embedding(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace(['\u{2022}', '\u{f0a7}'], "-")
        .chars()
        .take(MAX_EMBED_CHARS)
        .collect()
}

/// Decodes the feature-extraction response: an array whose first element
/// carries an `embedding` field holding the vector.
fn decode_embedding(body: Value) -> Result<Vec<f32>, InferenceError> {
    let rows: Vec<EmbeddingRow> = serde_json::from_value(body)
        .map_err(|e| InferenceError::MalformedEmbedding(e.to_string()))?;

    rows.into_iter()
        .next()
        .map(|row| row.embedding)
        .ok_or_else(|| InferenceError::MalformedEmbedding("empty response array".to_string()))
}
