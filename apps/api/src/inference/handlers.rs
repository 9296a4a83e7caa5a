//! Axum route handlers for the AI text tasks (summary, feedback).
//!
//! Both return the provider's payload unmodified under a single top-level
//! key; no shaping happens server-side.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub skills: String,
    pub experience: String,
    pub job_description: String,
}

/// POST /api/v1/summarize
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<Value>, AppError> {
    let summary = state.inference.summarize(&request.text).await?;
    Ok(Json(json!({ "summary": summary })))
}

/// POST /api/v1/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<Value>, AppError> {
    let feedback = state
        .inference
        .feedback(&request.skills, &request.experience, &request.job_description)
        .await?;
    Ok(Json(json!({ "feedback": feedback })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_request_deserializes_camel_case() {
        let json = r#"{
            "skills": "Rust, Go",
            "experience": "5 years backend",
            "jobDescription": "backend engineer"
        }"#;

        let request: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.job_description, "backend engineer");
    }

    #[test]
    fn test_summarize_request_requires_text() {
        assert!(serde_json::from_str::<SummarizeRequest>("{}").is_err());
    }
}
