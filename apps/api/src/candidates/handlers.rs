//! Axum route handlers for the Candidate API.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::candidates::models::CandidateData;
use crate::candidates::pipeline::{query_candidates, store_candidate};
use crate::errors::AppError;
use crate::state::AppState;

/// Explicitly tagged candidate operation. The tag replaces the original
/// intake form's payload-shape sniffing (presence of a nested
/// `parameters.candidateData` object) with an `op` discriminant.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum CandidateRequest {
    #[serde(rename_all = "camelCase")]
    Store { candidate_data: CandidateData },
    #[serde(rename_all = "camelCase")]
    Query { job_description: String },
}

/// POST /api/v1/candidates
pub async fn handle_candidates(
    State(state): State<AppState>,
    Json(request): Json<CandidateRequest>,
) -> Result<Response, AppError> {
    match request {
        CandidateRequest::Store { candidate_data } => {
            let response =
                store_candidate(&state.inference, state.index.as_ref(), candidate_data).await?;
            Ok(Json(response).into_response())
        }
        CandidateRequest::Query { job_description } => {
            let response =
                query_candidates(&state.inference, state.index.as_ref(), &job_description).await?;
            Ok(Json(response).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_request_deserializes_from_tag() {
        let json = r#"{
            "op": "store",
            "candidateData": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "linked": "https://linkedin.com/in/ada",
                "skills": "Rust, Go",
                "experience": "5 years backend",
                "education": "BS CS",
                "jobDescription": "5 years backend"
            }
        }"#;

        let request: CandidateRequest = serde_json::from_str(json).unwrap();
        match request {
            CandidateRequest::Store { candidate_data } => {
                assert_eq!(candidate_data.name, "Ada Lovelace");
                assert_eq!(candidate_data.job_description, "5 years backend");
            }
            other => panic!("expected store, got {other:?}"),
        }
    }

    #[test]
    fn test_query_request_deserializes_from_tag() {
        let json = r#"{"op": "query", "jobDescription": "backend engineer"}"#;

        let request: CandidateRequest = serde_json::from_str(json).unwrap();
        match request {
            CandidateRequest::Query { job_description } => {
                assert_eq!(job_description, "backend engineer");
            }
            other => panic!("expected query, got {other:?}"),
        }
    }

    #[test]
    fn test_untagged_payload_is_rejected() {
        // The original duck-typed shape no longer dispatches.
        let json = r#"{"jobDescription": "backend engineer"}"#;
        assert!(serde_json::from_str::<CandidateRequest>(json).is_err());
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let json = r#"{"op": "delete", "jobDescription": "x"}"#;
        assert!(serde_json::from_str::<CandidateRequest>(json).is_err());
    }
}
