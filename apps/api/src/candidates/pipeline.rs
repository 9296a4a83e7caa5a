//! Store / query pipeline — validates the job-description text, embeds it,
//! and talks to the index. Both operations are single-shot: any remote
//! failure is terminal to the enclosing request.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::candidates::models::{
    CandidateData, CandidateMetadata, CandidateView, QueryCandidatesResponse,
    StoreCandidateResponse,
};
use crate::errors::AppError;
use crate::index::{CandidateIndex, CandidateVector};
use crate::inference::Embedder;

/// Number of nearest candidates a query returns.
pub const TOP_K: u32 = 5;

const MISSING_JOB_DESCRIPTION: &str = "Job description is required";

/// Embeds the submitted job-description text and upserts the candidate
/// under a freshly generated UUID. The id is logged, not returned.
pub async fn store_candidate(
    embedder: &dyn Embedder,
    index: &dyn CandidateIndex,
    data: CandidateData,
) -> Result<StoreCandidateResponse, AppError> {
    if data.job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()));
    }

    let values = embedder.embed(&data.job_description).await?;

    let vector = CandidateVector {
        id: Uuid::new_v4().to_string(),
        values,
        metadata: CandidateMetadata {
            name: data.name,
            email: data.email,
            linked: data.linked,
            skills: data.skills,
            experience: data.experience,
            education: data.education,
            job_description: data.job_description,
            created_at: Utc::now().to_rfc3339(),
        },
    };

    index.upsert(&vector).await?;
    info!("Candidate {} upserted for {}", vector.id, vector.metadata.name);

    Ok(StoreCandidateResponse {
        message: "Candidate upserted successfully".to_string(),
    })
}

/// Embeds the query text and returns the top-K nearest candidates with
/// their similarity scores. An empty match list is a normal 200 response.
pub async fn query_candidates(
    embedder: &dyn Embedder,
    index: &dyn CandidateIndex,
    job_description: &str,
) -> Result<QueryCandidatesResponse, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_JOB_DESCRIPTION.to_string()));
    }

    let vector = embedder.embed(job_description).await?;
    let matches = index.query(&vector, TOP_K).await?;

    let candidates = matches
        .into_iter()
        .filter_map(|m| m.metadata.map(|meta| CandidateView::from_metadata(meta, m.score)))
        .collect();

    Ok(QueryCandidatesResponse { candidates })
}
