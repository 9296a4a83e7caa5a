//! Candidate data models — the submission payload, the metadata stored
//! alongside each vector, and the flattened view returned from queries.

use serde::{Deserialize, Serialize};

/// A candidate submission as it arrives from the intake form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateData {
    pub name: String,
    pub email: String,
    /// Social-profile URL.
    pub linked: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    /// The text that gets embedded. The intake form currently submits the
    /// extracted experience text under this key; the server embeds whatever
    /// arrives here and does not substitute another field.
    pub job_description: String,
}

/// Metadata stored in the index next to each candidate vector. Immutable
/// once upserted; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMetadata {
    pub name: String,
    pub email: String,
    pub linked: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub job_description: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// A query match flattened for the client, plus its similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub score: f32,
}

impl CandidateView {
    pub fn from_metadata(metadata: CandidateMetadata, score: f32) -> Self {
        Self {
            name: metadata.name,
            email: metadata.email,
            skills: metadata.skills,
            experience: metadata.experience,
            education: metadata.education,
            score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreCandidateResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct QueryCandidatesResponse {
    pub candidates: Vec<CandidateView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_data_deserializes_camel_case() {
        let json = r#"{
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "linked": "https://linkedin.com/in/ada",
            "skills": "Rust, Go",
            "experience": "5 years backend",
            "education": "BS CS",
            "jobDescription": "5 years backend"
        }"#;

        let data: CandidateData = serde_json::from_str(json).unwrap();
        assert_eq!(data.name, "Ada Lovelace");
        assert_eq!(data.job_description, "5 years backend");
    }

    #[test]
    fn test_metadata_round_trips_wire_names() {
        let metadata = CandidateMetadata {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            linked: "https://linkedin.com/in/ada".to_string(),
            skills: "Rust".to_string(),
            experience: "5 years".to_string(),
            education: "BS".to_string(),
            job_description: "5 years".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["jobDescription"], "5 years");
        assert_eq!(value["createdAt"], "2024-01-01T00:00:00Z");

        let back: CandidateMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back.name, "Ada");
    }

    #[test]
    fn test_candidate_view_flattens_metadata() {
        let metadata = CandidateMetadata {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            linked: "https://linkedin.com/in/ada".to_string(),
            skills: "Rust".to_string(),
            experience: "5 years".to_string(),
            education: "BS".to_string(),
            job_description: "5 years".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let view = CandidateView::from_metadata(metadata, 0.87);
        assert_eq!(view.name, "Ada");
        assert!((view.score - 0.87).abs() < f32::EPSILON);
        // The flattened view carries no link or timestamp.
        let value = serde_json::to_value(&view).unwrap();
        assert!(value.get("linked").is_none());
        assert!(value.get("createdAt").is_none());
    }
}
