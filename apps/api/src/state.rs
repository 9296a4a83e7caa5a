use std::sync::Arc;

use crate::index::CandidateIndex;
use crate::inference::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
    /// Index gateway behind a trait object so the pipeline keeps a stubbable seam.
    pub index: Arc<dyn CandidateIndex>,
}
