//! Axum route handler for résumé uploads: extract PDF text, sectionize it.

use axum::{extract::Multipart, Json};
use tracing::info;

use crate::errors::AppError;
use crate::resume::sectionizer::{extract_resume_info, SectionMap};

/// POST /api/v1/resume/sections
///
/// Accepts a multipart upload with a `file` field holding PDF bytes and
/// returns the extracted section map. The raw text and the map are never
/// persisted; only a later candidate submission is.
pub async fn handle_extract_sections(mut multipart: Multipart) -> Result<Json<SectionMap>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| AppError::PdfExtract(e.to_string()))?;

        info!("Extracted {} chars of resume text", text.len());
        return Ok(Json(extract_resume_info(&text)));
    }

    Err(AppError::Validation(
        "A PDF file field named 'file' is required".to_string(),
    ))
}
