use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::models::ResumeProfile;
use crate::resume::pdf::extract_text_from_pdf;
use crate::resume::upload::read_resume_upload;
use crate::state::AppState;

/// Extracts text from an uploaded PDF and runs it through the analyzer.
pub async fn profile_from_pdf(
    state: &AppState,
    pdf: bytes::Bytes,
) -> Result<ResumeProfile, AppError> {
    let resume_text = extract_text_from_pdf(pdf).await?;
    state.analyzer.analyze(&resume_text).await
}

/// POST /api/v1/resume/analyze
///
/// Multipart upload of a résumé PDF; returns the structured profile without matching.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeProfile>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    let profile = profile_from_pdf(&state, upload.pdf).await?;
    Ok(Json(profile))
}
