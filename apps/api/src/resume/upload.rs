use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// Form field carrying the résumé PDF.
pub const RESUME_FIELD: &str = "resume";

/// Contents of a multipart résumé upload.
#[derive(Debug, Default)]
pub struct ResumeUpload {
    pub pdf: Bytes,
    pub top_n: Option<usize>,
    pub min_score: Option<f64>,
}

/// Reads a multipart body with a required `resume` file and optional
/// `top_n` / `min_score` text fields. Unknown fields are ignored.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut pdf: Option<Bytes> = None;
    let mut upload = ResumeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                pdf = Some(data);
            }
            "top_n" => upload.top_n = Some(parse_field(&name, &text(field).await?)?),
            "min_score" => upload.min_score = Some(parse_field(&name, &text(field).await?)?),
            _ => {}
        }
    }

    upload.pdf = pdf
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Validation(format!("A PDF file is required in the '{RESUME_FIELD}' field")))?;
    Ok(upload)
}

async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("'{name}' has an invalid value: {value}")))
}
