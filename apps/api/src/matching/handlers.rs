//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::export::{matches_to_csv, EXPORT_FILENAME};
use crate::models::{MatchResult, ResumeProfile};
use crate::resume::handlers::profile_from_pdf;
use crate::resume::upload::read_resume_upload;
use crate::state::AppState;

/// Upper bound on `top_n` accepted from callers.
pub const MAX_TOP_N: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: ResumeProfile,
    pub top_n: Option<usize>,
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total_matches: usize,
    pub top_n: usize,
    pub min_score: f64,
    pub matches: Vec<MatchResult>,
    pub message: String,
    /// Present when the profile was extracted from an uploaded résumé.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ResumeProfile>,
}

impl MatchResponse {
    fn new(matches: Vec<MatchResult>, top_n: usize, min_score: f64) -> Self {
        let message = if matches.is_empty() {
            "No job matches found. Try lowering the minimum match score.".to_string()
        } else {
            format!("Found {} matching jobs", matches.len())
        };
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total_matches: matches.len(),
            top_n,
            min_score,
            matches,
            message,
            profile: None,
        }
    }
}

/// Applies configured defaults and validates the ranking parameters.
pub fn resolve_options(
    config: &Config,
    top_n: Option<usize>,
    min_score: Option<f64>,
) -> Result<(usize, f64), AppError> {
    let top_n = top_n.unwrap_or(config.default_top_n);
    if !(1..=MAX_TOP_N).contains(&top_n) {
        return Err(AppError::Validation(format!(
            "top_n must be between 1 and {MAX_TOP_N}, got {top_n}"
        )));
    }

    let min_score = min_score.unwrap_or(config.default_min_score);
    if !(0.0..=1.0).contains(&min_score) {
        return Err(AppError::Validation(format!(
            "min_score must be between 0 and 1, got {min_score}"
        )));
    }

    Ok((top_n, min_score))
}

fn validate_profile(profile: &ResumeProfile) -> Result<(), AppError> {
    if !profile.experience_years.is_finite() || profile.experience_years < 0.0 {
        return Err(AppError::Validation(
            "experience_years must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

fn run_match(
    state: &AppState,
    profile: &ResumeProfile,
    top_n: Option<usize>,
    min_score: Option<f64>,
) -> Result<MatchResponse, AppError> {
    let (top_n, min_score) = resolve_options(&state.config, top_n, min_score)?;
    validate_profile(profile)?;
    let matches = state.matcher.rank(profile, top_n, min_score);
    Ok(MatchResponse::new(matches, top_n, min_score))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Full pipeline: PDF upload → text extraction → LLM analysis → ranking.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    // Reject bad parameters before paying for the LLM call.
    resolve_options(&state.config, upload.top_n, upload.min_score)?;

    let profile = profile_from_pdf(&state, upload.pdf).await?;
    let mut response = run_match(&state, &profile, upload.top_n, upload.min_score)?;
    response.profile = Some(profile);
    Ok(Json(response))
}

/// POST /api/v1/match/profile
///
/// Ranks the catalog against an already-structured profile. No LLM call.
pub async fn handle_match_profile(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let response = run_match(&state, &request.profile, request.top_n, request.min_score)?;
    Ok(Json(response))
}

/// POST /api/v1/match/export
///
/// Same ranking as `/match/profile`, returned as a CSV attachment.
pub async fn handle_match_export(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = run_match(&state, &request.profile, request.top_n, request.min_score)?;
    let body = matches_to_csv(&response.matches)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{DEFAULT_MIN_SCORE, DEFAULT_TOP_N};
    use crate::matching::ranker::JobMatcher;
    use crate::models::JobPosting;
    use crate::resume::analyzer::ResumeAnalyzer;
    use crate::routes::build_router;

    struct StubAnalyzer;

    #[async_trait]
    impl ResumeAnalyzer for StubAnalyzer {
        async fn analyze(&self, _resume_text: &str) -> Result<ResumeProfile, AppError> {
            Ok(ResumeProfile::default())
        }
    }

    fn config() -> Config {
        Config {
            groq_api_key: "test".to_string(),
            groq_base_url: "http://localhost".to_string(),
            llm_model: "test-model".to_string(),
            jobs_csv_path: "unused.csv".to_string(),
            default_top_n: DEFAULT_TOP_N,
            default_min_score: DEFAULT_MIN_SCORE,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app() -> Router {
        let catalog = vec![
            JobPosting {
                title: Some("Backend Engineer".to_string()),
                description: "Rust and Postgres services".to_string(),
                company: Some("Ferrous".to_string()),
                ..Default::default()
            },
            JobPosting {
                title: None,
                description: "Looking for a Python developer with SQL skills".to_string(),
                company: Some("Snake Corp".to_string()),
                ..Default::default()
            },
        ];
        build_router(AppState {
            config: config(),
            matcher: Arc::new(JobMatcher::new(catalog)),
            analyzer: Arc::new(StubAnalyzer),
        })
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_resolve_options_defaults() {
        let (top_n, min_score) = resolve_options(&config(), None, None).unwrap();
        assert_eq!(top_n, 10);
        assert_eq!(min_score, 0.30);
    }

    #[test]
    fn test_resolve_options_rejects_out_of_range() {
        assert!(resolve_options(&config(), Some(0), None).is_err());
        assert!(resolve_options(&config(), Some(MAX_TOP_N + 1), None).is_err());
        assert!(resolve_options(&config(), None, Some(-0.1)).is_err());
        assert!(resolve_options(&config(), None, Some(1.5)).is_err());
    }

    #[tokio::test]
    async fn test_match_profile_ranks_catalog() {
        let request = json_request(
            "/api/v1/match/profile",
            json!({
                "profile": {"skills": ["python", "sql"], "experience_years": 4},
                "min_score": 0.0
            }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_matches"], 2);
        let first = &body["matches"][0];
        assert_eq!(first["title"], "Looking for a Python developer with SQL skills");
        assert_eq!(first["skill_score"], 1.0);
        assert_eq!(first["estimated_level"], "Mid-Senior level");
        assert!(body.get("profile").is_none());
    }

    #[tokio::test]
    async fn test_match_profile_no_matches_is_ok() {
        let request = json_request(
            "/api/v1/match/profile",
            json!({"profile": {"skills": ["cobol"]}, "min_score": 1.0}),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_matches"], 0);
        assert!(body["matches"].as_array().unwrap().is_empty());
        assert!(body["message"].as_str().unwrap().contains("No job matches"));
    }

    #[tokio::test]
    async fn test_match_profile_rejects_negative_years() {
        let request = json_request(
            "/api/v1/match/profile",
            json!({"profile": {"experience_years": -1.0}}),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_export_returns_csv_attachment() {
        let request = json_request(
            "/api/v1/match/export",
            json!({"profile": {"skills": ["rust"]}, "min_score": 0.0, "top_n": 1}),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert!(response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains(EXPORT_FILENAME));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("Backend Engineer,Ferrous"));
    }

    #[tokio::test]
    async fn test_upload_without_resume_field_is_rejected() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"top_n\"\r\n\r\n5\r\n--{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/match")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_of_non_pdf_is_unprocessable() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"cv.txt\"\r\nContent-Type: text/plain\r\n\r\nnot a pdf\r\n--{boundary}--\r\n"
        );
        let request = Request::post("/api/v1/match")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PDF_ERROR");
    }
}
