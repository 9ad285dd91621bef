//! Résumé Analyzer — turns raw résumé text into a `ResumeProfile` via the LLM.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::{CareerLevel, ResumeProfile, NOT_SPECIFIED};
use crate::resume::prompts::{RESUME_ANALYSIS_PROMPT_TEMPLATE, RESUME_ANALYSIS_SYSTEM};

/// Résumé text beyond this many characters is not sent to the model.
pub const MAX_RESUME_CHARS: usize = 4000;

/// Years credited per past role when the model reports zero experience.
const YEARS_PER_ROLE: f64 = 1.5;

/// Produces a structured profile from résumé text, or fails. A failure means
/// matching must not run.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> Result<ResumeProfile, AppError>;
}

/// Default analyzer backed by the chat-completions client.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(&self, resume_text: &str) -> Result<ResumeProfile, AppError> {
        let prepared = truncate_resume_text(resume_text);
        if prepared.len() < resume_text.len() {
            info!(
                "Truncated resume from {} to {} chars",
                resume_text.chars().count(),
                prepared.chars().count()
            );
        }

        let prompt = RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", prepared);
        info!("Analyzing resume with {}", self.llm.model());

        let raw: Value = match self.llm.call_json(&prompt, RESUME_ANALYSIS_SYSTEM).await {
            Ok(v) => v,
            Err(LlmError::Parse(e)) => {
                return Err(AppError::Analysis(format!("model returned invalid JSON: {e}")))
            }
            Err(LlmError::EmptyContent) => {
                return Err(AppError::Analysis("model returned no content".to_string()))
            }
            Err(e) => return Err(AppError::Llm(e)),
        };

        let profile = normalize_profile(raw)?;
        info!(
            "Resume analyzed: {} skills, {} years, level {}",
            profile.skills.len(),
            profile.experience_years,
            profile.career_level
        );
        Ok(profile)
    }
}

/// Cuts `text` to at most [`MAX_RESUME_CHARS`] characters, backing off to the
/// last space so a word is not split. Shorter texts are returned unchanged.
pub fn truncate_resume_text(text: &str) -> &str {
    let Some((cut, _)) = text.char_indices().nth(MAX_RESUME_CHARS) else {
        return text;
    };
    let truncated = &text[..cut];
    match truncated.rfind(' ') {
        Some(idx) if idx > 0 => &truncated[..idx],
        _ => truncated,
    }
}

/// Builds a complete profile from the model's JSON answer.
///
/// Missing fields get defaults, list items that are not strings are stringified,
/// and `experience_years` accepts numbers or numeric strings. Zero years with a
/// non-empty role history is replaced by 1.5 years per role.
pub fn normalize_profile(raw: Value) -> Result<ResumeProfile, AppError> {
    let Value::Object(obj) = raw else {
        return Err(AppError::Analysis(
            "model output is not a JSON object".to_string(),
        ));
    };

    let mut profile = ResumeProfile {
        skills: string_list(&obj, "skills"),
        experience_years: years(&obj),
        past_roles: string_list(&obj, "past_roles"),
        current_role: string_field(&obj, "current_role"),
        domain: string_field(&obj, "domain"),
        projects: string_list(&obj, "projects"),
        education_level: string_field(&obj, "education_level"),
        technologies: string_list(&obj, "technologies"),
        career_level: CareerLevel::from(string_field(&obj, "career_level")),
        work_preferences: string_field(&obj, "work_preferences"),
        key_achievements: string_list(&obj, "key_achievements"),
        desired_roles: string_list(&obj, "desired_roles"),
    };

    if profile.experience_years == 0.0 && !profile.past_roles.is_empty() {
        let estimated =
            (profile.past_roles.len() as f64 * YEARS_PER_ROLE * 10.0).round() / 10.0;
        warn!(
            "Model reported 0 years but listed {} roles, estimating {estimated} years",
            profile.past_roles.len()
        );
        profile.experience_years = estimated;
    }

    Ok(profile)
}

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    let value = obj.get(key).filter(|v| !v.is_null());
    if value.is_none() {
        warn!("Resume analysis missing field '{key}', using default");
    }
    value
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match field(obj, key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        // A bare string is treated as a one-item list.
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match field(obj, key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn years(obj: &Map<String, Value>) -> f64 {
    let years = match field(obj, "experience_years") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if years.is_finite() && years > 0.0 {
        years
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_text_not_truncated() {
        assert_eq!(truncate_resume_text("Hello World"), "Hello World");
    }

    #[test]
    fn test_long_text_truncated_at_last_space() {
        let text = format!("{} tail", "word ".repeat(1000));
        let truncated = truncate_resume_text(&text);
        assert!(truncated.chars().count() <= MAX_RESUME_CHARS);
        assert!(truncated.ends_with("word"));
    }

    #[test]
    fn test_long_text_without_spaces_hard_cut() {
        let text = "A".repeat(10_000);
        assert_eq!(truncate_resume_text(&text).len(), MAX_RESUME_CHARS);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(5000);
        assert_eq!(truncate_resume_text(&text).chars().count(), MAX_RESUME_CHARS);
    }

    #[test]
    fn test_normalize_full_profile() {
        let raw = json!({
            "skills": ["Python", "SQL"],
            "experience_years": 3.5,
            "past_roles": ["Data Analyst"],
            "current_role": "Data Engineer",
            "domain": "FinTech",
            "projects": ["Fraud pipeline"],
            "education_level": "BSc Computer Science",
            "technologies": ["Airflow"],
            "career_level": "Mid",
            "work_preferences": "Remote",
            "key_achievements": ["Cut costs 20%"],
            "desired_roles": ["Senior Data Engineer"]
        });
        let profile = normalize_profile(raw).unwrap();
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.experience_years, 3.5);
        assert_eq!(profile.career_level, CareerLevel::Mid);
        assert_eq!(profile.desired_roles, vec!["Senior Data Engineer"]);
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let profile = normalize_profile(json!({"skills": ["Rust"]})).unwrap();
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.current_role, NOT_SPECIFIED);
        assert_eq!(profile.work_preferences, NOT_SPECIFIED);
        assert!(profile.projects.is_empty());
        assert_eq!(profile.career_level, CareerLevel::NotSpecified);
    }

    #[test]
    fn test_years_from_numeric_string() {
        let profile = normalize_profile(json!({"experience_years": " 4.2 "})).unwrap();
        assert_eq!(profile.experience_years, 4.2);
    }

    #[test]
    fn test_negative_or_garbage_years_become_zero() {
        let profile = normalize_profile(json!({"experience_years": -3})).unwrap();
        assert_eq!(profile.experience_years, 0.0);
        let profile = normalize_profile(json!({"experience_years": "lots"})).unwrap();
        assert_eq!(profile.experience_years, 0.0);
    }

    #[test]
    fn test_zero_years_estimated_from_roles() {
        let raw = json!({
            "experience_years": 0,
            "past_roles": ["Intern", "Analyst", "Engineer"]
        });
        let profile = normalize_profile(raw).unwrap();
        assert_eq!(profile.experience_years, 4.5);
    }

    #[test]
    fn test_non_string_list_items_stringified() {
        let profile = normalize_profile(json!({"skills": ["Go", 42, null, ""]})).unwrap();
        assert_eq!(profile.skills, vec!["Go", "42"]);
    }

    #[test]
    fn test_non_object_is_analysis_error() {
        let err = normalize_profile(json!(["skills"])).unwrap_err();
        assert!(matches!(err, AppError::Analysis(_)));
    }
}
