use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder the analyzer substitutes for any string field it could not determine.
pub const NOT_SPECIFIED: &str = "Not specified";

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

/// Self-reported seniority of the candidate, as inferred by the résumé analyzer.
/// `null` and unknown labels deserialize to `NotSpecified`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum CareerLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    #[default]
    NotSpecified,
}

impl CareerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLevel::Entry => "Entry",
            CareerLevel::Mid => "Mid",
            CareerLevel::Senior => "Senior",
            CareerLevel::Lead => "Lead",
            CareerLevel::NotSpecified => NOT_SPECIFIED,
        }
    }
}

impl From<String> for CareerLevel {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "entry" | "entry level" | "junior" => CareerLevel::Entry,
            "mid" | "mid level" | "mid-level" => CareerLevel::Mid,
            "senior" => CareerLevel::Senior,
            "lead" => CareerLevel::Lead,
            _ => CareerLevel::NotSpecified,
        }
    }
}

impl From<Option<String>> for CareerLevel {
    fn from(value: Option<String>) -> Self {
        value.map(CareerLevel::from).unwrap_or_default()
    }
}

impl From<CareerLevel> for String {
    fn from(level: CareerLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured résumé attributes used for matching.
///
/// Every field is always present: deserializing a partial object fills the gaps
/// with empty lists, `0.0`, or [`NOT_SPECIFIED`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub past_roles: Vec<String>,
    #[serde(default = "not_specified")]
    pub current_role: String,
    #[serde(default = "not_specified")]
    pub domain: String,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default = "not_specified")]
    pub education_level: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub career_level: CareerLevel,
    #[serde(default = "not_specified")]
    pub work_preferences: String,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub desired_roles: Vec<String>,
}

impl Default for ResumeProfile {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            experience_years: 0.0,
            past_roles: Vec::new(),
            current_role: not_specified(),
            domain: not_specified(),
            projects: Vec::new(),
            education_level: not_specified(),
            technologies: Vec::new(),
            career_level: CareerLevel::NotSpecified,
            work_preferences: not_specified(),
            key_achievements: Vec::new(),
            desired_roles: Vec::new(),
        }
    }
}
