use serde::{Deserialize, Serialize};

use crate::matching::level::ExperienceLevel;

/// One job advertisement from the catalog. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: Option<String>,
    /// Free-text description. Empty means the catalog had none.
    pub description: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub keywords: Option<String>,
    pub post_link: Option<String>,
}

impl JobPosting {
    /// Structured title, if the catalog provided a non-blank one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.trim().is_empty())
    }

    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// A scored posting, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub estimated_level: ExperienceLevel,
    pub description: String,
    pub post_link: Option<String>,
    pub keywords: Option<String>,
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub title_score: f64,
}
