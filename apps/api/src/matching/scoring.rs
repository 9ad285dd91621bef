//! Match Scoring — combines the per-field scorers into one weighted score per posting.
//!
//! Default: `HeuristicMatchScorer` (keyword and band heuristics, deterministic).
//! `JobMatcher` holds an `Arc<dyn MatchScorer>` so the ranking loop never depends
//! on a particular backend.

use serde::{Deserialize, Serialize};

use crate::matching::level::{estimate_level, ExperienceLevel};
use crate::matching::scorers::{experience_match, skill_match, title_match};
use crate::matching::title::resolve_title;
use crate::models::{JobPosting, ResumeProfile};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub title: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            experience: 0.30,
            title: 0.20,
        }
    }
}

/// Score breakdown for one (profile, posting) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScores {
    /// Title shown to the user; resolved from the description when missing.
    pub title: String,
    pub estimated_level: ExperienceLevel,
    pub overall: f64,
    pub skill: f64,
    pub experience: f64,
    pub title_fit: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one posting against one profile. Must be total: every returned score
/// lies in `[0, 1]`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &ResumeProfile, posting: &JobPosting) -> MatchScores;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted keyword/band scorer.
///
/// 1. Resolve the display title (description fallback).
/// 2. Estimate the posting level from title + description.
/// 3. overall = skills×w.skills + experience×w.experience + title×w.title, clamped.
#[derive(Debug, Clone)]
pub struct HeuristicMatchScorer {
    weights: ScoringWeights,
}

impl HeuristicMatchScorer {
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Default for HeuristicMatchScorer {
    fn default() -> Self {
        Self::with_weights(ScoringWeights::default())
    }
}

impl MatchScorer for HeuristicMatchScorer {
    fn score(&self, profile: &ResumeProfile, posting: &JobPosting) -> MatchScores {
        let title = resolve_title(posting);
        let estimated_level = estimate_level(Some(&title), posting.description());

        let skill = skill_match(
            &profile.skills,
            posting.description(),
            &title,
            posting.keywords(),
        );
        let experience = experience_match(profile.experience_years, Some(estimated_level));
        let title_fit = title_match(Some(&title), &profile.desired_roles);

        let overall = combine(skill, experience, title_fit, &self.weights);

        MatchScores {
            title,
            estimated_level,
            overall,
            skill,
            experience,
            title_fit,
        }
    }
}

/// Weighted sum of the field scores, clamped to `[0, 1]`.
pub fn combine(skill: f64, experience: f64, title: f64, weights: &ScoringWeights) -> f64 {
    (weights.skills * skill + weights.experience * experience + weights.title * title)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str], years: f64, desired: &[&str]) -> ResumeProfile {
        ResumeProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            desired_roles: desired.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn posting(title: Option<&str>, description: &str) -> JobPosting {
        JobPosting {
            title: title.map(String::from),
            description: description.to_string(),
            company: Some("Acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert!((w.skills + w.experience + w.title - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combine_full_scores_is_one() {
        let score = combine(1.0, 1.0, 1.0, &ScoringWeights::default());
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_combine_partial() {
        // 0.5*0.5 + 0.3*0.55 + 0.2*0.7 = 0.25 + 0.165 + 0.14 = 0.555
        let score = combine(0.5, 0.55, 0.7, &ScoringWeights::default());
        assert!((score - 0.555).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_combine_clamped() {
        let w = ScoringWeights {
            skills: 2.0,
            experience: 0.0,
            title: 0.0,
        };
        assert_eq!(combine(1.0, 0.0, 0.0, &w), 1.0);
    }

    #[test]
    fn test_score_python_sql_scenario() {
        let scorer = HeuristicMatchScorer::default();
        let p = profile(&["python", "sql"], 4.0, &[]);
        let job = posting(None, "Looking for a Python developer with SQL skills");

        let scores = scorer.score(&p, &job);
        assert_eq!(scores.title, "Looking for a Python developer with SQL skills");
        assert_eq!(scores.skill, 1.0);
        assert_eq!(scores.estimated_level, ExperienceLevel::MidSenior);
        assert_eq!(scores.experience, 1.0);
        assert_eq!(scores.title_fit, 0.5);
        // 0.5 + 0.3 + 0.1
        assert!((scores.overall - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_score_uses_resolved_title_for_level_and_fit() {
        let scorer = HeuristicMatchScorer::default();
        let p = profile(&[], 1.0, &["Senior Data Engineer"]);
        let job = posting(Some("Data Engineer II"), "Build pipelines.");

        let scores = scorer.score(&p, &job);
        assert_eq!(scores.title_fit, 1.0);
        assert_eq!(scores.skill, 0.0);
        assert_eq!(scores.estimated_level, ExperienceLevel::MidSenior);
        assert_eq!(scores.experience, 0.55);
    }

    #[test]
    fn test_empty_skills_always_score_zero_skill() {
        let scorer = HeuristicMatchScorer::default();
        let p = profile(&[], 3.0, &["Engineer"]);
        for job in [
            posting(Some("Rust Engineer"), "rust rust rust"),
            posting(None, ""),
            posting(Some("Intern"), "Summer internship"),
        ] {
            assert_eq!(scorer.score(&p, &job).skill, 0.0);
        }
    }

    #[test]
    fn test_custom_weights() {
        let scorer = HeuristicMatchScorer::with_weights(ScoringWeights {
            skills: 1.0,
            experience: 0.0,
            title: 0.0,
        });
        let p = profile(&["rust", "cobol"], 3.0, &[]);
        let scores = scorer.score(&p, &posting(Some("Rust Engineer"), "Systems work"));
        assert!((scores.overall - 0.5).abs() < 1e-9);
    }
}
