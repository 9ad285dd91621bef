use std::sync::Arc;

use tracing::{debug, info};

use crate::matching::scoring::{HeuristicMatchScorer, MatchScorer};
use crate::models::{JobPosting, MatchResult, ResumeProfile};

/// Number of leading postings whose score breakdown is logged at debug level.
const DEBUG_PREVIEW: usize = 5;

/// Ranks an immutable job catalog against résumé profiles.
#[derive(Clone)]
pub struct JobMatcher {
    catalog: Arc<[JobPosting]>,
    scorer: Arc<dyn MatchScorer>,
}

impl JobMatcher {
    pub fn new(catalog: Vec<JobPosting>) -> Self {
        Self::with_scorer(catalog, Arc::new(HeuristicMatchScorer::default()))
    }

    pub fn with_scorer(catalog: Vec<JobPosting>, scorer: Arc<dyn MatchScorer>) -> Self {
        Self {
            catalog: catalog.into(),
            scorer,
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Scores every posting, keeps those with `overall_score >= min_score`, and
    /// returns the best `top_n` by descending score.
    ///
    /// The sort is stable, so equal scores keep catalog order. An empty result
    /// means nothing cleared the threshold.
    pub fn rank(&self, profile: &ResumeProfile, top_n: usize, min_score: f64) -> Vec<MatchResult> {
        info!(
            "Ranking {} jobs (experience: {} years, level: {}, skills: {})",
            self.catalog.len(),
            profile.experience_years,
            profile.career_level,
            profile.skills.len()
        );

        let mut results: Vec<MatchResult> = Vec::new();

        for (idx, posting) in self.catalog.iter().enumerate() {
            let scores = self.scorer.score(profile, posting);

            if idx < DEBUG_PREVIEW {
                debug!(
                    "Job {}: {:.50} | overall={:.3} skills={:.3} exp={:.3} title={:.3}",
                    idx + 1,
                    scores.title,
                    scores.overall,
                    scores.skill,
                    scores.experience,
                    scores.title_fit
                );
            }

            if scores.overall < min_score {
                continue;
            }

            results.push(MatchResult {
                title: scores.title,
                company: posting.company.clone(),
                location: posting.location.clone(),
                estimated_level: scores.estimated_level,
                description: posting.description.clone(),
                post_link: posting.post_link.clone(),
                keywords: posting.keywords.clone(),
                overall_score: scores.overall,
                skill_score: scores.skill,
                experience_score: scores.experience,
                title_score: scores.title_fit,
            });
        }

        let qualifying = results.len();
        results.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        results.truncate(top_n);

        if qualifying == 0 {
            info!("No jobs found at or above {:.0}% threshold", min_score * 100.0);
        } else {
            info!(
                "Found {} jobs at or above {:.0}% threshold, returning top {}",
                qualifying,
                min_score * 100.0,
                results.len()
            );
        }

        results
    }
}
