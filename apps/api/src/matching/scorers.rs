//! Per-field scorers. Each one is total and returns a value in `[0, 1]`.

use std::collections::HashSet;

use crate::matching::level::ExperienceLevel;

/// Neutral score used when there is not enough information to judge a field.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Fraction of résumé skills that occur anywhere in the posting's text.
///
/// A skill matches on plain case-insensitive substring containment against
/// description + title (+ keywords), so "go" also matches "google".
pub fn skill_match(
    skills: &[String],
    description: Option<&str>,
    title: &str,
    keywords: Option<&str>,
) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let mut combined = format!("{} {}", description.unwrap_or_default(), title);
    if let Some(keywords) = keywords {
        combined.push(' ');
        combined.push_str(keywords);
    }
    let combined = combined.to_lowercase();

    let matched = skills
        .iter()
        .filter(|skill| combined.contains(&skill.to_lowercase()))
        .count();

    matched as f64 / skills.len() as f64
}

/// How well the candidate's years fit the level's expected band.
pub fn experience_match(resume_years: f64, level: Option<ExperienceLevel>) -> f64 {
    let Some(level) = level else {
        return NEUTRAL_SCORE;
    };
    let (min_years, max_years) = level.year_band();

    if (min_years..=max_years).contains(&resume_years) {
        1.0
    } else if resume_years < min_years {
        match min_years - resume_years {
            gap if gap <= 0.5 => 0.95,
            gap if gap <= 1.0 => 0.85,
            gap if gap <= 1.5 => 0.70,
            gap if gap <= 2.0 => 0.55,
            _ => 0.30,
        }
    } else {
        match resume_years - max_years {
            gap if gap <= 1.0 => 0.90,
            gap if gap <= 2.0 => 0.75,
            gap if gap <= 3.0 => 0.60,
            _ => 0.40,
        }
    }
}

/// Word overlap between the job title and the candidate's desired roles.
///
/// Two or more shared words with any desired role scores 1.0 and stops the scan.
/// A single shared word scores 0.7 but later roles may still reach 1.0.
pub fn title_match(title: Option<&str>, desired_roles: &[String]) -> f64 {
    let Some(title) = title else {
        return NEUTRAL_SCORE;
    };
    if desired_roles.is_empty() {
        return NEUTRAL_SCORE;
    }

    let title_words = word_set(title);
    let mut best = 0.3;

    for desired in desired_roles {
        let common = word_set(desired).intersection(&title_words).count();
        if common >= 2 {
            return 1.0;
        }
        if common == 1 {
            best = 0.7;
        }
    }

    best
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
