use std::fmt;

use serde::Serialize;

/// Coarse seniority band of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ExperienceLevel {
    Internship,
    EntryLevel,
    Associate,
    MidSenior,
    Director,
    Executive,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Internship => "Internship",
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::Associate => "Associate",
            ExperienceLevel::MidSenior => "Mid-Senior level",
            ExperienceLevel::Director => "Director",
            ExperienceLevel::Executive => "Executive",
        }
    }

    /// Inclusive `(min_years, max_years)` range expected for this level.
    pub fn year_band(&self) -> (f64, f64) {
        match self {
            ExperienceLevel::Internship => (0.0, 1.0),
            ExperienceLevel::EntryLevel => (0.0, 2.0),
            ExperienceLevel::Associate => (1.0, 3.0),
            ExperienceLevel::MidSenior => (3.0, 8.0),
            ExperienceLevel::Director => (8.0, 15.0),
            ExperienceLevel::Executive => (15.0, 30.0),
        }
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Scanned in order; the first band with any keyword present wins.
const LEVEL_KEYWORDS: &[(ExperienceLevel, &[&str])] = &[
    (ExperienceLevel::Internship, &["intern", "internship"]),
    (
        ExperienceLevel::EntryLevel,
        &["entry level", "junior", "graduate", "associate"],
    ),
    (
        ExperienceLevel::MidSenior,
        &["senior", "sr.", "lead", "principal"],
    ),
    (
        ExperienceLevel::Director,
        &["director", "head of", "vp", "vice president"],
    ),
    (
        ExperienceLevel::Executive,
        &["chief", "cto", "ceo", "executive"],
    ),
];

/// Estimates the posting's level from keyword presence in its description and title.
///
/// Matching is plain substring containment, so "intern" also fires on "internal".
/// Unclassified postings default to `MidSenior`, the same label the "senior" band uses.
pub fn estimate_level(title: Option<&str>, description: Option<&str>) -> ExperienceLevel {
    let combined = format!(
        "{} {}",
        description.unwrap_or_default(),
        title.unwrap_or_default()
    )
    .to_lowercase();

    LEVEL_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| combined.contains(w)))
        .map(|(level, _)| *level)
        .unwrap_or(ExperienceLevel::MidSenior)
}
