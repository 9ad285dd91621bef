use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::models::MatchResult;

pub const EXPORT_FILENAME: &str = "job_matches.csv";

/// Serializes ranked matches to CSV with a header row, in ranking order.
/// An empty slice still produces the header.
pub fn matches_to_csv(matches: &[MatchResult]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    wtr.write_record([
        "title",
        "company",
        "location",
        "estimated_level",
        "description",
        "post_link",
        "keywords",
        "overall_score",
        "skill_score",
        "experience_score",
        "title_score",
    ])?;

    for m in matches {
        wtr.write_record([
            m.title.clone(),
            m.company.clone().unwrap_or_default(),
            m.location.clone().unwrap_or_default(),
            m.estimated_level.label().to_string(),
            m.description.clone(),
            m.post_link.clone().unwrap_or_default(),
            m.keywords.clone().unwrap_or_default(),
            format!("{:.4}", m.overall_score),
            format!("{:.4}", m.skill_score),
            format!("{:.4}", m.experience_score),
            format!("{:.4}", m.title_score),
        ])?;
    }

    wtr.into_inner().context("Failed to flush CSV export")
}
