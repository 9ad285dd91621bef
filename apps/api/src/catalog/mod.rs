//! Job catalog loading. The catalog is read once at startup and never mutated.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::JobPosting;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Header names the loader understands. Anything else is dropped.
const RECOGNIZED_COLUMNS: &[&str] = &[
    "category",
    "title",
    "job_description",
    "description",
    "company",
    "location",
    "keywords",
    "post_link",
];

// `category` and `job_description` win over their `title` / `description`
// counterparts when a file carries both.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    job_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default)]
    post_link: Option<String>,
}

impl From<CatalogRow> for JobPosting {
    fn from(row: CatalogRow) -> Self {
        JobPosting {
            title: non_blank(row.category).or_else(|| non_blank(row.title)),
            description: non_blank(row.job_description)
                .or_else(|| non_blank(row.description))
                .unwrap_or_default(),
            company: non_blank(row.company),
            location: non_blank(row.location),
            keywords: non_blank(row.keywords),
            post_link: non_blank(row.post_link),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Loads the catalog CSV at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<JobPosting>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let postings = read_catalog(file)?;
    info!("Loaded {} jobs from {}", postings.len(), path.display());
    Ok(postings)
}

/// Parses catalog CSV from any reader. Rows that fail to parse are skipped.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let dropped: Vec<&str> = headers
        .iter()
        .filter(|h| !RECOGNIZED_COLUMNS.contains(&h.trim()))
        .collect();
    if !dropped.is_empty() {
        info!("Dropped {} unrecognized columns: {:?}", dropped.len(), dropped);
    }

    let mut postings = Vec::new();
    for (idx, row) in rdr.deserialize::<CatalogRow>().enumerate() {
        match row {
            Ok(row) => postings.push(JobPosting::from(row)),
            // +2: header line plus 1-based numbering
            Err(e) => warn!("Skipping catalog row {}: {e}", idx + 2),
        }
    }

    Ok(postings)
}
