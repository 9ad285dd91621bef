use crate::models::JobPosting;

pub const UNKNOWN_POSITION: &str = "Unknown Position";
const MAX_TITLE_CHARS: usize = 100;

/// Display title for a posting: the structured title when present, otherwise
/// derived from the description via [`title_from_description`].
pub fn resolve_title(posting: &JobPosting) -> String {
    match posting.title() {
        Some(title) => title.to_string(),
        None => title_from_description(posting.description()),
    }
}

/// First line of the description, trimmed and capped at 100 characters.
/// Falls back to [`UNKNOWN_POSITION`] only when the description is absent; a
/// blank first line yields an empty title.
pub fn title_from_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return UNKNOWN_POSITION.to_string();
    };

    let first_line = description.lines().next().unwrap_or_default().trim();
    first_line.chars().take(MAX_TITLE_CHARS).collect()
}
