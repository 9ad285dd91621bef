use std::sync::Arc;

use crate::config::Config;
use crate::matching::ranker::JobMatcher;
use crate::resume::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Catalog and scorer; loaded once at startup and read-only afterwards.
    pub matcher: Arc<JobMatcher>,
    /// Pluggable résumé analyzer. Default: LlmResumeAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
