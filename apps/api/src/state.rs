use std::sync::Arc;

use sqlx::PgPool;

use crate::assessment::career_matcher::CareerMatcher;
use crate::assessment::question_bank::QuestionBank;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable question source. Default: StaticQuestionBank.
    pub question_bank: Arc<dyn QuestionBank>,
    /// Pluggable career ranker. Default: WeightedCareerMatcher.
    pub career_matcher: Arc<dyn CareerMatcher>,
}
