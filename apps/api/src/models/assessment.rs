use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::assessment::career_matcher::CareerRecommendation;
use crate::assessment::scoring::{AnswerSet, CategoryScores, PersonalityTrait};

/// One stored assessment: the raw answers plus the full computed result, so
/// past results render without re-running the aggregator against a question
/// bank that may have changed since.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: Json<AnswerSet>,
    pub category_scores: Json<CategoryScores>,
    pub overall_score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Json<Vec<CareerRecommendation>>,
    pub personality_traits: Json<Vec<PersonalityTrait>>,
    pub created_at: DateTime<Utc>,
}
