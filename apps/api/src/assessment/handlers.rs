use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as SqlJson;
use tracing::info;
use uuid::Uuid;

use crate::assessment::question_bank::Question;
use crate::assessment::scoring::{score_assessment, AnswerSet, AssessmentResult, Category};
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub user_id: Uuid,
    pub answers: AnswerSet,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: AssessmentResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestions {
    pub category: &'static str,
    pub label: String,
    pub questions: Vec<Question>,
}

/// GET /api/v1/questions
/// Returns the full question bank grouped by category, in canonical order.
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Json<Vec<CategoryQuestions>> {
    let sections = Category::ALL
        .into_iter()
        .map(|category| CategoryQuestions {
            category: category.key(),
            label: category.display_name(),
            questions: state.question_bank.questions(category),
        })
        .collect();
    Json(sections)
}

/// POST /api/v1/assessments
/// Scores the submitted answer set, persists the result, and returns it.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let result = score_assessment(
        &req.answers,
        state.question_bank.as_ref(),
        state.career_matcher.as_ref(),
    );

    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO assessments
            (id, user_id, answers, category_scores, overall_score,
             strengths, weaknesses, recommendations, personality_traits)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(id)
    .bind(req.user_id)
    .bind(SqlJson(&req.answers))
    .bind(SqlJson(&result.category_scores))
    .bind(result.overall_score as i32)
    .bind(&result.strengths)
    .bind(&result.weaknesses)
    .bind(SqlJson(&result.career_recommendations))
    .bind(SqlJson(&result.personality_traits))
    .execute(&state.db)
    .await?;

    info!(
        "Stored assessment {id} for user {} (overall {})",
        req.user_id, result.overall_score
    );

    Ok(Json(SubmitAssessmentResponse { id, result }))
}

/// GET /api/v1/assessments?user_id=...
/// Lists a user's stored assessments, newest first.
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AssessmentRow>>, AppError> {
    let rows = sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRow>, AppError> {
    let row = sqlx::query_as::<_, AssessmentRow>("SELECT * FROM assessments WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    let row = row.ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;
    Ok(Json(row))
}
