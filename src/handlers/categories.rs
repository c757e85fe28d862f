use axum::{Json, extract::State};

use crate::middleware::TriviaPath;
use crate::types::responses::{CategoryList, CategoryQuestions, Envelope};
use crate::{TriviaError, router::TriviaState};

/// GET /categories
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<Envelope<CategoryList>>, TriviaError> {
    let list = state.service.list_categories().await?;
    Ok(Json(Envelope::ok(list)))
}

/// GET /categories/{id}/questions
pub async fn questions_by_category(
    State(state): State<TriviaState>,
    TriviaPath(category_id): TriviaPath<i64>,
) -> Result<Json<Envelope<CategoryQuestions>>, TriviaError> {
    let result = state.service.questions_by_category(category_id).await?;
    Ok(Json(Envelope::ok(result)))
}
