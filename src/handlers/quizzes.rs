use axum::{Json, extract::State};

use crate::middleware::TriviaJson;
use crate::types::requests::QuizRequest;
use crate::types::responses::{Envelope, QuizQuestion};
use crate::{TriviaError, router::TriviaState};

/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<TriviaState>,
    TriviaJson(req): TriviaJson<QuizRequest>,
) -> Result<Json<Envelope<QuizQuestion>>, TriviaError> {
    let category = req
        .quiz_category
        .ok_or(TriviaError::MissingField("quiz_category"))?;
    let scope = category.scope()?;
    let picked = state
        .service
        .pick_quiz_question(&req.previous_questions, scope)
        .await?;
    Ok(Json(Envelope::ok(picked)))
}
