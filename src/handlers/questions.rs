use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::middleware::{TriviaJson, TriviaPath};
use crate::service::pagination::Page;
use crate::types::requests::{PageQuery, QuestionsAction, QuestionsPostBody};
use crate::types::responses::{Acknowledgement, Envelope, QuestionPage};
use crate::{TriviaError, router::TriviaState};

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<QuestionPage>>, TriviaError> {
    let page = state.service.list_questions(Page(query.page())).await?;
    Ok(Json(Envelope::ok(page)))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    TriviaPath(id): TriviaPath<i64>,
) -> Result<Json<Envelope<Acknowledgement>>, TriviaError> {
    let ack = state.service.delete_question(id).await?;
    Ok(Json(Envelope::ok(ack)))
}

/// POST /questions: `{searchTerm}` searches, anything else creates.
pub async fn search_or_create(
    State(state): State<TriviaState>,
    TriviaJson(body): TriviaJson<QuestionsPostBody>,
) -> Result<Response, TriviaError> {
    match body.into_action()? {
        QuestionsAction::Search(term) => {
            let results = state.service.search_questions(&term).await?;
            Ok(Json(Envelope::ok(results)).into_response())
        }
        QuestionsAction::Create(new) => {
            let ack = state.service.create_question(new).await?;
            Ok(Json(Envelope::ok(ack)).into_response())
        }
    }
}
