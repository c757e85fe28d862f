use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::TriviaStorage;
use crate::handlers::{self, categories, questions, quizzes};
use crate::service::TriviaService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct TriviaState {
    pub service: TriviaService,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self {
            service: TriviaService::new(storage),
        }
    }
}

pub fn trivia_router(state: TriviaState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::search_or_create),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(handlers::not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
