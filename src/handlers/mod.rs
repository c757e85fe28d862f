pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::error::TriviaError;

/// Any path no route matched.
pub async fn not_found_handler() -> TriviaError {
    TriviaError::not_found("route")
}
