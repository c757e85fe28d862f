use serde::Serialize;

use crate::db::{Category, Question};

/// Successful response envelope: `{"success": true, ...body}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the whole table, not of the page.
    pub total_questions: i64,
    /// Every category label.
    pub categories: Vec<String>,
    /// Labels of the categories present on this page.
    pub current_category: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// Size of the whole table, not the number of matches.
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `question` is `null` once a quiz round has run out of candidates.
#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: Option<Question>,
}
