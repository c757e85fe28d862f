use serde::Deserialize;

use crate::db::NewQuestion;
use crate::error::TriviaError;

/// Integer field that clients send either as a JSON number or as a numeric
/// string (form `<select>` values arrive as strings).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Text(String),
}

impl LooseInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LooseInt::Int(n) => Some(*n),
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }

    fn require(&self, field: &'static str) -> Result<i64, TriviaError> {
        self.as_i64()
            .ok_or_else(|| TriviaError::BadRequest(format!("`{field}` must be an integer")))
    }
}

/// `GET /questions?page=N`. Kept as text so a malformed value falls back to
/// the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Negative or non-numeric values read as page 0; numbers past `u32::MAX`
    /// saturate so they still name a page past the end.
    pub fn page(&self) -> u32 {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return 0;
        };
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return 0;
        }
        digits
            .parse::<u64>()
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(u32::MAX)
    }
}

/// Body of `POST /questions`, which either searches or creates.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum QuestionsAction {
    Search(String),
    Create(NewQuestion),
}

impl QuestionsPostBody {
    /// A present `searchTerm` selects search; otherwise every creation field
    /// is required.
    pub fn into_action(self) -> Result<QuestionsAction, TriviaError> {
        if let Some(term) = self.search_term {
            return Ok(QuestionsAction::Search(term));
        }
        let question = self.question.ok_or(TriviaError::MissingField("question"))?;
        let answer = self.answer.ok_or(TriviaError::MissingField("answer"))?;
        let difficulty = self
            .difficulty
            .ok_or(TriviaError::MissingField("difficulty"))?
            .require("difficulty")?;
        let category = self
            .category
            .ok_or(TriviaError::MissingField("category"))?
            .require("category")?;
        Ok(QuestionsAction::Create(NewQuestion::new(
            question, answer, category, difficulty,
        )))
    }
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<String>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: LooseInt,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    Category(i64),
}

impl QuizCategory {
    /// Id `0`, id `"All"`, or type `"all"`/`"click"` mean every category.
    pub fn scope(&self) -> Result<QuizScope, TriviaError> {
        let any_type = self
            .kind
            .as_deref()
            .map(|k| k.eq_ignore_ascii_case("all") || k.eq_ignore_ascii_case("click"))
            .unwrap_or(false);
        if any_type {
            return Ok(QuizScope::Any);
        }
        match &self.id {
            LooseInt::Text(s) if s.trim().eq_ignore_ascii_case("all") => Ok(QuizScope::Any),
            id => match id.require("quiz_category.id")? {
                0 => Ok(QuizScope::Any),
                n => Ok(QuizScope::Category(n)),
            },
        }
    }
}
