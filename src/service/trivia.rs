use tracing::{debug, info};

use crate::db::{Category, NewQuestion, Question, TriviaStorage};
use crate::error::TriviaError;
use crate::service::pagination::{Page, QUESTIONS_PER_PAGE};
use crate::service::quiz::{pick_unseen, seen_ids};
use crate::types::requests::QuizScope;
use crate::types::responses::{
    Acknowledgement, CategoryList, CategoryQuestions, QuestionPage, QuizQuestion, SearchResults,
};

/// Storage key for a category id received from a client.
///
/// Clients address categories by the same 1-based id the store assigns, so
/// the mapping is the identity; ids below 1 can never name a row.
pub fn category_key(external_id: i64) -> Option<i64> {
    (external_id >= 1).then_some(external_id)
}

/// Every trivia operation, backed by an injected storage handle.
#[derive(Clone)]
pub struct TriviaService {
    storage: TriviaStorage,
}

impl TriviaService {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }

    /// The only place a client-supplied category id becomes a stored category.
    pub async fn resolve_category(&self, external_id: i64) -> Result<Category, TriviaError> {
        let Some(key) = category_key(external_id) else {
            return Err(TriviaError::not_found(format!("category {external_id}")));
        };
        self.storage
            .get_category(key)
            .await?
            .ok_or_else(|| TriviaError::not_found(format!("category {external_id}")))
    }

    pub async fn list_categories(&self) -> Result<CategoryList, TriviaError> {
        let categories = self.storage.list_categories().await?;
        Ok(CategoryList { categories })
    }

    pub async fn list_questions(&self, page: Page) -> Result<QuestionPage, TriviaError> {
        let all = self.storage.list_questions().await?;
        let categories = self.storage.list_categories().await?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("no categories"));
        }

        let Some(window) = page.slice(&all, QUESTIONS_PER_PAGE) else {
            debug!(page = page.0, total = all.len(), "requested page is empty");
            return Err(TriviaError::not_found(format!("page {}", page.0)));
        };

        let current_category = labels_on_page(window, &categories);
        Ok(QuestionPage {
            questions: window.to_vec(),
            total_questions: all.len() as i64,
            categories: categories.into_iter().map(|c| c.kind).collect(),
            current_category,
        })
    }

    pub async fn delete_question(&self, id: i64) -> Result<Acknowledgement, TriviaError> {
        if !self.storage.delete_question(id).await? {
            return Err(TriviaError::not_found(format!("question {id}")));
        }
        info!(id, "question deleted");
        Ok(Acknowledgement::new("item deleted"))
    }

    pub async fn search_questions(&self, term: &str) -> Result<SearchResults, TriviaError> {
        let questions = self.storage.search_questions(term).await?;
        let total_questions = self.storage.count_questions().await?;
        debug!(term, matches = questions.len(), "question search");
        Ok(SearchResults {
            questions,
            total_questions,
            current_category: None,
        })
    }

    pub async fn create_question(&self, new: NewQuestion) -> Result<Acknowledgement, TriviaError> {
        let id = self.storage.insert_question(&new).await?;
        info!(id, category = new.category, "question created");
        Ok(Acknowledgement::new("question added"))
    }

    pub async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<CategoryQuestions, TriviaError> {
        let category = self.resolve_category(category_id).await?;
        let questions = self.storage.questions_in_category(category.id).await?;
        Ok(CategoryQuestions {
            total_questions: questions.len() as i64,
            questions,
            current_category: category.kind,
        })
    }

    /// Draw a random question not yet asked in this round. Previously asked
    /// texts are resolved to candidate ids once, so filtering works on identity.
    pub async fn pick_quiz_question(
        &self,
        previous_questions: &[String],
        scope: QuizScope,
    ) -> Result<QuizQuestion, TriviaError> {
        let candidates = match scope {
            QuizScope::Any => self.storage.list_questions().await?,
            QuizScope::Category(id) => {
                let category = self.resolve_category(id).await?;
                self.storage.questions_in_category(category.id).await?
            }
        };
        let seen = seen_ids(&candidates, previous_questions);

        let question = {
            let mut rng = rand::thread_rng();
            pick_unseen(&candidates, &seen, &mut rng)
        };
        debug!(
            candidates = candidates.len(),
            seen = seen.len(),
            exhausted = question.is_none(),
            "quiz draw"
        );
        Ok(QuizQuestion { question })
    }
}

/// Distinct labels of the categories referenced on a page, in first-seen
/// order. References to unknown categories are skipped.
fn labels_on_page(window: &[Question], categories: &[Category]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for q in window {
        let Some(cat) = categories.iter().find(|c| c.id == q.category) else {
            continue;
        };
        if !labels.contains(&cat.kind) {
            labels.push(cat.kind.clone());
        }
    }
    labels
}
