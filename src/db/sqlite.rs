use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{SEED_CATEGORIES, SEED_QUESTIONS, SQLITE_INIT};
use crate::error::TriviaError;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the standard categories and sample questions when no category
    /// exists yet. Returns whether anything was written.
    pub async fn seed_defaults(&self) -> Result<bool, TriviaError> {
        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            debug!(existing, "categories present; skipping seed");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for label in SEED_CATEGORIES {
            sqlx::query(r#"INSERT INTO categories ("type") VALUES (?)"#)
                .bind(label)
                .execute(&mut *tx)
                .await?;
        }
        for (question, answer, category, difficulty) in SEED_QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
            )
            .bind(question)
            .bind(answer)
            .bind(category)
            .bind(difficulty)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!(
            categories = SEED_CATEGORIES.len(),
            questions = SEED_QUESTIONS.len(),
            "seeded empty trivia store"
        );
        Ok(true)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, TriviaError> {
        let row = sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Every question in insertion order.
    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count_questions(&self) -> Result<i64, TriviaError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Questions whose text contains `term`, ignoring ASCII case.
    /// `%` and `_` in the term match literally.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let sql = format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions WHERE question LIKE ? ESCAPE '\' ORDER BY id"
        );
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a question and return the assigned id.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, TriviaError> {
        let res = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(res.last_insert_rowid())
    }

    /// Delete by id. Returns `false` when no row had that id.
    pub async fn delete_question(&self, id: i64) -> Result<bool, TriviaError> {
        let res = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Build a LIKE pattern matching `term` as a literal substring.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
