use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// A question that has not been written yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_serializes_label_as_type() {
        let cat = Category {
            id: 2,
            kind: "Art".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&cat).unwrap(),
            json!({"id": 2, "type": "Art"})
        );
    }

    #[test]
    fn question_serializes_flat() {
        let q = NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", 1, 3).with_id(21);
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({
                "id": 21,
                "question": "Who discovered penicillin?",
                "answer": "Alexander Fleming",
                "category": 1,
                "difficulty": 3
            })
        );
    }
}
