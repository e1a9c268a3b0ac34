//! PostgreSQL Repository Implementations

use std::collections::HashSet;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_objects::{CategoryFilter, Difficulty};
use crate::error::{TriviaError, TriviaResult};
use kernel::id::{CategoryId, QuestionId};
use sqlx::PgPool;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTriviaRepository {
    pool: PgPool,
}

impl PgTriviaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Row counts, logged at startup
    pub async fn counts(&self) -> TriviaResult<(i64, i64)> {
        let categories = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        let questions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok((categories, questions))
    }
}

impl CategoryRepository for PgTriviaRepository {
    async fn list_all(&self) -> TriviaResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> TriviaResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(CategoryRow::into_category))
    }
}

impl QuestionRepository for PgTriviaRepository {
    async fn fetch_page(&self, offset: i64, limit: i64) -> TriviaResult<(Vec<Question>, i64)> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok((QuestionRow::into_questions(rows)?, total))
    }

    async fn fetch_eligible(
        &self,
        filter: CategoryFilter,
        exclude: &HashSet<QuestionId>,
    ) -> TriviaResult<Vec<Question>> {
        let excluded: Vec<i32> = exclude.iter().map(QuestionId::get).collect();

        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE ($1::INT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#
        ))
        .bind(filter.category_id().map(|c| c.get()))
        .bind(&excluded)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            eligible = rows.len(),
            excluded = excluded.len(),
            "Fetched eligible quiz questions"
        );

        QuestionRow::into_questions(rows)
    }

    async fn insert(&self, question: &NewQuestion) -> TriviaResult<Question> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.get())
        .bind(i32::from(question.difficulty))
        .fetch_one(&self.pool)
        .await?;

        Ok(question.clone().into_question(QuestionId::new(id)))
    }

    async fn delete(&self, id: QuestionId) -> TriviaResult<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn search(&self, term: &str, category: Option<CategoryId>) -> TriviaResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS}
            FROM questions
            WHERE question ILIKE $1
              AND ($2::INT IS NULL OR category = $2)
            ORDER BY id
            "#
        ))
        .bind(pattern)
        .bind(category.map(|c| c.get()))
        .fetch_all(&self.pool)
        .await?;

        QuestionRow::into_questions(rows)
    }

    async fn find_by_category(&self, category: CategoryId) -> TriviaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category.get())
        .fetch_all(&self.pool)
        .await?;

        QuestionRow::into_questions(rows)
    }
}

/// Escape LIKE wildcards so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    #[sqlx(rename = "type")]
    label: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category::new(CategoryId::new(self.id), self.label)
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl QuestionRow {
    fn into_question(self) -> TriviaResult<Question> {
        let difficulty = Difficulty::new(i64::from(self.difficulty)).ok_or_else(|| {
            TriviaError::Internal(format!(
                "question {} has out-of-range difficulty {}",
                self.id, self.difficulty
            ))
        })?;

        Ok(Question {
            id: QuestionId::new(self.id),
            question: self.question,
            answer: self.answer,
            category: CategoryId::new(self.category),
            difficulty,
        })
    }

    fn into_questions(rows: Vec<Self>) -> TriviaResult<Vec<Question>> {
        rows.into_iter().map(Self::into_question).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
