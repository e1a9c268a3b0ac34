//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the wire format the trivia frontend expects, which mixes
//! snake_case and camelCase.

use std::collections::BTreeMap;

use kernel::id::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, Question};

/// Question as rendered in every response
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty.level(),
        }
    }
}

/// Category as a standalone object
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            label: c.label,
        }
    }
}

/// Categories keyed by id, e.g. `{"1": "Science"}`
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

pub fn question_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

// ============================================================================
// Query strings
// ============================================================================

/// Query for GET /questions; unparseable pages fall back to the first page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Query for POST /questions/search; unparseable categories are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
}

impl SearchParams {
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category
            .as_deref()
            .and_then(|s| s.trim().parse::<i32>().ok())
            .map(CategoryId::new)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response for GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Response for GET /questions
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<CategoryDto>,
}

/// Response for DELETE /questions/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// Response for POST /questions
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Response for POST /questions/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Response for GET /categories/{id}/questions
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: CategoryDto,
}

/// Response for POST /quizzes; `question` is null once the quiz is exhausted
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}
