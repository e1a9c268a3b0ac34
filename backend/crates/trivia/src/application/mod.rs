//! Application Layer - Use Cases
//!
//! This layer orchestrates validation, domain logic and the stores.
//! Contains use case implementations.

pub mod category_questions;
pub mod config;
pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod next_quiz_question;
pub mod search_questions;

pub use category_questions::{CategoryQuestionsOutput, CategoryQuestionsUseCase};
pub use create_question::CreateQuestionUseCase;
pub use delete_question::DeleteQuestionUseCase;
pub use list_categories::ListCategoriesUseCase;
pub use list_questions::{ListQuestionsOutput, ListQuestionsUseCase};
pub use next_quiz_question::NextQuizQuestionUseCase;
pub use search_questions::SearchQuestionsUseCase;
