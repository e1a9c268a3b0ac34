//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question, Category, NewQuestion)
//! - Domain value objects (Difficulty, CategoryFilter, QuizQuery, Page, SearchQuery)
//! - Request validation (untrusted JSON to commands)
//! - Domain services (quiz question selection)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod validation;
pub mod value_objects;
