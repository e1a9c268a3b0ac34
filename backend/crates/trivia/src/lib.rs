//! Trivia Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, request validation, quiz selection, repository traits
//! - `application/` - Use cases
//! - `infra/` - Store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Quiz Model
//! - The server keeps no quiz session state; clients send the ids they have seen
//! - The store computes the eligible set, the selection engine draws uniformly from it
//! - An exhausted eligible set is a normal outcome (`question: null`), not an error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TriviaConfig;
pub use error::{TriviaError, TriviaResult};
pub use infra::memory::InMemoryTriviaRepository;
pub use infra::postgres::PgTriviaRepository;
pub use presentation::router::{trivia_router, trivia_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod store {
    pub use crate::infra::postgres::PgTriviaRepository as TriviaStore;
}
