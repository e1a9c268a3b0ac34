//! Application Configuration
//!
//! Configuration for the trivia application layer.

/// Trivia application configuration
#[derive(Debug, Clone)]
pub struct TriviaConfig {
    /// Page size for `GET /questions`
    pub questions_per_page: u32,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            questions_per_page: 10,
        }
    }
}

impl TriviaConfig {
    pub fn page_limit(&self) -> i64 {
        i64::from(self.questions_per_page)
    }
}
