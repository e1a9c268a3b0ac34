//! List Categories Use Case

use crate::domain::entities::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::{TriviaError, TriviaResult};
use std::sync::Arc;

/// List Categories Use Case
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    /// All categories; a store without categories is treated as not found
    pub async fn execute(&self) -> TriviaResult<Vec<Category>> {
        let categories = self.category_repo.list_all().await?;
        if categories.is_empty() {
            return Err(TriviaError::NoCategories);
        }
        Ok(categories)
    }
}
