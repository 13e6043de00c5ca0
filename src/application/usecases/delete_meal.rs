use std::sync::Arc;

use uuid::Uuid;

use super::find_owned_meal;
use crate::domain::{
    errors::{DomainError, DomainResult},
    repositories::MealRepository,
};

pub struct DeleteMealUseCase {
    repo: Arc<dyn MealRepository>,
}

impl DeleteMealUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, meal_id: Uuid, user_id: Uuid) -> DomainResult<()> {
        find_owned_meal(self.repo.as_ref(), meal_id, user_id).await?;

        if !self.repo.delete(meal_id).await? {
            return Err(DomainError::NotFound(format!("meal {meal_id}")));
        }

        tracing::info!(%meal_id, %user_id, "meal deleted");
        Ok(())
    }
}
