use std::sync::Arc;

use uuid::Uuid;

use super::find_owned_meal;
use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{Meal, MealChanges},
    repositories::MealRepository,
};

pub struct UpdateMealUseCase {
    repo: Arc<dyn MealRepository>,
}

pub struct UpdateMealRequest {
    pub user_id: Uuid,
    pub meal_id: Uuid,
    pub changes: MealChanges,
}

impl UpdateMealUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateMealRequest) -> DomainResult<Meal> {
        let meal = find_owned_meal(self.repo.as_ref(), request.meal_id, request.user_id).await?;

        let mut changes = request.changes;
        if let Some(name) = changes.name.as_mut() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(DomainError::Validation("name must not be empty".to_string()));
            }
            *name = trimmed.to_string();
        }
        if changes.is_empty() {
            return Ok(meal);
        }

        // The meal may have been deleted between the ownership check and the write.
        self.repo
            .update(request.meal_id, &changes)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("meal {}", request.meal_id)))
    }
}
