use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::Meal,
    repositories::MealRepository,
};

pub struct CreateMealUseCase {
    repo: Arc<dyn MealRepository>,
}

pub struct CreateMealRequest {
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub in_diet: bool,
}

impl CreateMealUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateMealRequest) -> DomainResult<Meal> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }

        let meal = Meal {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            name: name.to_string(),
            description: request.description,
            in_diet: request.in_diet,
            created_at: Utc::now(),
        };

        let meal = self.repo.insert(&meal).await?;
        tracing::info!(meal_id = %meal.id, user_id = %meal.user_id, "meal created");
        Ok(meal)
    }
}
