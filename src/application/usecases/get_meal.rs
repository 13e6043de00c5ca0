use std::sync::Arc;

use uuid::Uuid;

use super::find_owned_meal;
use crate::domain::{errors::DomainResult, models::Meal, repositories::MealRepository};

pub struct GetMealUseCase {
    repo: Arc<dyn MealRepository>,
}

impl GetMealUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, meal_id: Uuid, user_id: Uuid) -> DomainResult<Meal> {
        find_owned_meal(self.repo.as_ref(), meal_id, user_id).await
    }
}
