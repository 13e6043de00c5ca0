use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::Meal, repositories::MealRepository};

pub struct ListMealsUseCase {
    repo: Arc<dyn MealRepository>,
}

impl ListMealsUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> DomainResult<Vec<Meal>> {
        Ok(self.repo.list_by_user(user_id).await?)
    }
}
