use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::metrics,
    domain::{errors::DomainResult, models::DietMetrics, repositories::MealRepository},
};

pub struct GetMetricsUseCase {
    repo: Arc<dyn MealRepository>,
}

impl GetMetricsUseCase {
    pub fn new(repo: Arc<dyn MealRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> DomainResult<DietMetrics> {
        let meals = self.repo.list_by_user(user_id).await?;
        Ok(metrics::summarize(&meals))
    }
}
