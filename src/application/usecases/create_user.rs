use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
    value_objects::SessionId,
};

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
}

pub struct CreateUserResponse {
    pub user: User,
    pub session_id: SessionId,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> DomainResult<CreateUserResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("name must not be empty".to_string()));
        }

        let session_id = SessionId::generate();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            session_id: Some(session_id),
        };

        self.user_repo.insert(&user).await?;
        tracing::info!(user_id = %user.id, "user created");

        Ok(CreateUserResponse { user, session_id })
    }
}
