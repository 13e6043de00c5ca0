use std::sync::Arc;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
    value_objects::SessionId,
};

pub struct ResolveSessionUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ResolveSessionUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, token: Option<&str>) -> DomainResult<User> {
        let Some(token) = token else {
            tracing::debug!("request without session cookie");
            return Err(DomainError::Unauthorized);
        };

        let session_id: SessionId = token.parse().map_err(|_| {
            tracing::debug!("malformed session cookie");
            DomainError::Unauthorized
        })?;

        self.user_repo
            .find_by_session(&session_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!("unknown session");
                DomainError::Unauthorized
            })
    }
}
