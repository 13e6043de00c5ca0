use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    models::{Meal, MealChanges, User},
    value_objects::SessionId,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
    async fn find_by_session(&self, session_id: &SessionId) -> anyhow::Result<Option<User>>;
}

#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn insert(&self, meal: &Meal) -> anyhow::Result<Meal>;

    async fn get(&self, meal_id: Uuid) -> anyhow::Result<Option<Meal>>;

    /// Meals of `user_id` in creation order, oldest first.
    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>>;

    async fn update(&self, meal_id: Uuid, changes: &MealChanges) -> anyhow::Result<Option<Meal>>;

    /// Returns `false` when no meal with `meal_id` existed.
    async fn delete(&self, meal_id: Uuid) -> anyhow::Result<bool>;
}
