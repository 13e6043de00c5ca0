use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Meal, MealChanges, User},
    repositories::{MealRepository, UserRepository},
    value_objects::SessionId,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            anyhow::bail!("user {} already exists", user.id);
        }
        if let Some(session_id) = user.session_id {
            if users.values().any(|u| u.session_id == Some(session_id)) {
                anyhow::bail!("session already assigned");
            }
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.session_id.as_ref() == Some(session_id))
            .cloned())
    }
}

/// Keeps meals in insertion order so listings match the Postgres ordering.
#[derive(Default)]
pub struct InMemoryMealRepository {
    meals: Arc<RwLock<Vec<Meal>>>,
}

impl InMemoryMealRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealRepository for InMemoryMealRepository {
    async fn insert(&self, meal: &Meal) -> anyhow::Result<Meal> {
        let mut meals = self.meals.write().await;
        if meals.iter().any(|m| m.id == meal.id) {
            anyhow::bail!("meal {} already exists", meal.id);
        }
        meals.push(meal.clone());
        Ok(meal.clone())
    }

    async fn get(&self, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.iter().find(|m| m.id == meal_id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let meals = self.meals.read().await;
        let mut owned: Vec<Meal> = meals
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        // stable: equal timestamps keep insertion order
        owned.sort_by_key(|m| m.created_at);
        Ok(owned)
    }

    async fn update(&self, meal_id: Uuid, changes: &MealChanges) -> anyhow::Result<Option<Meal>> {
        let mut meals = self.meals.write().await;
        Ok(meals.iter_mut().find(|m| m.id == meal_id).map(|meal| {
            changes.apply(meal);
            meal.clone()
        }))
    }

    async fn delete(&self, meal_id: Uuid) -> anyhow::Result<bool> {
        let mut meals = self.meals.write().await;
        let before = meals.len();
        meals.retain(|m| m.id != meal_id);
        Ok(meals.len() != before)
    }
}
