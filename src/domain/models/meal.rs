use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub in_diet: bool,
    pub created_at: DateTime<Utc>,
}

impl Meal {
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.user_id == *user_id
    }
}

/// Partial update of a meal. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub in_diet: Option<bool>,
}

impl MealChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.in_diet.is_none()
    }

    pub fn apply(&self, meal: &mut Meal) {
        if let Some(name) = &self.name {
            meal.name = name.clone();
        }
        if let Some(description) = &self.description {
            meal.description = description.clone();
        }
        if let Some(in_diet) = self.in_diet {
            meal.in_diet = in_diet;
        }
    }
}
