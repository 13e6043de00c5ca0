pub mod create_meal;
pub mod create_user;
pub mod delete_meal;
pub mod get_meal;
pub mod get_metrics;
pub mod list_meals;
pub mod resolve_session;
pub mod update_meal;

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::Meal,
    repositories::MealRepository,
};

/// Loads a meal and checks that `user_id` owns it.
pub(crate) async fn find_owned_meal(
    repo: &dyn MealRepository,
    meal_id: Uuid,
    user_id: Uuid,
) -> DomainResult<Meal> {
    let meal = repo
        .get(meal_id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("meal {meal_id}")))?;

    if !meal.is_owned_by(&user_id) {
        return Err(DomainError::Forbidden(
            "meal does not belong to user".to_string(),
        ));
    }

    Ok(meal)
}
