use crate::{
    domain::models::{DietMetrics, Meal, MealChanges, User},
    presentation::http::{
        requests::UpdateMealRequestDto,
        responses::{MealDto, MetricsDto, UserDto},
    },
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

pub fn map_meal(meal: &Meal) -> MealDto {
    MealDto {
        id: meal.id,
        name: meal.name.clone(),
        description: meal.description.clone(),
        in_diet: meal.in_diet,
        created_at: meal.created_at.to_rfc3339(),
        user_id: meal.user_id,
    }
}

pub fn map_metrics(metrics: &DietMetrics) -> MetricsDto {
    MetricsDto {
        total_meals: metrics.total_meals,
        total_meals_in_diet: metrics.total_meals_in_diet,
        total_meals_not_in_diet: metrics.total_meals_not_in_diet,
        best_sequence: metrics.best_sequence,
    }
}

impl From<UpdateMealRequestDto> for MealChanges {
    fn from(value: UpdateMealRequestDto) -> Self {
        Self {
            name: value.name,
            description: value.description,
            in_diet: value.in_diet,
        }
    }
}
