use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        create_meal::CreateMealUseCase, create_user::CreateUserUseCase,
        delete_meal::DeleteMealUseCase, get_meal::GetMealUseCase,
        get_metrics::GetMetricsUseCase, list_meals::ListMealsUseCase,
        resolve_session::ResolveSessionUseCase, update_meal::UpdateMealUseCase,
    },
    domain::repositories::{MealRepository, UserRepository},
};

#[derive(Clone)]
pub struct ApiState {
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub resolve_session_usecase: Arc<ResolveSessionUseCase>,
    pub create_meal_usecase: Arc<CreateMealUseCase>,
    pub list_meals_usecase: Arc<ListMealsUseCase>,
    pub get_meal_usecase: Arc<GetMealUseCase>,
    pub update_meal_usecase: Arc<UpdateMealUseCase>,
    pub delete_meal_usecase: Arc<DeleteMealUseCase>,
    pub get_metrics_usecase: Arc<GetMetricsUseCase>,
}

impl ApiState {
    pub fn new(user_repo: Arc<dyn UserRepository>, meal_repo: Arc<dyn MealRepository>) -> Self {
        Self {
            create_user_usecase: Arc::new(CreateUserUseCase::new(user_repo.clone())),
            resolve_session_usecase: Arc::new(ResolveSessionUseCase::new(user_repo)),
            create_meal_usecase: Arc::new(CreateMealUseCase::new(meal_repo.clone())),
            list_meals_usecase: Arc::new(ListMealsUseCase::new(meal_repo.clone())),
            get_meal_usecase: Arc::new(GetMealUseCase::new(meal_repo.clone())),
            update_meal_usecase: Arc::new(UpdateMealUseCase::new(meal_repo.clone())),
            delete_meal_usecase: Arc::new(DeleteMealUseCase::new(meal_repo.clone())),
            get_metrics_usecase: Arc::new(GetMetricsUseCase::new(meal_repo)),
        }
    }
}

/// Service-level endpoints that need no state.
pub struct Endpoints;

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
    Meals,
}
