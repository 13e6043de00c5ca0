use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

#[derive(Object)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    /// The session cookie is set on this response.
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(Object)]
pub struct MealDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub in_diet: bool,
    pub created_at: String,
    pub user_id: Uuid,
}

#[derive(Object)]
pub struct MealEnvelopeDto {
    pub meal: MealDto,
}

#[derive(Object)]
pub struct MealListDto {
    pub meals: Vec<MealDto>,
}

#[derive(ApiResponse)]
pub enum DeleteMealResponse {
    #[oai(status = 201)]
    Deleted,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct MetricsDto {
    pub total_meals: u64,
    pub total_meals_in_diet: u64,
    pub total_meals_not_in_diet: u64,
    pub best_sequence: u64,
}
