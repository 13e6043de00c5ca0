use std::sync::Arc;

use poem::{Result as PoemResult, web::cookie::CookieJar};
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::{create_meal::CreateMealRequest, update_meal::UpdateMealRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_meal,
        requests::{CreateMealRequestDto, UpdateMealRequestDto},
        responses::{DeleteMealResponse, MealEnvelopeDto, MealListDto},
        security::SessionAuth,
    },
};

#[derive(Clone)]
pub struct MealsEndpoints {
    state: Arc<ApiState>,
}

impl MealsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl MealsEndpoints {
    #[oai(path = "/meals", method = "get", tag = EndpointsTags::Meals)]
    pub async fn list_meals(&self, cookie_jar: &CookieJar) -> PoemResult<Json<MealListDto>> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;

        let meals = self.state.list_meals_usecase.execute(user.id).await?;

        Ok(Json(MealListDto {
            meals: meals.iter().map(map_meal).collect(),
        }))
    }

    #[oai(path = "/meals/:meal_id", method = "get", tag = EndpointsTags::Meals)]
    pub async fn get_meal(
        &self,
        cookie_jar: &CookieJar,
        meal_id: Path<Uuid>,
    ) -> PoemResult<Json<MealEnvelopeDto>> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;

        let meal = self
            .state
            .get_meal_usecase
            .execute(meal_id.0, user.id)
            .await?;

        Ok(Json(MealEnvelopeDto {
            meal: map_meal(&meal),
        }))
    }

    #[oai(path = "/meals", method = "post", tag = EndpointsTags::Meals)]
    pub async fn create_meal(
        &self,
        cookie_jar: &CookieJar,
        request: Json<CreateMealRequestDto>,
    ) -> PoemResult<Json<MealEnvelopeDto>> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;
        let request = request.0;

        let meal = self
            .state
            .create_meal_usecase
            .execute(CreateMealRequest {
                user_id: user.id,
                name: request.name,
                description: request.description,
                in_diet: request.in_diet,
            })
            .await?;

        Ok(Json(MealEnvelopeDto {
            meal: map_meal(&meal),
        }))
    }

    #[oai(path = "/meals/:meal_id", method = "put", tag = EndpointsTags::Meals)]
    pub async fn update_meal(
        &self,
        cookie_jar: &CookieJar,
        meal_id: Path<Uuid>,
        request: Json<UpdateMealRequestDto>,
    ) -> PoemResult<Json<MealEnvelopeDto>> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;

        let meal = self
            .state
            .update_meal_usecase
            .execute(UpdateMealRequest {
                user_id: user.id,
                meal_id: meal_id.0,
                changes: request.0.into(),
            })
            .await?;

        Ok(Json(MealEnvelopeDto {
            meal: map_meal(&meal),
        }))
    }

    #[oai(path = "/meals/:meal_id", method = "delete", tag = EndpointsTags::Meals)]
    pub async fn delete_meal(
        &self,
        cookie_jar: &CookieJar,
        meal_id: Path<Uuid>,
    ) -> PoemResult<DeleteMealResponse> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;

        self.state
            .delete_meal_usecase
            .execute(meal_id.0, user.id)
            .await?;

        Ok(DeleteMealResponse::Deleted)
    }
}
