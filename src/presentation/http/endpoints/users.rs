use std::sync::Arc;

use poem::{Result as PoemResult, web::cookie::CookieJar};
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::create_user::CreateUserRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{map_metrics, map_user},
        requests::CreateUserRequestDto,
        responses::{CreateUserResponse, MetricsDto},
        security::SessionAuth,
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// Creates an anonymous user and starts its session.
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        cookie_jar: &CookieJar,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<CreateUserResponse> {
        let response = self
            .state
            .create_user_usecase
            .execute(CreateUserRequest {
                name: request.0.name,
            })
            .await?;

        SessionAuth::issue(cookie_jar, &response.session_id);

        Ok(CreateUserResponse::Created(Json(map_user(&response.user))))
    }

    #[oai(path = "/users/metrics", method = "get", tag = EndpointsTags::Users)]
    pub async fn metrics(&self, cookie_jar: &CookieJar) -> PoemResult<Json<MetricsDto>> {
        let user = SessionAuth::from_cookies(cookie_jar, &self.state).await?;

        let metrics = self
            .state
            .get_metrics_usecase
            .execute(user.id)
            .await?;

        Ok(Json(map_metrics(&metrics)))
    }
}
