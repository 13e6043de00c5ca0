pub mod endpoints;
pub mod errors;
pub mod mappers;
pub mod requests;
pub mod responses;
pub mod security;

use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route,
    middleware::{CookieJarManager, Tracing},
};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    meals::MealsEndpoints,
    root::{ApiState, Endpoints},
    users::UsersEndpoints,
};

/// Builds the HTTP application: API routes at the root, Swagger UI under `/docs`.
pub fn app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            Endpoints,
            UsersEndpoints::new(state.clone()),
            MealsEndpoints::new(state),
        ),
        "Daily Diet API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/docs", ui)
        .nest("/", api_service)
        .with(CookieJarManager::new())
        .with(Tracing)
}
