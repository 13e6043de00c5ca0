#![allow(dead_code)]

use std::sync::Arc;

use daily_diet::{
    infrastructure::repositories::in_memory::{InMemoryMealRepository, InMemoryUserRepository},
    presentation::http::{app, endpoints::root::ApiState},
};
use poem::{
    Endpoint,
    http::{StatusCode, header},
    test::TestClient,
};
use serde_json::json;

pub fn test_client() -> TestClient<impl Endpoint> {
    let state = Arc::new(ApiState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryMealRepository::new()),
    ));
    TestClient::new(app(state, "http://localhost:3333".to_string()))
}

/// Creates a user and returns the `Cookie` header value for its session.
pub async fn sign_up<E: Endpoint>(cli: &TestClient<E>, name: &str) -> String {
    let resp = cli
        .post("/users")
        .body_json(&json!({ "name": name }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let set_cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("session cookie should be set")
        .to_string();

    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .trim()
        .to_string()
}

/// Creates a meal under `cookie` and returns its id.
pub async fn create_meal<E: Endpoint>(
    cli: &TestClient<E>,
    cookie: &str,
    name: &str,
    in_diet: bool,
) -> String {
    let resp = cli
        .post("/meals")
        .header(header::COOKIE, cookie)
        .body_json(&json!({
            "name": name,
            "description": format!("{name} description"),
            "inDiet": in_diet,
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    resp.json()
        .await
        .value()
        .object()
        .get("meal")
        .object()
        .get("id")
        .string()
        .to_string()
}
