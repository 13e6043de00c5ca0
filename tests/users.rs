use poem::http::{StatusCode, header};
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn creating_a_user_sets_a_session_cookie() {
    let cli = test_client();

    let resp = cli
        .post("/users")
        .body_json(&json!({ "name": "John Doe" }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);

    let set_cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("sessionId="));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=604800"));

    let json = resp.json().await;
    json.value().object().get("name").assert_string("John Doe");
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let cli = test_client();

    cli.post("/users")
        .body_json(&json!({ "name": "" }))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_require_a_session() {
    let cli = test_client();

    cli.get("/users/metrics")
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let resp = cli
        .get("/users/metrics")
        .header(header::COOKIE, "sessionId=2f1c4d0e-0000-4000-8000-000000000000")
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.assert_json(json!({ "error": "Unauthorized" })).await;
}

#[tokio::test]
async fn metrics_for_a_new_user_are_zero() {
    let cli = test_client();
    let cookie = sign_up(&cli, "John Doe").await;

    let resp = cli
        .get("/users/metrics")
        .header(header::COOKIE, &cookie)
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({
        "totalMeals": 0,
        "totalMealsInDiet": 0,
        "totalMealsNotInDiet": 0,
        "bestSequence": 0,
    }))
    .await;
}

#[tokio::test]
async fn metrics_summarize_the_users_meals() {
    let cli = test_client();
    let cookie = sign_up(&cli, "John Doe").await;
    let other = sign_up(&cli, "Jane Doe").await;

    create_meal(&cli, &cookie, "Bread", false).await;
    create_meal(&cli, &other, "Cake", false).await;
    create_meal(&cli, &cookie, "Pear", true).await;
    create_meal(&cli, &cookie, "Banana", true).await;
    create_meal(&cli, &cookie, "Ice cream", false).await;

    let resp = cli
        .get("/users/metrics")
        .header(header::COOKIE, &cookie)
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.assert_json(json!({
        "totalMeals": 4,
        "totalMealsInDiet": 2,
        "totalMealsNotInDiet": 2,
        "bestSequence": 2,
    }))
    .await;
}
