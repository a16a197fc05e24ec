#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fitplan::handlers::{auth, best_scores, history, home, proxy, workout};
use fitplan::models::ActiveSessions;
use fitplan::routes;
use fitplan::session::SessionKey;
use fitplan::store::StoreClient;

pub struct TestApp {
    pub router: Router,
    pub sessions: ActiveSessions,
}

pub fn create_test_app(store_url: &str) -> TestApp {
    let http = reqwest::Client::new();
    let store = StoreClient::new(http.clone(), store_url);
    let sessions = ActiveSessions::new();

    let router = routes::create_router(
        home::HomeState {
            store: store.clone(),
        },
        workout::WorkoutState {
            store: store.clone(),
            sessions: sessions.clone(),
        },
        history::HistoryState {
            store: store.clone(),
        },
        best_scores::BestScoresState { store },
        proxy::ProxyState {
            http,
            store_url: store_url.to_string(),
        },
        auth::AuthState {
            auth_url: "/auth/callback".to_string(),
        },
        SessionKey::generate(),
    );

    TestApp { router, sessions }
}

/// Signs in through the callback endpoint and returns the `name=value`
/// session cookie for use in a Cookie header.
pub async fn signin_cookie(router: &Router) -> String {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/auth/callback?name=Test%20User&email=test%40example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap_or("").to_string()
}

pub async fn get_page(router: &Router, uri: &str, cookie: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post(router: &Router, uri: &str, cookie: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(router: &Router, uri: &str, cookie: &str, form: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

// Mock store helpers

pub async fn mock_action(server: &MockServer, action: &str, response: Value) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("action", action))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_store_failure(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

// Wire-format fixtures

pub fn wire_plan(id: &str, name: &str, active: bool, exercises: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} training block"),
        "exercises": exercises,
        "frequency": "3x / week",
        "isActive": active,
    })
}

pub fn wire_plan_exercise(exercise_id: &str, target_sets: i32) -> Value {
    json!({
        "exerciseId": exercise_id,
        "targetSets": target_sets,
        "targetReps": "8-12",
        "restTime": 90,
    })
}

pub fn wire_exercise(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "imageUrl": "",
        "category": "strength",
    })
}

#[allow(clippy::too_many_arguments)]
pub fn wire_log(
    id: &str,
    date: &str,
    exercise_id: &str,
    exercise_name: &str,
    weight: f64,
    reps: i32,
    sets: i32,
    plan_name: &str,
) -> Value {
    json!({
        "id": id,
        "date": date,
        "exerciseId": exercise_id,
        "exerciseName": exercise_name,
        "weight": weight,
        "reps": reps,
        "sets": sets,
        "planName": plan_name,
    })
}
