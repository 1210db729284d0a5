//! Integration tests for calendar HTTP endpoints.
//!
//! Each test drives the full router (middleware included) over an in-memory
//! store bootstrapped with the default seed: teachers Blouin (1) and
//! Bieber (2), subject Web (1), and three TD sessions in ISO week 1.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use agendapp::adapters::{app_router, CalendarHandlers, InMemoryCalendarStore};
use agendapp::application::Bootstrap;
use agendapp::config::{SeedData, ServerConfig};
use agendapp::domain::calendar::Agenda;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn seeded_app() -> Router {
    let store = Arc::new(InMemoryCalendarStore::new());
    let agenda = Agenda::shared();
    Bootstrap::new(store.clone(), store.clone(), store.clone(), agenda.clone())
        .run(Some(&SeedData::default()))
        .await
        .unwrap();

    let handlers = CalendarHandlers::new(store.clone(), store.clone(), store, agenda);
    app_router(handlers, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// Course query
// =============================================================================

#[tokio::test]
async fn week_match_returns_all_seeded_courses() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/cours/1/99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|course| course["week"] == 1 && course["kind"] == "td"));
}

#[tokio::test]
async fn id_is_matched_against_course_teacher_and_subject() {
    let app = seeded_app().await;

    assert_eq!(ids(&get(&app, "/calendar/cours/2/2").await.1), vec![2]);
    assert_eq!(ids(&get(&app, "/calendar/cours/2/1").await.1), vec![1, 2, 3]);
    assert_eq!(ids(&get(&app, "/calendar/cours/2/3").await.1), vec![3]);
}

#[tokio::test]
async fn no_match_is_an_empty_list() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/cours/2/99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn negative_week_matches_nothing_but_id_still_applies() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/cours/-1/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2]);

    let (status, body) = get(&app, "/calendar/cours/-1/99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn non_numeric_week_is_a_bad_request() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/cours/first/1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Teachers
// =============================================================================

#[tokio::test]
async fn teachers_are_listed_and_created() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/ens").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Blouin" }, { "id": 2, "name": "Bieber" }])
    );

    let (status, body) = send(&app, Method::POST, "/calendar/ens/Durand", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 3, "name": "Durand" }));
}

// =============================================================================
// Subjects
// =============================================================================

#[tokio::test]
async fn subject_weight_defaults_to_three() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/calendar/matiere/Algo", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 2, "name": "Algo", "weight": 3 }));

    let (status, body) = send(&app, Method::POST, "/calendar/matiere/Compil?weight=5", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["weight"], 5);

    let (_, body) = get(&app, "/calendar/matiere").await;
    assert_eq!(ids(&body), vec![1, 2, 3]);
}

#[tokio::test]
async fn subject_lookup_by_name() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/matiere/Web").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, body) = get(&app, "/calendar/matiere/Chimie").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    send(&app, Method::POST, "/calendar/matiere/Web", None).await;
    let (status, body) = get(&app, "/calendar/matiere/Web").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "AMBIGUOUS");
}

#[tokio::test]
async fn renamed_subject_shows_in_courses() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::PUT, "/calendar/matiere/1/Web%20avance", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Web avance");

    let (_, courses) = get(&app, "/calendar/cours/1/0").await;
    assert!(courses
        .as_array()
        .unwrap()
        .iter()
        .all(|course| course["subject"]["name"] == "Web avance"));
}

#[tokio::test]
async fn renaming_unknown_or_malformed_subject_fails() {
    let app = seeded_app().await;

    let (status, _) = send(&app, Method::PUT, "/calendar/matiere/42/Nouveau", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/calendar/matiere/abc/Nouveau", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/calendar/matiere/Web").await;
    assert_eq!(body["name"], "Web");
}

#[tokio::test]
async fn referenced_subject_cannot_be_deleted() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/calendar/matiere/1", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(ids(&get(&app, "/calendar/cours/1/0").await.1), vec![1, 2, 3]);
}

#[tokio::test]
async fn deleting_twice_reports_not_found() {
    let app = seeded_app().await;
    send(&app, Method::POST, "/calendar/matiere/Algo", None).await;

    let (status, body) = send(&app, Method::DELETE, "/calendar/matiere/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Algo");

    let (status, _) = send(&app, Method::DELETE, "/calendar/matiere/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Course creation and agenda
// =============================================================================

#[tokio::test]
async fn agenda_lists_seeded_courses_in_order() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/calendar/agenda").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body[0]["start"], "2015-01-01T08:00:00");
    assert_eq!(body[1]["teacher"]["name"], "Bieber");
    assert_eq!(body[2]["duration_minutes"], 60);
}

#[tokio::test]
async fn created_course_joins_agenda_and_queries() {
    let app = seeded_app().await;
    let request = json!({
        "subject_id": 1,
        "teacher_id": 2,
        "start": "2015-01-05T08:00:00",
        "duration_minutes": 90
    });

    let (status, body) = send(&app, Method::POST, "/calendar/cours", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);
    assert_eq!(body["kind"], "lecture");
    assert_eq!(body["week"], 2);

    let (_, agenda) = get(&app, "/calendar/agenda").await;
    assert_eq!(ids(&agenda), vec![1, 2, 3, 4]);

    // week 2 alone, and teacher 2 pulls in course 2 from week 1
    assert_eq!(ids(&get(&app, "/calendar/cours/2/99").await.1), vec![4]);
    assert_eq!(ids(&get(&app, "/calendar/cours/2/2").await.1), vec![2, 4]);
}

#[tokio::test]
async fn course_with_unknown_teacher_is_not_registered() {
    let app = seeded_app().await;
    let request = json!({
        "subject_id": 1,
        "teacher_id": 9,
        "start": "2015-01-05T08:00:00",
        "duration_minutes": 90,
        "kind": "td"
    });

    let (status, body) = send(&app, Method::POST, "/calendar/cours", Some(request)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Teacher not found: 9");

    let (_, agenda) = get(&app, "/calendar/agenda").await;
    assert_eq!(ids(&agenda), vec![1, 2, 3]);
}

#[tokio::test]
async fn course_with_zero_duration_is_rejected() {
    let app = seeded_app().await;
    let request = json!({
        "subject_id": 1,
        "teacher_id": 1,
        "start": "2015-01-05T08:00:00",
        "duration_minutes": 0
    });

    let (status, body) = send(&app, Method::POST, "/calendar/cours", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}
