mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use support::{body_json, test_app_seeded};

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("request built")
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built")
}

#[tokio::test(flavor = "multi_thread")]
async fn select_returns_the_seeded_collection() {
    let app = test_app_seeded(301).await;

    let response =
        app.router.clone().oneshot(get("/api/collections/sonar_fixes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows: Vec<Value> = body_json(response.into_body()).await;
    assert_eq!(rows.len(), 15);
}

#[tokio::test(flavor = "multi_thread")]
async fn sentinel_all_param_is_a_no_op() {
    let app = test_app_seeded(302).await;

    let plain = app.router.clone().oneshot(get("/api/collections/deployments")).await.unwrap();
    let plain_rows: Vec<Value> = body_json(plain.into_body()).await;

    let sentinel = app
        .router
        .clone()
        .oneshot(get("/api/collections/deployments?status=all"))
        .await
        .unwrap();
    let sentinel_rows: Vec<Value> = body_json(sentinel.into_body()).await;

    assert_eq!(plain_rows, sentinel_rows);
}

#[tokio::test(flavor = "multi_thread")]
async fn filters_and_order_map_onto_the_query() {
    let app = test_app_seeded(303).await;

    let response = app
        .router
        .clone()
        .oneshot(get("/api/collections/sprint_items?status=done&order=title.asc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rows: Vec<Value> = body_json(response.into_body()).await;
    for row in &rows {
        assert_eq!(row["status"], "done");
    }

    let titles: Vec<String> =
        rows.iter().map(|row| row["title"].as_str().unwrap_or_default().to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
}

#[tokio::test(flavor = "multi_thread")]
async fn select_projection_passes_through() {
    let app = test_app_seeded(304).await;

    let response =
        app.router.clone().oneshot(get("/api/collections/users?select=id")).await.unwrap();
    let rows: Vec<Value> = body_json(response.into_body()).await;

    assert_eq!(rows.len(), 8);
    for row in &rows {
        let object = row.as_object().expect("row object");
        assert!(object.contains_key("id"));
        assert!(!object.contains_key("name"));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_collection_is_404() {
    let app = test_app_seeded(305).await;

    let response = app.router.clone().oneshot(get("/api/collections/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_record_assigns_an_id_and_persists_it() {
    let app = test_app_seeded(306).await;

    let response = app
        .router
        .clone()
        .oneshot(post(
            "/api/collections/deployments",
            json!({
                "squadNumber": "Squad 5",
                "details": "Deploy v3.0 with new feature X",
                "environment": "prod",
                "date": "2024-07-01",
                "status": "scheduled"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored: Value = body_json(response.into_body()).await;
    assert!(!stored["id"].as_str().unwrap_or_default().is_empty(), "id assigned");

    let response =
        app.router.clone().oneshot(get("/api/collections/deployments")).await.unwrap();
    let rows: Vec<Value> = body_json(response.into_body()).await;
    assert_eq!(rows.len(), 11);
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_record_is_rejected_with_field_errors() {
    let app = test_app_seeded(307).await;

    let response = app
        .router
        .clone()
        .oneshot(post(
            "/api/collections/unit_test_improvements",
            json!({
                "componentName": "",
                "assigneeId": "u1",
                "currentCoverage": 150,
                "improvedCoverage": 80
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = body_json(response.into_body()).await;
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("componentName"));
    assert!(message.contains("currentCoverage"));
}

#[tokio::test(flavor = "multi_thread")]
async fn summary_counters_are_consistent() {
    let app = test_app_seeded(308).await;

    let response = app.router.clone().oneshot(get("/api/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary: Value = body_json(response.into_body()).await;
    let totals = &summary["totals"];

    assert_eq!(totals["totalSonarIssues"], 15);
    assert_eq!(totals["totalMergeRequests"], 20);
    assert_eq!(totals["activeSprints"], 1);
    assert!(totals["completedTasks"].as_u64() <= totals["totalTasks"].as_u64());

    let recent = &summary["recent"];
    assert!(recent["deployments"].as_array().expect("array").len() <= 5);
    assert!(recent["topCoverageImprovements"].as_array().expect("array").len() <= 3);
}
