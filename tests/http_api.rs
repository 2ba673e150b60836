// tests/http_api.rs

mod common;

use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use jobsort::config::ServiceSection;
use jobsort::server::middleware::REQUEST_ID_HEADER;
use jobsort::server::{AppState, router};
use jobsort_test_utils::builders::{JobBuilder, TaskBuilder};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    common::init_tracing();
    router(
        AppState {
            service: ServiceSection::default(),
        },
        Duration::from_secs(5),
    )
}

fn post_job(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn sample_job() -> String {
    JobBuilder::new()
        .with_task(TaskBuilder::new("task-1").command("touch /tmp/file1").build())
        .with_task(
            TaskBuilder::new("task-2")
                .command("cat /tmp/file1")
                .requires("task-3")
                .build(),
        )
        .with_task(
            TaskBuilder::new("task-3")
                .command("echo 'Hello World!' > /tmp/file1")
                .requires("task-1")
                .build(),
        )
        .with_task(
            TaskBuilder::new("task-4")
                .command("rm /tmp/file1")
                .requires("task-2")
                .requires("task-3")
                .build(),
        )
        .to_json()
}

#[tokio::test]
async fn test_json_mode_returns_ordered_commands() {
    common::with_timeout(async {
        let response = app().oneshot(post_job("/job", sample_job())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["task-1", "task-3", "task-2", "task-4"]);
        assert_eq!(body[0]["command"], "touch /tmp/file1");
    })
    .await;
}

#[tokio::test]
async fn test_bash_mode_returns_script() {
    common::with_timeout(async {
        let response = app()
            .oneshot(post_job("/job?mode=bash", sample_job()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "#!/usr/bin/env bash\ntouch /tmp/file1\necho 'Hello World!' > /tmp/file1\ncat /tmp/file1\nrm /tmp/file1"
        );
    })
    .await;
}

#[tokio::test]
async fn test_empty_job_in_bash_mode_is_header_only() {
    common::with_timeout(async {
        let response = app()
            .oneshot(post_job("/job?mode=BASH", r#"{"tasks":[]}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "#!/usr/bin/env bash");
    })
    .await;
}

#[tokio::test]
async fn test_cycle_is_bad_request() {
    common::with_timeout(async {
        let job = JobBuilder::new()
            .with_task(TaskBuilder::new("t1").requires("t1").build())
            .to_json();
        let response = app().oneshot(post_job("/job", job)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["Category"], "cycle");
        assert!(body["Message"].as_str().unwrap().contains("t1"));
    })
    .await;
}

#[tokio::test]
async fn test_unknown_dependency_is_bad_request() {
    common::with_timeout(async {
        let job = JobBuilder::new()
            .with_task(TaskBuilder::new("deploy").requires("build").build())
            .to_json();
        let response = app().oneshot(post_job("/job", job)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["Category"], "vertex_not_found");
        assert!(body["Message"].as_str().unwrap().contains("build"));
    })
    .await;
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    common::with_timeout(async {
        let response = app()
            .oneshot(post_job("/job", "not json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["Category"], "invalid_job");
    })
    .await;
}

#[tokio::test]
async fn test_get_on_job_is_method_not_allowed() {
    common::with_timeout(async {
        let request = Request::builder()
            .method("GET")
            .uri("/job")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    })
    .await;
}

#[tokio::test]
async fn test_health_reports_ok() {
    common::with_timeout(async {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "env");
    })
    .await;
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    common::with_timeout(async {
        let app = app();
        let first = app
            .clone()
            .oneshot(post_job("/job", r#"{"tasks":[]}"#.to_string()))
            .await
            .unwrap();
        let second = app
            .oneshot(post_job("/job", r#"{"tasks":[]}"#.to_string()))
            .await
            .unwrap();

        assert_ne!(
            first.headers()[REQUEST_ID_HEADER],
            second.headers()[REQUEST_ID_HEADER]
        );
    })
    .await;
}

#[tokio::test]
async fn test_slow_ordering_times_out() {
    common::with_timeout(async {
        common::init_tracing();
        let app = router(
            AppState {
                service: ServiceSection::default(),
            },
            Duration::from_millis(1),
        );
        let job = JobBuilder::new().with_chain("step", 20_000).to_json();

        let response = app.oneshot(post_job("/job", job)).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    })
    .await;
}
