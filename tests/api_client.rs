//! API client integration tests against an in-process mock backend.
//!
//! The mock records every request (method, path, JSON body) so tests can
//! assert the exact wire traffic, and serves canned goal JSON for reads.

use std::net::TcpListener as StdTcpListener;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use goal_getter_ui::api::{ApiClient, ApiError, GoalPatch, NewGoal, TaskPatch};
use goal_getter_ui::models::GoalStatus;

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Recorded>>>;

fn record(log: &Log, method: &str, path: String, body: Option<Value>) {
    log.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path,
        body,
    });
}

fn sample_goal(id: u32) -> Value {
    json!({
        "id": id,
        "title": "Run a marathon",
        "description": "26.2 miles",
        "plan": null,
        "categoryId": 1,
        "category": "Fitness",
        "targetDate": "2030-06-01T00:00:00",
        "status": "InProgress",
        "createdAt": "2024-01-02T10:00:00",
        "updatedAt": null,
        "tasks": [
            {
                "id": 12,
                "goalId": id,
                "description": "Buy running shoes",
                "isCompleted": false,
                "createdAt": "2024-01-02T10:00:00",
                "updatedAt": null
            }
        ],
        "progress": 0.0,
        "totalTasks": 1,
        "completedTasks": 0
    })
}

/// Start a recording mock backend, returning its base URL and the log.
async fn spawn_mock_server() -> (String, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/goals",
            get(|State(log): State<Log>| async move {
                record(&log, "GET", "/api/goals".to_string(), None);
                Json(json!([sample_goal(5)]))
            })
            .post(
                |State(log): State<Log>, Json(body): Json<Value>| async move {
                    record(&log, "POST", "/api/goals".to_string(), Some(body));
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/api/goals/:id",
            get(|State(log): State<Log>, Path(id): Path<u32>| async move {
                record(&log, "GET", format!("/api/goals/{id}"), None);
                Json(sample_goal(id))
            })
            .put(
                |State(log): State<Log>, Path(id): Path<u32>, Json(body): Json<Value>| async move {
                    record(&log, "PUT", format!("/api/goals/{id}"), Some(body));
                    StatusCode::NO_CONTENT
                },
            )
            .delete(|State(log): State<Log>, Path(id): Path<u32>| async move {
                record(&log, "DELETE", format!("/api/goals/{id}"), None);
                StatusCode::NO_CONTENT
            }),
        )
        .route(
            "/api/goals/:id/tasks",
            post(
                |State(log): State<Log>, Path(id): Path<u32>, Json(body): Json<Value>| async move {
                    record(&log, "POST", format!("/api/goals/{id}/tasks"), Some(body));
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/api/goals/:id/tasks/:task_id",
            put(
                |State(log): State<Log>,
                 Path((id, task_id)): Path<(u32, u32)>,
                 Json(body): Json<Value>| async move {
                    record(
                        &log,
                        "PUT",
                        format!("/api/goals/{id}/tasks/{task_id}"),
                        Some(body),
                    );
                    StatusCode::NO_CONTENT
                },
            )
            .delete(
                |State(log): State<Log>, Path((id, task_id)): Path<(u32, u32)>| async move {
                    record(&log, "DELETE", format!("/api/goals/{id}/tasks/{task_id}"), None);
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/api/categories",
            get(|State(log): State<Log>| async move {
                record(&log, "GET", "/api/categories".to_string(), None);
                Json(json!([{ "id": 9, "name": "Remote Category" }]))
            }),
        )
        .route(
            "/api/summary",
            get(|State(log): State<Log>| async move {
                record(&log, "GET", "/api/summary".to_string(), None);
                Json(json!({
                    "goalsCompleted": 12,
                    "goalsInProgress": 3,
                    "accountabilityStreak": 7,
                    "overallProgress": 80.0,
                    "userName": "Evelyn"
                }))
            }),
        )
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), log)
}

/// A server that answers 500 to everything.
async fn spawn_failing_server() -> String {
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failing server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL with nothing listening behind it.
fn unreachable_base_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn degrading_reads_default_when_backend_is_unreachable() {
    let client = ApiClient::new(unreachable_base_url());

    assert!(client.get_all_goals().await.is_empty());

    let categories = client.get_all_categories().await;
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].name.as_deref(), Some("Fitness"));

    let summary = client.get_dashboard_summary().await;
    assert_eq!(summary.goals_completed, 0);
    assert_eq!(summary.user_name, "User");
}

#[tokio::test]
async fn get_goal_by_id_rejects_when_backend_is_unreachable() {
    let client = ApiClient::new(unreachable_base_url());
    let result = client.get_goal_by_id(5).await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn degrading_reads_default_on_http_errors_too() {
    let client = ApiClient::new(spawn_failing_server().await);

    assert!(client.get_all_goals().await.is_empty());
    assert_eq!(client.get_all_categories().await.len(), 6);
    assert_eq!(client.get_dashboard_summary().await.user_name, "User");
}

#[tokio::test]
async fn writes_surface_http_status_errors() {
    let client = ApiClient::new(spawn_failing_server().await);

    let result = client
        .update_goal(5, &GoalPatch::status(GoalStatus::Completed))
        .await;
    match result {
        Err(ApiError::Status(status)) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let result = client.delete_goal(5).await;
    assert!(matches!(result, Err(ApiError::Status(_))));
}

#[tokio::test]
async fn create_goal_posts_the_exact_sparse_body() {
    let (base_url, log) = spawn_mock_server().await;
    let client = ApiClient::new(base_url);

    let body = NewGoal {
        title: "Run a marathon".to_string(),
        description: None,
        plan: None,
        category_id: 1,
        target_date: "2030-06-01T00:00:00".to_string(),
        tasks: None,
    };
    client.create_goal(&body).await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].method, "POST");
    assert_eq!(log[0].path, "/api/goals");
    assert_eq!(
        log[0].body,
        Some(json!({
            "title": "Run a marathon",
            "categoryId": 1,
            "targetDate": "2030-06-01T00:00:00"
        }))
    );
}

#[tokio::test]
async fn task_toggle_puts_the_flag_then_refreshes_the_goal() {
    let (base_url, log) = spawn_mock_server().await;
    let client = ApiClient::new(base_url);

    // The goal view issues exactly this sequence for a toggle.
    client
        .update_task(5, 12, &TaskPatch::completed(true))
        .await
        .unwrap();
    let goal = client.get_goal_by_id(5).await.unwrap();
    assert_eq!(goal.id, 5);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].method, "PUT");
    assert_eq!(log[0].path, "/api/goals/5/tasks/12");
    assert_eq!(log[0].body, Some(json!({ "isCompleted": true })));
    assert_eq!(log[1].method, "GET");
    assert_eq!(log[1].path, "/api/goals/5");
}

#[tokio::test]
async fn deletes_issue_the_expected_requests() {
    let (base_url, log) = spawn_mock_server().await;
    let client = ApiClient::new(base_url);

    client.delete_goal(5).await.unwrap();
    client.delete_task(5, 12).await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].method, "DELETE");
    assert_eq!(log[0].path, "/api/goals/5");
    assert!(log[0].body.is_none());
    assert_eq!(log[1].method, "DELETE");
    assert_eq!(log[1].path, "/api/goals/5/tasks/12");
}

/// The goals page re-fetches the list after a create instead of trusting
/// the cache, so a goal created moments ago must come back from the list
/// endpoint. A stateful mock stands in for the backend here.
#[tokio::test]
async fn goals_list_refetch_includes_a_newly_created_goal() {
    let goals: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(vec![sample_goal(5)]));

    let app = Router::new()
        .route(
            "/api/goals",
            get(|State(goals): State<Arc<Mutex<Vec<Value>>>>| async move {
                Json(Value::Array(goals.lock().unwrap().clone()))
            })
            .post(
                |State(goals): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    let mut created = sample_goal(6);
                    created["title"] = body["title"].clone();
                    goals.lock().unwrap().push(created);
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(goals);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stateful server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = ApiClient::new(format!("http://{addr}"));

    let body = NewGoal {
        title: "Learn guitar".to_string(),
        description: None,
        plan: None,
        category_id: 6,
        target_date: "2030-06-01T00:00:00".to_string(),
        tasks: None,
    };
    client.create_goal(&body).await.unwrap();

    let listed = client.get_all_goals().await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|g| g.title == "Learn guitar"));
}

#[tokio::test]
async fn reads_parse_backend_payloads() {
    let (base_url, _log) = spawn_mock_server().await;
    let client = ApiClient::new(base_url);

    let goals = client.get_all_goals().await;
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].status, GoalStatus::InProgress);

    let goal = client.get_goal_by_id(7).await.unwrap();
    assert_eq!(goal.id, 7);
    let tasks = goal.tasks.unwrap();
    assert_eq!(tasks[0].id, 12);
    assert!(!tasks[0].is_completed);

    let categories = client.get_all_categories().await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name.as_deref(), Some("Remote Category"));

    let summary = client.get_dashboard_summary().await;
    assert_eq!(summary.goals_in_progress, 3);
    assert_eq!(summary.user_name, "Evelyn");

    client
        .add_task_to_goal(7, &goal_getter_ui::api::NewTask { description: "Stretch".to_string() })
        .await
        .unwrap();
}
