#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::{Router, routing::get};
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tool_trends::api::handlers::health_handler;
use tool_trends::api::routes::api_routes;
use tool_trends::domain::clock::FixedClock;
use tool_trends::domain::entities::ToolRecord;
use tool_trends::domain::repositories::{FetchError, ToolSource};
use tool_trends::state::AppState;

pub const SOURCE_ENDPOINT: &str = "http://source.test/tools";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn tool(id: usize, created_at: &str) -> ToolRecord {
    ToolRecord::new(id.to_string(), format!("tool-{id}"), created_at)
}

/// `n` records created on consecutive days going back from `2024-01-10`.
pub fn collection(n: usize) -> Vec<ToolRecord> {
    (0..n)
        .map(|i| {
            let day = date(2024, 1, 10) - chrono::Days::new(i as u64);
            tool(i, &format!("{}T09:30:00Z", day.format("%Y-%m-%d")))
        })
        .collect()
}

pub fn unreachable() -> FetchError {
    FetchError::Network {
        endpoint: SOURCE_ENDPOINT.to_string(),
        message: "connection refused".to_string(),
    }
}

/// Returns the same outcome on every fetch.
pub struct StaticSource {
    outcome: Result<Vec<ToolRecord>, FetchError>,
}

impl StaticSource {
    pub fn ok(records: Vec<ToolRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl ToolSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>, FetchError> {
        self.outcome.clone()
    }
}

/// Serves scripted responses in call order, each after its own delay.
pub struct ScriptedSource {
    script: Mutex<VecDeque<(Duration, Result<Vec<ToolRecord>, FetchError>)>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<(Duration, Result<Vec<ToolRecord>, FetchError>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl ToolSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<ToolRecord>, FetchError> {
        let (delay, outcome) = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch called more often than scripted");
        tokio::time::sleep(delay).await;
        outcome
    }
}

pub fn create_test_state(source: impl ToolSource + 'static, today: NaiveDate) -> AppState {
    AppState::new(Arc::new(source)).with_clock(Arc::new(FixedClock(today)))
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state)
}

/// Starts a local collection endpoint answering `GET /tools` with `status` and `body`.
pub async fn spawn_collection_server(status: StatusCode, body: impl Into<String>) -> String {
    let body: String = body.into();
    let app = Router::new().route(
        "/tools",
        get(move || {
            let body = body.clone();
            async move { (status, [(CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/tools")
}
