#![allow(dead_code)]

use axum_test::TestServer;
use repo_catalog::routes::app_router;
use repo_catalog::state::AppState;
use serde_json::{Value, json};

pub fn make_server() -> TestServer {
    TestServer::new(app_router(AppState::in_memory())).unwrap()
}

pub fn repository_body(title: &str) -> Value {
    json!({
        "title": title,
        "url": format!("https://github.com/example/{title}"),
        "techs": ["Rust", "Axum"]
    })
}

/// Creates a repository through the API and returns its id.
pub async fn create_repository(server: &TestServer, title: &str) -> String {
    let response = server
        .post("/repositories")
        .json(&repository_body(title))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn list_ids(server: &TestServer) -> Vec<String> {
    let response = server.get("/repositories").await;
    response.assert_status_ok();

    response
        .json::<Value>()
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}
