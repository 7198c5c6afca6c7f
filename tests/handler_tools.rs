mod common;

use axum_test::TestServer;
use tool_trends::domain::entities::ToolRecord;

fn server(records: Vec<ToolRecord>) -> TestServer {
    let state = common::create_test_state(common::StaticSource::ok(records), common::date(2024, 1, 10));
    TestServer::new(common::create_test_app(state)).unwrap()
}

#[tokio::test]
async fn test_tools_default_page() {
    let server = server(common::collection(25));

    let response = server.get("/api/tools").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 10);
    assert_eq!(json["pagination"]["total_items"], 25);
    assert_eq!(json["pagination"]["total_pages"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
    assert_eq!(json["items"][0]["id"], "0");
}

#[tokio::test]
async fn test_tools_last_page_is_short() {
    let server = server(common::collection(25));

    let response = server
        .get("/api/tools")
        .add_query_param("page", "3")
        .add_query_param("page_size", "10")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], "20");
    assert_eq!(items[4]["id"], "24");
}

#[tokio::test]
async fn test_tools_page_past_end_is_empty() {
    let server = server(common::collection(25));

    let response = server.get("/api/tools").add_query_param("page", "7").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["page"], 7);
    assert_eq!(json["pagination"]["total_pages"], 3);
}

#[tokio::test]
async fn test_tools_empty_collection() {
    let server = server(vec![]);

    let response = server.get("/api/tools").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total_items"], 0);
    assert_eq!(json["pagination"]["total_pages"], 1);
}

#[tokio::test]
async fn test_tools_row_shape() {
    let record = ToolRecord::new("t1", "Summarizer", "2024-01-01T10:00:00Z")
        .with_topics(["ai", "nlp"])
        .with_score(Some(6.5))
        .with_website("https://summarizer.dev/app?ref=catalog");
    let server = server(vec![record]);

    let response = server.get("/api/tools").await;

    response.assert_status_ok();
    let row = &response.json::<serde_json::Value>()["items"][0];
    assert_eq!(row["name"], "Summarizer");
    assert_eq!(row["topics"], serde_json::json!(["ai", "nlp"]));
    assert_eq!(row["link"], "https://summarizer.dev/app");
    assert_eq!(row["score_band"], "pretty_good");
    assert_eq!(row["score_label"], "pretty good");
}

#[tokio::test]
async fn test_tools_unscored_row() {
    let server = server(vec![ToolRecord::new("t2", "Pending", "2024-01-01")]);

    let response = server.get("/api/tools").await;

    let row = &response.json::<serde_json::Value>()["items"][0];
    assert!(row["score"].is_null());
    assert_eq!(row["score_label"], "not yet evaluated");
    assert!(row["link"].is_null());
}

#[tokio::test]
async fn test_tools_script_website_has_no_link() {
    let server = server(vec![
        ToolRecord::new("t3", "Sneaky", "2024-01-01").with_website("javascript:alert(document.cookie)?x=1"),
    ]);

    let response = server.get("/api/tools").await;

    response.assert_status_ok();
    let row = &response.json::<serde_json::Value>()["items"][0];
    assert_eq!(row["name"], "Sneaky");
    assert!(row["link"].is_null());
}

#[tokio::test]
async fn test_tools_invalid_page_size() {
    let server = server(common::collection(5));

    let response = server
        .get("/api/tools")
        .add_query_param("page_size", "25")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_tools_page_zero() {
    let server = server(common::collection(5));

    let response = server.get("/api/tools").add_query_param("page", "0").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_tools_upstream_failure() {
    let state = common::create_test_state(
        common::StaticSource::failing(common::unreachable()),
        common::date(2024, 1, 10),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/tools").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["endpoint"], common::SOURCE_ENDPOINT);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains(common::SOURCE_ENDPOINT)
    );
}
