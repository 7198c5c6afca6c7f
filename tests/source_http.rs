mod common;

use axum::http::StatusCode;
use std::time::Duration;
use tool_trends::domain::repositories::{FetchError, ToolSource};
use tool_trends::infrastructure::http::HttpToolSource;

#[tokio::test]
async fn test_fetch_decodes_collection() {
    let body = r#"[
        {
            "id": "a1",
            "name": "Summarizer",
            "tagline": "Short texts",
            "topics": ["ai", { "name": "nlp" }],
            "thumbnailUrl": "https://cdn.example.com/a1.png",
            "website": "https://summarizer.dev?ref=catalog",
            "createdAt": "2024-01-01T10:00:00Z",
            "score": 8.2
        },
        {
            "id": "b2",
            "name": "Pending",
            "createdAt": "2024-01-02T11:00:00Z"
        }
    ]"#;
    let url = common::spawn_collection_server(StatusCode::OK, body).await;
    let source = HttpToolSource::new(&url, Some(Duration::from_secs(5))).unwrap();

    let records = source.fetch().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].topics, vec!["ai", "nlp"]);
    assert_eq!(records[0].thumbnail_url.as_deref(), Some("https://cdn.example.com/a1.png"));
    assert_eq!(records[0].link_target().as_deref(), Some("https://summarizer.dev/"));
    assert_eq!(records[0].score, Some(8.2));
    assert!(records[1].topics.is_empty());
    assert!(records[1].score.is_none());
}

#[tokio::test]
async fn test_fetch_preserves_source_order() {
    let body = r#"[
        { "id": 3, "name": "c", "createdAt": "2024-01-03" },
        { "id": 1, "name": "a", "createdAt": "2024-01-01" },
        { "id": 2, "name": "b", "createdAt": "2024-01-02" }
    ]"#;
    let url = common::spawn_collection_server(StatusCode::OK, body).await;
    let source = HttpToolSource::new(&url, None).unwrap();

    let ids: Vec<String> = source
        .fetch()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[tokio::test]
async fn test_fetch_empty_array() {
    let url = common::spawn_collection_server(StatusCode::OK, "[]").await;
    let source = HttpToolSource::new(&url, None).unwrap();

    assert!(source.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let url = common::spawn_collection_server(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let source = HttpToolSource::new(&url, None).unwrap();

    let err = source.fetch().await.unwrap_err();

    assert_eq!(
        err,
        FetchError::Status {
            endpoint: url.clone(),
            status: 500
        }
    );
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let url = common::spawn_collection_server(StatusCode::OK, r#"{"tools": []}"#).await;
    let source = HttpToolSource::new(&url, None).unwrap();

    let err = source.fetch().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_fetch_record_without_required_field() {
    let url =
        common::spawn_collection_server(StatusCode::OK, r#"[{ "id": "x", "name": "no date" }]"#)
            .await;
    let source = HttpToolSource::new(&url, None).unwrap();

    assert!(matches!(
        source.fetch().await.unwrap_err(),
        FetchError::Decode { .. }
    ));
}
