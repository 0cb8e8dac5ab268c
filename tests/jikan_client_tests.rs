//! Integration tests for the Jikan metadata client and catalog

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use animatch::services::{AnimeCatalog, JikanCatalog};
use animatch::{ApiError, AppError, JikanClient};

fn catalog_for(server: &MockServer) -> JikanCatalog {
    let client = Arc::new(JikanClient::new(server.uri(), Duration::from_secs(5)));
    JikanCatalog::new(client)
}

fn anime_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "mal_id": 20,
                "title": "Naruto",
                "title_english": "Naruto",
                "images": { "jpg": { "image_url": "https://cdn.example/20.jpg", "large_image_url": "https://cdn.example/20l.jpg" } },
                "score": 8.01,
                "episodes": 220,
                "status": "Finished Airing",
                "airing": false,
                "genres": [ { "mal_id": 1, "type": "anime", "name": "Action", "url": "" } ]
            },
            {
                "mal_id": 1735,
                "title": "Naruto: Shippuuden"
            }
        ],
        "pagination": { "last_visible_page": 1, "has_next_page": false }
    })
}

#[tokio::test]
async fn test_search_decodes_records_and_forwards_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("q", "naruto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(anime_body()))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let records = catalog.search("naruto").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 20);
    assert_eq!(records[0].genres, vec!["Action"]);
    // Optional fields omitted upstream decode to absent, not an error
    assert_eq!(records[1].id, 1735);
    assert!(records[1].score.is_none());
    assert!(records[1].image_url.is_none());
}

#[tokio::test]
async fn test_top_rated_sends_fixed_sort_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("limit", "15"))
        .and(query_param("order_by", "score"))
        .and(query_param("sort", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(anime_body()))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let records = catalog.top_rated(15).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_airing_and_upcoming_send_status_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("status", "airing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .and(query_param("status", "upcoming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    assert!(catalog.airing_now(10).await.unwrap().is_empty());
    assert!(catalog.upcoming(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_2xx_status_is_a_network_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let err = catalog.search("naruto").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Api(ApiError::NetworkFailure(_))
    ));
}

#[tokio::test]
async fn test_schema_mismatch_is_a_decode_failure() {
    let server = MockServer::start().await;

    // `data` entries missing the required mal_id
    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [ { "title": "No Identity" } ] })),
        )
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let err = catalog.search("naruto").await.unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::DecodeFailure(_))));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    let err = catalog.search("naruto").await.unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::DecodeFailure(_))));
}

#[tokio::test]
async fn test_empty_search_never_hits_the_server() {
    let server = MockServer::start().await;

    let catalog = catalog_for(&server);
    let err = catalog.search("").await.unwrap_err();

    assert!(matches!(err, AppError::EmptyQuery));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_failure() {
    // Nothing listens here; the connection itself fails
    let client = Arc::new(JikanClient::new(
        "http://127.0.0.1:9".to_string(),
        Duration::from_millis(500),
    ));
    let catalog = JikanCatalog::new(client);

    let err = catalog.search("naruto").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Api(ApiError::NetworkFailure(_))
    ));
}
