//! HTTP gateway against a mock backend: wire shapes and the status
//! mapping into the sync error taxonomy.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use pharmacy::{Product, ProductField, RestClient, User};
use synckit::{ClientError, Draft, ResourceClient};

fn rest(server: &MockServer) -> RestClient {
    let base = Url::parse(&server.url("/api")).unwrap();
    RestClient::new(base, Duration::from_secs(5)).unwrap()
}

fn draft(name: &str, price: &str) -> pharmacy::ProductDraft {
    let mut d = pharmacy::ProductDraft::default();
    d.apply(ProductField::Name(name.to_string()));
    d.apply(ProductField::Price(price.to_string()));
    d
}

#[tokio::test]
async fn list_decodes_the_collection_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(json!([
                {"id": 1, "name": "Aspirin", "description": "", "price": 3.0, "image": ""},
                {"id": 2, "name": "Vitamin C", "description": "", "price": 8.0, "image": ""}
            ]));
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let items = client.list().await.unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Aspirin");
    assert_eq!(items[1].name, "Vitamin C");
}

#[tokio::test]
async fn create_posts_the_draft_without_an_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/products").json_body(json!({
                "name": "Ibuprofen",
                "description": "",
                "price": 4.2,
                "image": ""
            }));
            then.status(201).json_body(json!({
                "id": 7, "name": "Ibuprofen", "description": "", "price": 4.2, "image": ""
            }));
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let created = client.create(&draft("Ibuprofen", "4.2")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, 7);
}

#[tokio::test]
async fn update_puts_to_the_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/products/1");
            then.status(200).json_body(json!({
                "id": 1, "name": "Aspirin", "description": "", "price": 7.5, "image": ""
            }));
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let updated = client.update(1, &draft("Aspirin", "7.5")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(updated.price, 7.5);
}

#[tokio::test]
async fn not_found_maps_to_the_stale_identity_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/products/99");
            then.status(404);
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let err = client.update(99, &draft("Ghost", "1.0")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn backend_validation_rejection_maps_to_validation() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/products");
            then.status(422).body("price out of range");
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let err = client.create(&draft("Aspirin", "3.0")).await.unwrap_err();
    assert_eq!(err, ClientError::validation("price out of range"));
}

#[tokio::test]
async fn server_failures_map_to_network() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/products");
            then.status(500);
        })
        .await;

    let client = rest(&server).resource::<Product>();
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Network { .. }));
}

#[tokio::test]
async fn delete_hits_the_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/users/3");
            then.status(204);
        })
        .await;

    let client = rest(&server).resource::<User>();
    client.delete(3).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_of_a_vanished_record_reports_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/users/99");
            then.status(404);
        })
        .await;

    let client = rest(&server).resource::<User>();
    let err = client.delete(99).await.unwrap_err();
    assert!(err.is_not_found());
}
