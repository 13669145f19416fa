//! Handler tests for Products domain
//!
//! These tests drive the products router directly:
//! - Request decoding and validation
//! - Response encoding and status codes
//! - Error envelopes
//!
//! The router is nested under `/products` the same way the app mounts it.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app(repository: InMemoryProductRepository) -> Router {
    let validator = product_validator(MatchPolicy::ExactlyOnce, Locale::En).unwrap();
    let service = ProductService::new(repository, validator);
    Router::new().nest("/products", handlers::router(service))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    request("GET", uri, Body::empty())
}

#[tokio::test]
async fn test_list_seeded_products() {
    let response = app(InMemoryProductRepository::seeded())
        .oneshot(get("/products"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let products: Vec<Product> = json_body(response.into_body()).await;
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Latte", "Espresso"]);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].sku, "abc323");
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_array() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(get("/products"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"[]");
}

#[tokio::test]
async fn test_create_returns_201_and_assigns_next_id() {
    let repository = InMemoryProductRepository::seeded();
    let app = app(repository.clone());

    let body = json!({
        "name": "Tea",
        "description": "Hot leaf juice",
        "price": 1.5,
        "sku": "abc-def-ghi"
    });
    let response = app
        .clone()
        .oneshot(request("POST", "/products", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 3);
    assert_eq!(product.name, "Tea");

    let response = app.oneshot(get("/products")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
    assert_eq!(products[2].sku, "abc-def-ghi");
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let body = json!({ "id": 77, "name": "Tea", "price": 1.5, "sku": "abc-def-ghi" });
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
}

#[tokio::test]
async fn test_create_invalid_sku_returns_validation_error() {
    let repository = InMemoryProductRepository::new();
    let body = json!({ "name": "Tea", "price": 1.5, "sku": "abc" });
    let response = app(repository.clone())
        .oneshot(request("POST", "/products", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");

    let details = error.details.unwrap();
    assert_eq!(
        details["messages"],
        json!(["sku must follow this regex format: '[a-z]+-[a-z]+-[a-z]+'."])
    );
    assert_eq!(details["fields"]["sku"][0]["code"], "sku");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(
        error.details.unwrap()["messages"],
        json!([
            "name is a required field",
            "price must be greater than 0",
            "sku is a required field"
        ])
    );
}

#[tokio::test]
async fn test_create_accepts_null_description() {
    let body = r#"{"name":"x","description":null,"price":1,"sku":"abc-def-ghi"}"#;
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "x");
    assert_eq!(product.description, "");
}

#[tokio::test]
async fn test_create_null_required_field_is_validation_error() {
    let body = r#"{"name":null,"price":1,"sku":"abc-def-ghi"}"#;
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
    assert_eq!(
        error.details.unwrap()["messages"],
        json!(["name is a required field"])
    );
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", "{\"name\": "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_JSON");
    assert_eq!(error.message, "Unable to unmarshal json");
}

#[tokio::test]
async fn test_create_empty_body_returns_400() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(request("POST", "/products", Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product() {
    let response = app(InMemoryProductRepository::seeded())
        .oneshot(get("/products/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Espresso");
    assert_eq!(product.price, 1.99);
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let response = app(InMemoryProductRepository::seeded())
        .oneshot(get("/products/99"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product not found.");
}

#[tokio::test]
async fn test_update_replaces_product() {
    let repository = InMemoryProductRepository::seeded();
    let body = json!({
        "name": "Flat White",
        "description": "Velvety",
        "price": 3.1,
        "sku": "fla-whi-te"
    });
    let response = app(repository.clone())
        .oneshot(request("PUT", "/products/1", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.name, "Flat White");

    let products = repository.list().await.unwrap();
    assert_eq!(products[0].name, "Flat White");
    assert_eq!(products[1].name, "Espresso");
}

#[tokio::test]
async fn test_update_unknown_product_returns_404() {
    let repository = InMemoryProductRepository::seeded();
    let body = json!({ "name": "Mocha", "price": 3.0, "sku": "moc-ha-x" });
    let response = app(repository.clone())
        .oneshot(request("PUT", "/products/99", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product not found.");
    assert_eq!(repository.list().await.unwrap(), store::sample_products());
}

#[tokio::test]
async fn test_update_invalid_id_returns_400() {
    let body = json!({ "name": "Mocha", "price": 3.0, "sku": "moc-ha-x" });
    let response = app(InMemoryProductRepository::seeded())
        .oneshot(request("PUT", "/products/abc", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");
    assert!(error.message.starts_with("Invalid id is provided"));
}

#[tokio::test]
async fn test_delete_product_returns_204() {
    let repository = InMemoryProductRepository::seeded();
    let app = app(repository.clone());

    let response = app
        .clone()
        .oneshot(request("DELETE", "/products/1", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("DELETE", "/products/1", Body::empty()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining = repository.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let repository = InMemoryProductRepository::seeded();
    let app = app(repository);

    app.clone()
        .oneshot(request("DELETE", "/products/2", Body::empty()))
        .await
        .unwrap();

    let body = json!({ "name": "Tea", "price": 1.5, "sku": "abc-def-ghi" });
    let response = app
        .oneshot(request("POST", "/products", body.to_string()))
        .await
        .unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 3);
}
