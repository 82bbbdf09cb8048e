//! Product catalog CRUD over HTTP.

#![allow(clippy::unwrap_used)]

use dresshaus_integration_tests::TestApp;
use serde_json::json;

fn product_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "category": "women",
        "price": 59.99,
        "description": "A dress",
        "color": "blue",
        "size": ["S", "M"],
        "image": "/images/x.jpg",
        "stock": 10,
    })
}

#[tokio::test]
async fn create_list_get_round_trip() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/products", product_body("First")).await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["id"], "p1");

    let (_, body) = app.post("/api/products", product_body("Second")).await;
    assert_eq!(body["product"]["id"], "p2");

    let (status, body) = app.get("/api/products").await;
    assert_eq!(status, 200);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);

    let (status, body) = app.get("/api/products/p2").await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["name"], "Second");
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/products/p99").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn create_missing_fields_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/products", json!({"name": "Only a name"}))
        .await;

    assert_eq!(status, 400);
    assert_eq!(
        body["error"],
        "Missing required fields: name, category, price, description, color, size, image, stock"
    );
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let app = TestApp::new();

    let mut body = product_body("Odd");
    body["category"] = json!("pets");
    let (status, response) = app.post("/api/products", body).await;

    assert_eq!(status, 400);
    assert_eq!(response["error"], "Invalid category: pets");
}

#[tokio::test]
async fn string_numerics_coerce() {
    let app = TestApp::new();

    let mut body = product_body("Stringy");
    body["price"] = json!("45.5");
    body["stock"] = json!("7");
    body["size"] = json!("M");

    let (status, response) = app.post("/api/products", body).await;
    assert_eq!(status, 200);
    assert_eq!(response["product"]["price"], 45.5);
    assert_eq!(response["product"]["stock"], 7);
    assert_eq!(response["product"]["size"], json!(["M"]));
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let app = TestApp::new();
    app.post("/api/products", product_body("Original")).await;

    let (status, body) = app.put("/api/products/p1", json!({"price": 99.5})).await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["price"], 99.5);
    assert_eq!(body["product"]["name"], "Original");
    assert_eq!(body["product"]["stock"], 10);
}

#[tokio::test]
async fn stock_endpoint_replaces_count() {
    let app = TestApp::new();
    app.post("/api/products", product_body("Stocked")).await;

    let (status, body) = app.put("/api/products/p1/stock", json!({"stock": 0})).await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["stock"], 0);

    let (status, body) = app.put("/api/products/p1/stock", json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "stock is required");
}

#[tokio::test]
async fn delete_then_delete_again() {
    let app = TestApp::new();
    app.post("/api/products", product_body("Doomed")).await;

    let (status, body) = app.delete("/api/products/p1").await;
    assert_eq!(status, 200);
    assert_eq!(body["product"]["name"], "Doomed");

    let (status, body) = app.delete("/api/products/p1").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn id_sequence_follows_highest_survivor() {
    let app = TestApp::new();

    app.post("/api/products", product_body("One")).await;
    app.post("/api/products", product_body("Two")).await;
    app.delete("/api/products/p2").await;

    let (_, body) = app.post("/api/products", product_body("Three")).await;
    assert_eq!(body["product"]["id"], "p2");
}
