mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

use common::{spawn_app, TestApp};

async fn create_category(app: &TestApp, name: &str, slug: &str) -> reqwest::Response {
    app.client
        .post(app.url("/api/categories"))
        .json(&json!({
            "name": name,
            "description": format!("All about {name}"),
            "slug": slug
        }))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn test_category() {
    let app = spawn_app().await;

    //TESTING ON EMPTY ARRAY
    let response = app
        .client
        .get(app.url("/api/categories"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_create_and_get_category() {
    let app = spawn_app().await;

    let response = create_category(&app, "Tractors", "tractors").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(created["slug"], "tractors");
    assert_eq!(created["isActive"], true);
    assert!(created["imageUrl"].is_null());

    let response = app
        .client
        .get(app.url("/api/categories/tractors"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body, created);

    let response = app
        .client
        .get(app.url("/api/categories/ploughs"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn test_duplicate_category_slug() {
    let app = spawn_app().await;

    let response = create_category(&app, "Tractors", "tractors").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = create_category(&app, "More tractors", "tractors").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["error"], r#"Category with slug "tractors" already exists"#);
}

#[tokio::test]
async fn test_patch_category() {
    let app = spawn_app().await;
    let tractors = create_category(&app, "Tractors", "tractors")
        .await
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    create_category(&app, "Harvesters", "harvesters").await;
    let id = tractors["id"].as_i64().unwrap();

    let response = app
        .client
        .put(app.url(&format!("/api/categories/{id}")))
        .json(&json!({ "name": "Big tractors", "imageUrl": "/uploads/t.jpg" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["name"], "Big tractors");
    assert_eq!(body["imageUrl"], "/uploads/t.jpg");
    assert_eq!(body["description"], tractors["description"]);
    assert_eq!(body["slug"], "tractors");

    let response = app
        .client
        .put(app.url(&format!("/api/categories/{id}")))
        .json(&json!({ "slug": "harvesters" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .client
        .put(app.url("/api/categories/999"))
        .json(&json!({ "name": "Ghost" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .client
        .put(app.url("/api/categories/tractors"))
        .json(&json!({ "name": "By slug" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_category_payload() {
    let app = spawn_app().await;

    let response = create_category(&app, "", "Not A Slug").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.expect("Failed to parse response JSON");
    assert_eq!(body["error"], "Invalid data");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|err| err["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "slug"]);
}

#[tokio::test]
async fn test_delete_category() {
    let app = spawn_app().await;
    let created = create_category(&app, "Tractors", "tractors")
        .await
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .client
        .delete(app.url(&format!("/api/categories/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .client
        .get(app.url("/api/categories/tractors"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .client
        .delete(app.url(&format!("/api/categories/{id}")))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
