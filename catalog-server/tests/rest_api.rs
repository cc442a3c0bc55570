//! REST façade integration tests
//!
//! Drives the real router (middleware included) over a scratch database.

mod common;

use common::{request, test_app};
use http::StatusCode;
use serde_json::json;

// =============================================================================
// Brand
// =============================================================================

#[tokio::test]
async fn brand_crud_round_trip() {
    let (app, _state, _tmp) = test_app().await;

    // Create
    let (status, body) = request(
        &app,
        "POST",
        "/api/brands",
        Some(json!({
            "name": "Nature's Best",
            "description": "Cold-pressed juices",
            "logo": "https://cdn.example.com/nb.png"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Brand created successfully");
    assert_eq!(body["data"]["name"], "Nature's Best");
    assert_eq!(body["data"]["status"], "Active");
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("brand:"));

    // Get
    let (status, body) = request(&app, "GET", &format!("/api/brands/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["description"], "Cold-pressed juices");

    // Update one field; others retain prior values
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/brands/{id}"),
        Some(json!({ "description": "Cold-pressed juices and smoothies" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Brand updated successfully");
    assert_eq!(body["data"]["name"], "Nature's Best");
    assert_eq!(body["data"]["description"], "Cold-pressed juices and smoothies");

    // Delete returns the removed record
    let (status, body) = request(&app, "DELETE", &format!("/api/brands/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Nature's Best");

    // Gone
    let (status, body) = request(&app, "GET", &format!("/api/brands/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn brand_name_is_unique() {
    let (app, _state, _tmp) = test_app().await;

    let (status, _) = request(&app, "POST", "/api/brands", Some(json!({"name": "Sunrise"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
        request(&app, "POST", "/api/brands", Some(json!({"name": "Sunrise"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Brand 'Sunrise' already exists");
}

#[tokio::test]
async fn brand_name_is_trimmed_and_required() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/brands",
        Some(json!({"name": "  Juicy Roots  "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Juicy Roots");

    let (status, body) = request(&app, "POST", "/api/brands", Some(json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "name must not be empty");
}

#[tokio::test]
async fn brand_search_matches_name_or_description() {
    let (app, _state, _tmp) = test_app().await;

    for (name, description) in [
        ("Nature's Best", "Cold-pressed"),
        ("Sunrise", "nature inspired blends"),
        ("Tropic Tide", "island fruit"),
    ] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/brands",
            Some(json!({"name": name, "description": description})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Case-insensitive, OR-combined over name and description
    let (status, body) = request(&app, "GET", "/api/brands?search=Nature", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 2);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Nature's Best"));
    assert!(names.contains(&"Sunrise"));

    // Empty result still carries pagination
    let (status, body) = request(&app, "GET", "/api/brands?search=zzz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn brand_status_filter_and_invalid_status() {
    let (app, _state, _tmp) = test_app().await;

    let (_, active) = request(&app, "POST", "/api/brands", Some(json!({"name": "A"}))).await;
    let (_, _) = request(
        &app,
        "POST",
        "/api/brands",
        Some(json!({"name": "B", "status": "Inactive"})),
    )
    .await;

    let (status, body) = request(&app, "GET", "/api/brands?status=Active", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["id"], active["data"]["id"]);

    let (status, body) = request(&app, "GET", "/api/brands?status=Archived", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status: Archived");
}

// =============================================================================
// Pagination and sorting
// =============================================================================

#[tokio::test]
async fn pagination_invariants_hold() {
    let (app, _state, _tmp) = test_app().await;

    for i in 0..25 {
        let (status, _) = request(
            &app,
            "POST",
            "/api/flavors",
            Some(json!({"name": format!("Flavor {i:02}")})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = request(&app, "GET", "/api/flavors?page=2&limit=10", None).await;
    assert_eq!(status, StatusCode::OK);
    let pagination = &body["pagination"];
    assert_eq!(pagination["page"], 2);
    assert_eq!(pagination["limit"], 10);
    assert_eq!(pagination["total"], 25);
    // pages == ceil(total / limit)
    assert_eq!(pagination["pages"], 3);
    assert!(body["data"].as_array().unwrap().len() <= 10);

    let (_, body) = request(&app, "GET", "/api/flavors?page=3&limit=10", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let (app, _state, _tmp) = test_app().await;

    let (_, _) = request(&app, "POST", "/api/sizes", Some(json!({"name": "500ml"}))).await;

    let (status, body) = request(&app, "GET", "/api/sizes?limit=100000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["limit"], 100);
}

#[tokio::test]
async fn sort_keys_order_results() {
    let (app, _state, _tmp) = test_app().await;

    for name in ["Mango", "Apple", "Zucchini"] {
        let (_, _) = request(&app, "POST", "/api/brands", Some(json!({"name": name}))).await;
    }

    let (_, body) = request(&app, "GET", "/api/brands?sort=name_asc", None).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Mango", "Zucchini"]);

    let (status, body) = request(&app, "GET", "/api/brands?sort=price_asc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid sort key: price_asc");
}

// =============================================================================
// Product references and population
// =============================================================================

async fn create_brand(app: &axum::Router, name: &str) -> String {
    let (status, body) = request(app, "POST", "/api/brands", Some(json!({"name": name}))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_product(app: &axum::Router, name: &str, brand: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/products",
        Some(json!({
            "name": name,
            "description": "A refreshing juice",
            "brand": brand
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn product_create_requires_existing_brand() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Ghost Juice",
            "description": "Should never exist",
            "brand": "brand:missing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Brand not found");

    // No partial write happened
    let (_, body) = request(&app, "GET", "/api/products", None).await;
    assert_eq!(body["pagination"]["total"], 0);
}

#[tokio::test]
async fn product_optional_references_are_validated_when_supplied() {
    let (app, _state, _tmp) = test_app().await;
    let brand = create_brand(&app, "Tropic Tide").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Island Punch",
            "description": "Punchy",
            "brand": brand,
            "flavor": "flavor:missing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Flavor not found");

    // Without the dangling flavor the create goes through
    let (status, _) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Island Punch",
            "description": "Punchy",
            "brand": brand
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn product_get_populates_current_brand_name() {
    let (app, _state, _tmp) = test_app().await;
    let brand = create_brand(&app, "Sunrise").await;
    let product = create_product(&app, "Morning Glow", &brand).await;

    let (status, body) = request(&app, "GET", &format!("/api/products/{product}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], brand.as_str());
    assert_eq!(body["data"]["brand_info"]["name"], "Sunrise");

    // Rename the brand; the populated name follows
    let (_, _) = request(
        &app,
        "PUT",
        &format!("/api/brands/{brand}"),
        Some(json!({"name": "Sunrise Organics"})),
    )
    .await;
    let (_, body) = request(&app, "GET", &format!("/api/products/{product}"), None).await;
    assert_eq!(body["data"]["brand_info"]["name"], "Sunrise Organics");
}

#[tokio::test]
async fn updating_only_status_preserves_every_other_field() {
    let (app, _state, _tmp) = test_app().await;
    let brand = create_brand(&app, "Nature's Best").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Green Machine",
            "description": "Kale, apple, ginger",
            "brand": brand,
            "image": "https://cdn.example.com/green.jpg",
            "gallery": ["https://cdn.example.com/g1.jpg", "https://cdn.example.com/g2.jpg"],
            "nutrients": {"calories": 120.0, "sugar": 22.5, "vitamin_c": 80.0}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (_, before) = request(&app, "GET", &format!("/api/products/{id}"), None).await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/products/{id}"),
        Some(json!({"status": "Inactive"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = request(&app, "GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(after["data"]["status"], "Inactive");

    let mut before_fields = before["data"].as_object().unwrap().clone();
    let mut after_fields = after["data"].as_object().unwrap().clone();
    before_fields.remove("status");
    after_fields.remove("status");
    assert_eq!(before_fields, after_fields);
}

#[tokio::test]
async fn deleting_brand_preserves_dangling_product_reference() {
    let (app, _state, _tmp) = test_app().await;
    let brand = create_brand(&app, "Short Lived").await;
    let product = create_product(&app, "Orphan Juice", &brand).await;

    let (status, _) = request(&app, "DELETE", &format!("/api/brands/{brand}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // The product survives; the raw link is preserved verbatim and the
    // populated side resolves to nothing.
    let (status, body) = request(&app, "GET", &format!("/api/products/{product}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], brand.as_str());
    assert!(body["data"]["brand_info"].is_null());
}

#[tokio::test]
async fn product_list_filters_by_foreign_key() {
    let (app, _state, _tmp) = test_app().await;
    let brand_a = create_brand(&app, "Brand A").await;
    let brand_b = create_brand(&app, "Brand B").await;
    create_product(&app, "A1", &brand_a).await;
    create_product(&app, "A2", &brand_a).await;
    create_product(&app, "B1", &brand_b).await;

    let (status, body) =
        request(&app, "GET", &format!("/api/products?brand={brand_a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 2);
    for product in body["data"].as_array().unwrap() {
        assert_eq!(product["brand"], brand_a.as_str());
    }
}

#[tokio::test]
async fn product_nutrients_must_be_non_negative() {
    let (app, _state, _tmp) = test_app().await;
    let brand = create_brand(&app, "Nutrition Co").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Bad Batch",
            "description": "Negative sugar",
            "brand": brand,
            "nutrients": {"sugar": -3.0}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "sugar must be a non-negative number");
}

// =============================================================================
// Flavor defaults
// =============================================================================

#[tokio::test]
async fn flavor_with_omitted_optionals_defaults_to_active() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(&app, "POST", "/api/flavors", Some(json!({"name": "Mango"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(&app, "GET", &format!("/api/flavors/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Active");
    assert!(body["data"]["description"].is_null());
    assert!(body["data"]["image"].is_null());
}

// =============================================================================
// Category tree
// =============================================================================

#[tokio::test]
async fn category_parent_must_exist_and_not_cycle() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Juices"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let root = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Citrus", "parent": root})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let child = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["parent"], root.as_str());

    // Dangling parent is rejected
    let (status, body) = request(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Lost", "parent": "category:missing"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Category not found");

    // Making the root a child of its own descendant would close a cycle
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/categories/{root}"),
        Some(json!({"parent": child})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Category parent chain must not form a cycle");
}

// =============================================================================
// Supplier
// =============================================================================

#[tokio::test]
async fn supplier_crud_round_trip() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/suppliers",
        Some(json!({
            "name": "Orchard Partners",
            "contact_name": "Sam Lee",
            "email": "sam@orchard.example",
            "phone": "+34 600 000 000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/suppliers/{id}"),
        Some(json!({"phone": "+34 600 111 111"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["contact_name"], "Sam Lee");
    assert_eq!(body["data"]["phone"], "+34 600 111 111");

    let (status, _) = request(&app, "DELETE", &format!("/api/suppliers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, "GET", &format!("/api/suppliers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoints_answer() {
    let (app, _state, _tmp) = test_app().await;

    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = request(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}
