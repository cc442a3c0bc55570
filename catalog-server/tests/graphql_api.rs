//! GraphQL façade integration tests
//!
//! Schema-level tests exercise the resolvers and the admin guard directly;
//! the HTTP test drives bearer-token decoding through the real route.

mod common;

use common::{request_with_auth, test_app, test_state};
use http::StatusCode;
use serde_json::json;

use catalog_server::CurrentUser;
use catalog_server::db::models::{BrandCreate, ProductCreate};

fn admin() -> CurrentUser {
    CurrentUser {
        id: "user:admin".to_string(),
        username: "root".to_string(),
        role: "admin".to_string(),
    }
}

fn editor() -> CurrentUser {
    CurrentUser {
        id: "user:editor".to_string(),
        username: "dana".to_string(),
        role: "editor".to_string(),
    }
}

fn data_of(resp: async_graphql::Response) -> serde_json::Value {
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    serde_json::to_value(resp.data).expect("serialize response data")
}

#[tokio::test]
async fn mutations_require_authentication() {
    let (state, _tmp) = test_state().await;

    let mutation = r#"mutation { createBrand(input: {name: "Sunrise"}) { id } }"#;

    // Anonymous context
    let resp = state
        .schema
        .execute(async_graphql::Request::new(mutation))
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Authentication required");

    // Authenticated but not admin
    let resp = state
        .schema
        .execute(async_graphql::Request::new(mutation).data(editor()))
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Admin access required");

    // Nothing was written either time
    let page = state
        .catalog
        .list_brands(&Default::default())
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn admin_can_create_and_query_brands() {
    let (state, _tmp) = test_state().await;

    let mutation = r#"mutation {
        createBrand(input: {name: "Nature's Best", description: "Cold-pressed"}) {
            id name status
        }
    }"#;
    let data = data_of(
        state
            .schema
            .execute(async_graphql::Request::new(mutation).data(admin()))
            .await,
    );
    assert_eq!(data["createBrand"]["name"], "Nature's Best");
    assert_eq!(data["createBrand"]["status"], "ACTIVE");

    // Queries are public
    let query = r#"{ brands { records { name description } pagination { total pages } } }"#;
    let data = data_of(state.schema.execute(async_graphql::Request::new(query)).await);
    assert_eq!(data["brands"]["pagination"]["total"], 1);
    assert_eq!(data["brands"]["records"][0]["description"], "Cold-pressed");
}

#[tokio::test]
async fn graphql_rejects_dangling_product_brand() {
    let (state, _tmp) = test_state().await;

    let mutation = r#"mutation {
        createProduct(input: {
            name: "Ghost Juice",
            description: "Should never exist",
            brand: "brand:missing"
        }) { id }
    }"#;
    let resp = state
        .schema
        .execute(async_graphql::Request::new(mutation).data(admin()))
        .await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "Brand not found");
}

#[tokio::test]
async fn product_resolves_populated_brand() {
    let (state, _tmp) = test_state().await;

    let brand = state
        .catalog
        .create_brand(BrandCreate {
            name: "Tropic Tide".to_string(),
            description: None,
            logo: None,
            status: None,
        })
        .await
        .unwrap();
    let brand_id = brand.id.as_ref().unwrap().to_string();

    let product = state
        .catalog
        .create_product(ProductCreate {
            name: "Island Punch".to_string(),
            description: "Punchy".to_string(),
            brand: brand_id.clone(),
            flavor: None,
            size: None,
            image: None,
            gallery: None,
            nutrients: None,
            status: None,
        })
        .await
        .unwrap();
    let product_id = product.product.id.as_ref().unwrap().to_string();

    let query = format!(
        r#"{{ product(id: "{product_id}") {{ brandId brand {{ name }} flavor {{ name }} }} }}"#
    );
    let data = data_of(state.schema.execute(async_graphql::Request::new(query)).await);
    assert_eq!(data["product"]["brandId"], brand_id);
    assert_eq!(data["product"]["brand"]["name"], "Tropic Tide");
    assert!(data["product"]["flavor"].is_null());
}

#[tokio::test]
async fn sort_and_limit_clamp_match_rest_behavior() {
    let (state, _tmp) = test_state().await;

    for name in ["Mango", "Apple", "Zucchini"] {
        state
            .catalog
            .create_brand(BrandCreate {
                name: name.to_string(),
                description: None,
                logo: None,
                status: None,
            })
            .await
            .unwrap();
    }

    let query = r#"{
        brands(filter: {sort: NAME_ASC, limit: 100000}) {
            records { name }
            pagination { limit total }
        }
    }"#;
    let data = data_of(state.schema.execute(async_graphql::Request::new(query)).await);
    let names: Vec<&str> = data["brands"]["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Mango", "Zucchini"]);
    // Same clamp as the REST query builder
    assert_eq!(data["brands"]["pagination"]["limit"], 100);
}

#[tokio::test]
async fn bearer_token_decodes_into_mutation_context_over_http() {
    let (app, state, _tmp) = test_app().await;

    let body = json!({
        "query": "mutation { createBrand(input: {name: \"Sunrise\"}) { name } }"
    });

    // No token: request is served, mutation is rejected inside the schema
    let (status, resp) =
        request_with_auth(&app, "POST", "/graphql", Some(body.clone()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["errors"][0]["message"], "Authentication required");

    // Garbage token is anonymous, not a transport error
    let (status, resp) = request_with_auth(
        &app,
        "POST",
        "/graphql",
        Some(body.clone()),
        Some("not-a-token"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["errors"][0]["message"], "Authentication required");

    // Admin token goes through
    let token = state
        .jwt_service
        .generate_token("user:admin", "root", "admin")
        .unwrap();
    let (status, resp) =
        request_with_auth(&app, "POST", "/graphql", Some(body), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(resp.get("errors").is_none(), "unexpected errors: {resp}");
    assert_eq!(resp["data"]["createBrand"]["name"], "Sunrise");
}
