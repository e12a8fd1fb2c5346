//! Integration tests for the relay's HTTP surface.
//!
//! These drive the real router with a stub catalog injected through
//! `RelayContext`, so no test touches the network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use petconnect_axum::bootstrap::{CorsConfig, RelayContext};
use petconnect_axum::routes::create_router;
use petconnect_core::contracts::http::{HEALTH_PATH, PETS_PATH};
use petconnect_core::{Animal, AnimalCatalogPort, CatalogError, CatalogResult, PageQuery};

/// How the stub catalog should respond.
enum StubBehavior {
    Animals(Vec<Animal>),
    TokenFailure,
    ListingFailure,
}

/// Catalog stub that records every query it sees.
struct StubCatalog {
    behavior: StubBehavior,
    seen: Mutex<Vec<PageQuery>>,
}

impl StubCatalog {
    fn new(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AnimalCatalogPort for StubCatalog {
    async fn list_page(&self, query: &PageQuery) -> CatalogResult<Vec<Animal>> {
        self.seen.lock().unwrap().push(*query);
        match &self.behavior {
            StubBehavior::Animals(animals) => Ok(animals.clone()),
            StubBehavior::TokenFailure => Err(CatalogError::TokenAcquisition {
                message: "identity endpoint returned status 401".to_string(),
            }),
            StubBehavior::ListingFailure => Err(CatalogError::Listing {
                status: Some(503),
                message: "status 503".to_string(),
            }),
        }
    }
}

fn sample_animals() -> Vec<Animal> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "name": "Rex",
            "species": "Dog",
            "age": "Young",
            "gender": "Male",
            "status": "adoptable"
        },
        {
            "id": 2,
            "name": "Mia",
            "species": "Cat",
            "age": "Adult",
            "gender": "Female"
        }
    ]))
    .unwrap()
}

fn router_with(catalog: Arc<StubCatalog>) -> axum::Router {
    let ctx = RelayContext::new(catalog, 10);
    create_router(ctx, &CorsConfig::AllowAll)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = router_with(StubCatalog::new(StubBehavior::Animals(Vec::new())));

    let response = app
        .oneshot(
            Request::builder()
                .uri(HEALTH_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn pets_endpoint_returns_json_array_unchanged() {
    let app = router_with(StubCatalog::new(StubBehavior::Animals(sample_animals())));

    let (status, json) = get(app, PETS_PATH).await;

    assert_eq!(status, StatusCode::OK);
    let animals = json.as_array().expect("expected a JSON array");
    assert_eq!(animals.len(), 2);
    assert_eq!(animals[0]["name"], "Rex");
    // Pass-through: fields the relay does not interpret survive
    assert_eq!(animals[0]["status"], "adoptable");
}

#[tokio::test]
async fn pets_endpoint_defaults_page_and_limit() {
    let catalog = StubCatalog::new(StubBehavior::Animals(Vec::new()));
    let app = router_with(catalog.clone());

    let (status, _) = get(app, PETS_PATH).await;
    assert_eq!(status, StatusCode::OK);

    let seen = catalog.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], PageQuery::new(1, 10));
}

#[tokio::test]
async fn pets_endpoint_forwards_page_and_limit() {
    let catalog = StubCatalog::new(StubBehavior::Animals(Vec::new()));
    let app = router_with(catalog.clone());

    let (status, _) = get(app, "/pets?limit=5&page=3").await;
    assert_eq!(status, StatusCode::OK);

    let seen = catalog.seen.lock().unwrap();
    assert_eq!(seen[0], PageQuery::new(3, 5));
}

#[tokio::test]
async fn pets_endpoint_clamps_out_of_range_params() {
    let catalog = StubCatalog::new(StubBehavior::Animals(Vec::new()));
    let app = router_with(catalog.clone());

    let (status, _) = get(app, "/pets?limit=9999&page=0").await;
    assert_eq!(status, StatusCode::OK);

    let seen = catalog.seen.lock().unwrap();
    assert_eq!(seen[0].page, 1);
    assert_eq!(seen[0].limit, 100);
}

#[tokio::test]
async fn pets_endpoint_maps_token_failure_to_500() {
    let app = router_with(StubCatalog::new(StubBehavior::TokenFailure));

    let (status, json) = get(app, PETS_PATH).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("upstream authorization failed")
    );
}

#[tokio::test]
async fn pets_endpoint_maps_listing_failure_to_500() {
    let app = router_with(StubCatalog::new(StubBehavior::ListingFailure));

    let (status, json) = get(app, PETS_PATH).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("upstream listing failed")
    );
}

#[tokio::test]
async fn nonexistent_route_returns_not_found() {
    let app = router_with(StubCatalog::new(StubBehavior::Animals(Vec::new())));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
