use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use storefront_catalog::{CatalogClient, FetchError};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        // Bind to an ephemeral port so tests can run in parallel.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn fixture_catalog() -> Value {
    json!([
        {
            "id": 9,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "Great outerwear jacket",
            "category": "men's clothing",
            "image": "https://example.com/img/jacket.jpg",
            "rating": { "rate": 4.7, "count": 500 }
        },
        {
            "id": 2,
            "title": "Slim Fit T-Shirt",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://example.com/img/tshirt.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 14,
            "title": "Gaming Monitor",
            "price": 999.99,
            "description": "49 inch super ultrawide",
            "category": "electronics",
            "image": "https://example.com/img/monitor.jpg",
            "rating": { "rate": 2.2, "count": 140 }
        }
    ])
}

#[tokio::test]
async fn fetch_returns_products_in_wire_order() {
    let app = Router::new().route("/products", get(|| async { Json(fixture_catalog()) }));
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let products = client.fetch_products().await.unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id.as_u64()).collect();
    assert_eq!(ids, vec![9, 2, 14]);
    assert_eq!(products[0].title, "Mens Cotton Jacket");
    assert_eq!(products[2].category, "electronics");
    assert!((products[1].price - 22.3).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_catalog_is_a_valid_response() {
    let app = Router::new().route("/products", get(|| async { Json(json!([])) }));
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let products = client.fetch_products().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn server_error_surfaces_as_status_error() {
    let app = Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let err = client.fetch_products().await.unwrap_err();

    assert_eq!(err, FetchError::Status(500));
}

#[tokio::test]
async fn not_found_surfaces_as_status_error() {
    // No /products route at all.
    let app = Router::new();
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let err = client.fetch_products().await.unwrap_err();

    assert_eq!(err, FetchError::Status(404));
}

#[tokio::test]
async fn malformed_payload_surfaces_as_payload_error() {
    let app = Router::new().route("/products", get(|| async { "definitely not json" }));
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let err = client.fetch_products().await.unwrap_err();

    assert!(matches!(err, FetchError::Payload(_)), "got {err:?}");
}

#[tokio::test]
async fn schema_mismatch_surfaces_as_payload_error() {
    // An object where an array of products is expected.
    let app = Router::new().route("/products", get(|| async { Json(json!({"page": 1})) }));
    let srv = TestServer::spawn(app).await;

    let client = CatalogClient::new(&srv.base_url);
    let err = client.fetch_products().await.unwrap_err();

    assert!(matches!(err, FetchError::Payload(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_network_error() {
    // Grab an ephemeral port, then release it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::new(format!("http://{}", addr));
    let err = client.fetch_products().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}
