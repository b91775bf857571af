//! Service-layer integration tests against a local mock backend.
//!
//! Spins up a minimal axum router speaking the backend's response envelope
//! and drives the real `HttpClient` + services against it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};

use grifo_client::services::{CatalogService, CreditService, SaleService};
use grifo_client::{ClientConfig, ClientError, HttpClient};
use grifo_client::poller::RecentSalesPoller;
use shared::models::fuel::FuelType;
use shared::models::product::{Product, ProductUpdate};
use shared::models::sale::{Sale, SaleStatus};
use shared::request::CreateSaleRequest;
use shared::response::ApiResponse;

#[derive(Clone)]
struct MockState {
    sales_hits: Arc<AtomicUsize>,
    /// Artificial latency for GET /sales, for the poller overlap test
    sales_delay: Duration,
}

fn sample_sale(id: i64) -> Sale {
    Sale {
        id,
        user_id: 7,
        client_id: None,
        nozzle_id: 31,
        product_name: Some("Premium".to_string()),
        quantity: 10.0,
        total_amount: 40.10,
        final_amount: 47.32,
        discount_amount: None,
        payment_method_id: Some(1),
        payment_method: Some("cash".to_string()),
        status: SaleStatus::Completed,
        due_date: None,
        notes: None,
        created_at: None,
    }
}

async fn list_sales(State(state): State<MockState>, headers: HeaderMap) -> Json<ApiResponse<Vec<Sale>>> {
    assert!(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("Bearer ")),
        "missing bearer token"
    );
    state.sales_hits.fetch_add(1, Ordering::SeqCst);
    if !state.sales_delay.is_zero() {
        tokio::time::sleep(state.sales_delay).await;
    }
    Json(ApiResponse::ok(vec![sample_sale(1), sample_sale(2)]))
}

async fn create_sale(Json(req): Json<CreateSaleRequest>) -> Json<ApiResponse<Sale>> {
    let mut sale = sample_sale(99);
    sale.quantity = req.quantity;
    sale.total_amount = req.total_amount;
    sale.final_amount = req.final_amount;
    sale.payment_method = Some(req.payment_method);
    Json(ApiResponse::ok(sale))
}

async fn update_product(
    Path(id): Path<i64>,
    Json(changes): Json<ProductUpdate>,
) -> Json<ApiResponse<Product>> {
    Json(ApiResponse::ok(Product {
        id,
        name: changes.name.unwrap_or_else(|| "Premium".to_string()),
        fuel: FuelType::Premium,
        unit_price: changes.unit_price.unwrap_or(4.01),
        is_active: changes.is_active.unwrap_or(true),
    }))
}

async fn outstanding_credits() -> (StatusCode, Json<ApiResponse<()>>) {
    let resp = ApiResponse {
        code: "E0002".to_string(),
        message: "Validation failed".to_string(),
        data: None,
        errors: Some(vec![
            "date range is invalid".to_string(),
            "client does not exist".to_string(),
        ]),
    };
    (StatusCode::BAD_REQUEST, Json(resp))
}

async fn start_mock(delay: Duration) -> (String, Arc<AtomicUsize>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let hits = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        sales_hits: Arc::clone(&hits),
        sales_delay: delay,
    };
    let app = Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/products/{id}", put(update_product))
        .route("/credits/outstanding", get(outstanding_credits))
        .route(
            "/protected",
            post(|| async { (StatusCode::UNAUTHORIZED, "") }),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), hits)
}

fn client(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url)
        .with_token("test-token")
        .build_http_client()
}

#[tokio::test]
async fn create_sale_round_trips_the_payload() {
    let (base_url, _) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let request = CreateSaleRequest {
        user_id: 7,
        client_id: None,
        nozzle_id: 31,
        quantity: 10.0,
        total_amount: 40.10,
        final_amount: 47.32,
        payment_method_id: 1,
        payment_method: "cash".to_string(),
        status: SaleStatus::Completed,
        discount_amount: None,
        due_date: None,
        notes: None,
    };

    let sale = SaleService::new(&http).create(&request).await.unwrap();
    assert_eq!(sale.id, 99);
    assert_eq!(sale.final_amount, 47.32);
    assert_eq!(sale.payment_method.as_deref(), Some("cash"));
}

#[tokio::test]
async fn recent_sales_sends_bearer_token_and_unwraps_envelope() {
    let (base_url, hits) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let sales = SaleService::new(&http).recent(10).await.unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(sales[0].payment_label(), "Efectivo");
}

#[tokio::test]
async fn validation_errors_surface_joined_server_messages() {
    let (base_url, _) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let err = CreditService::new(&http).outstanding().await.unwrap_err();
    match err {
        ClientError::Validation(message) => {
            assert_eq!(message, "date range is invalid; client does not exist");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_product_puts_partial_changes() {
    let (base_url, _) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let changes = ProductUpdate {
        name: None,
        unit_price: Some(4.25),
        is_active: None,
    };
    let product = CatalogService::new(&http)
        .update_product(3, &changes)
        .await
        .unwrap();
    assert_eq!(product.id, 3);
    assert_eq!(product.unit_price, 4.25);
    assert!(product.is_active);
}

#[tokio::test]
async fn unauthorized_maps_to_typed_error() {
    let (base_url, _) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let result: Result<ApiResponse<()>, _> = http.post("/protected", &serde_json::json!({})).await;
    assert!(matches!(result, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn sale_form_submit_sends_one_request_and_resets() {
    let (base_url, _) = start_mock(Duration::ZERO).await;
    let http = client(&base_url);

    let claims = grifo_client::session::Claims {
        sub: "7".to_string(),
        username: "operador1".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test"),
    )
    .unwrap();
    let session = grifo_client::Session::from_token(token).unwrap();

    let mut form = grifo_client::SaleForm {
        quantity: 10.0,
        product: Some(shared::models::product::Product {
            id: 3,
            name: "Premium".to_string(),
            fuel: shared::models::fuel::FuelType::Premium,
            unit_price: 4.01,
            is_active: true,
        }),
        pump: Some(shared::models::pump::Pump {
            id: 1,
            number: 1,
            name: "Surtidor 1".to_string(),
            is_active: true,
            nozzles: vec![shared::models::pump::Nozzle {
                id: 31,
                pump_id: 1,
                product_id: 3,
                number: 1,
                is_active: true,
            }],
        }),
        ..grifo_client::SaleForm::new()
    };

    let sale = form.submit(Some(&session), &http).await.unwrap();
    assert_eq!(sale.final_amount, 47.32);
    // entry fields reset, selections survive
    assert_eq!(form.quantity, 0.0);
    assert!(form.product.is_some());
}

#[tokio::test]
async fn poller_skips_ticks_while_a_fetch_is_in_flight() {
    // Each fetch takes ~150ms against a 40ms interval: without the guard
    // the mock would see a request per tick.
    let (base_url, hits) = start_mock(Duration::from_millis(150)).await;
    let http = client(&base_url);

    let handle = RecentSalesPoller::new(http, Duration::from_millis(40)).spawn();
    let mut updates = handle.subscribe();

    tokio::time::sleep(Duration::from_millis(400)).await;
    handle.stop().await;

    let requests = hits.load(Ordering::SeqCst);
    assert!(requests >= 1, "poller never fetched");
    assert!(
        requests <= 4,
        "overlapping fetches were not skipped: {requests} requests in 400ms"
    );

    // The list eventually arrived
    assert!(updates.has_changed().unwrap_or(false) || !updates.borrow().is_empty());
}
