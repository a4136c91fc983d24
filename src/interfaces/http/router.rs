//! API Router with Swagger UI

use std::sync::Arc;

use axum::{extract::FromRef, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::CatalogService;
use crate::interfaces::http::common::{ErrorResponse, PaginatedResponse};
use crate::interfaces::http::modules::health;
use crate::interfaces::http::modules::items::{self, ItemDto, ItemsState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;

/// Unified router state. Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<CatalogService>,
    pub metrics: PrometheusHandle,
}

impl ApiState {
    pub fn new(catalog: Arc<CatalogService>, metrics: PrometheusHandle) -> Self {
        Self { catalog, metrics }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for ItemsState {
    fn from_ref(s: &ApiState) -> Self {
        ItemsState {
            catalog: Arc::clone(&s.catalog),
        }
    }
}

impl FromRef<ApiState> for MetricsState {
    fn from_ref(s: &ApiState) -> Self {
        MetricsState {
            handle: s.metrics.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::list_items,
    ),
    components(
        schemas(
            health::HealthResponse,
            ItemDto,
            ErrorResponse,
            PaginatedResponse<ItemDto>,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Items", description = "Read-only catalog: search and pagination"),
    ),
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "Read-only item catalog with case-insensitive search and page-based pagination",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    // CORS configuration: any origin may read the catalog
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/items", get(items::list_items))
        .route("/metrics", get(prometheus_metrics))
        // Runs after routing so the matched path is available for labels
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .with_state(state)
        .merge(swagger_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;

    use crate::infrastructure::InMemoryItemRepository;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn app() -> Router {
        let catalog = Arc::new(CatalogService::new(Arc::new(
            InMemoryItemRepository::default(),
        )));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(ApiState::new(catalog, handle))
    }

    async fn send(req: Request<Body>) -> Response {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let resp = send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(body: &Value) -> Vec<u64> {
        body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn items_default_to_first_page_of_ten() {
        let (status, body) = get_json("/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
        assert_eq!(body["page"], 1);
        assert_eq!(body["page_size"], 10);
        assert_eq!(body["total_items"], 150);
        assert_eq!(body["total_pages"], 15);
        assert_eq!(
            body["items"][0],
            serde_json::json!({"id": 1, "name": "Item 1", "description": "Description for item 1"})
        );
    }

    #[tokio::test]
    async fn items_last_page() {
        let (status, body) = get_json("/items?page=15&page_size=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), (141..=150).collect::<Vec<_>>());
        assert_eq!(body["total_pages"], 15);
    }

    #[tokio::test]
    async fn page_out_of_range_is_404() {
        let (status, body) = get_json("/items?page=16&page_size=10").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Page out of range"}));
    }

    #[tokio::test]
    async fn filtered_page_out_of_range_is_404() {
        let (status, body) = get_json("/items?page=7&page_size=10&search=Item%201").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), (146..=150).collect::<Vec<_>>());
        assert_eq!(body["total_pages"], 7);

        let (status, body) = get_json("/items?page=8&page_size=10&search=Item%201").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Page out of range"}));
    }

    #[tokio::test]
    async fn page_beyond_u32_is_404_not_422() {
        let (status, body) = get_json("/items?page=4294967296").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Page out of range");
    }

    #[tokio::test]
    async fn search_is_url_decoded_and_case_insensitive() {
        let (status, body) = get_json("/items?search=iTeM%2042").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![42]);
        assert_eq!(body["total_items"], 1);
        assert_eq!(body["total_pages"], 1);
    }

    #[tokio::test]
    async fn search_without_matches_is_empty_for_any_page() {
        let (status, body) = get_json("/items?page=7&search=nonexistent-xyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "items": [],
                "page": 7,
                "page_size": 10,
                "total_items": 0,
                "total_pages": 0
            })
        );
    }

    #[tokio::test]
    async fn empty_search_matches_everything() {
        let (status, body) = get_json("/items?search=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_items"], 150);
    }

    #[tokio::test]
    async fn invalid_parameters_are_422() {
        for uri in [
            "/items?page=0",
            "/items?page=-1",
            "/items?page=abc",
            "/items?page_size=0",
            "/items?page_size=101",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            assert!(body["detail"].is_string(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn page_size_validation_names_the_field() {
        let (_, body) = get_json("/items?page_size=101").await;
        assert_eq!(body["detail"], "page_size: must be between 1 and 100");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let req = Request::builder()
            .uri("/items")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn cors_preflight_succeeds() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/items")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert!(resp.status().is_success());
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let req = Request::builder()
            .uri("/items?page=99")
            .header(REQUEST_ID_HEADER, "req-42")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[REQUEST_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn openapi_document_lists_endpoints() {
        let (status, body) = get_json("/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/items"]["get"].is_object());
        assert!(body["paths"]["/health"]["get"].is_object());
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_text() {
        let resp = send(Request::builder().uri("/metrics").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let resp = send(Request::builder().uri("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
