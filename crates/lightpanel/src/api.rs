use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::render::PanelView;
use crate::router::EventRouter;

/// Response for the /v1/ping endpoint
#[derive(Serialize)]
struct PingResponse {
    status: String,
}

/// Response for the /v1/info endpoint
#[derive(Serialize)]
struct InfoResponse {
    version: String,
    hostname: String,
}

/// Shared application state
struct AppState {
    version: &'static str,
    router: Mutex<EventRouter>,
}

/// Handler for GET /v1/ping
#[tracing::instrument]
async fn ping() -> impl IntoResponse {
    tracing::debug!("Handling /v1/ping request");
    (
        StatusCode::OK,
        Json(PingResponse {
            status: "ok".to_string(),
        }),
    )
}

/// Handler for GET /v1/info
#[tracing::instrument(skip(state))]
async fn info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("Handling /v1/info request");

    let hostname = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    (
        StatusCode::OK,
        Json(InfoResponse {
            version: state.version.to_string(),
            hostname,
        }),
    )
}

/// Handler for GET /v1/panel
#[tracing::instrument(skip(state))]
async fn panel(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let router = state.router.lock().await;
    (StatusCode::OK, Json(PanelView::from(router.state())))
}

/// Handler for POST /v1/click/:target
///
/// Unrecognised targets are ignored; the current view is returned either way.
#[tracing::instrument(skip(state))]
async fn click(
    State(state): State<Arc<AppState>>,
    Path(target): Path<String>,
) -> impl IntoResponse {
    let mut router = state.router.lock().await;
    if router.click(&target).is_none() {
        tracing::debug!("Click on {} changed nothing", target);
    }
    (StatusCode::OK, Json(PanelView::from(router.state())))
}

/// Create the API router with all endpoints
fn create_router(router: EventRouter) -> Router {
    let state = Arc::new(AppState {
        version: env!("CARGO_PKG_VERSION"),
        router: Mutex::new(router),
    });

    Router::new()
        .route("/v1/ping", get(ping))
        .route("/v1/info", get(info))
        .route("/v1/panel", get(panel))
        .route("/v1/click/:target", post(click))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Start the HTTP API server
///
/// Binds to `listen:port` and serves the panel, owning `router` for the
/// lifetime of the server. Runs until `shutdown_rx` fires.
pub async fn serve(
    listen: String,
    port: u16,
    router: EventRouter,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let app = create_router(router);

    let addr: SocketAddr = format!("{}:{}", listen, port).parse()?;
    tracing::info!("Starting HTTP API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_rx.await.ok();
            tracing::info!("HTTP API server shutting down gracefully");
        })
        .await?;

    Ok(())
}
