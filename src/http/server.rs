//! HTTP server setup and the relay endpoint.
//!
//! # Responsibilities
//! - Create the Axum router with the single relay route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Hold the shared outbound client and clock
//! - Map relay outcomes to HTTP responses
//!
//! # Design Decisions
//! - One shared reqwest client; per-request data never outlives the handler
//! - The outbound client has no timeout: the relay call blocks until the
//!   downstream answers or the transport fails
//! - A `status: 400` field inside the result JSON is what selects the error
//!   response, whether it came from a transport failure or the downstream
//!   body itself

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::observability::metrics;
use crate::relay::signature::{sign, Clock, SystemClock};
use crate::relay::{build_url, forward, InboundRequest};

/// Application state injected into the relay handler.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub clock: Arc<dyn Clock>,
}

/// HTTP server hosting the relay endpoint.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server with an explicit clock (tests pin the nonce here).
    pub fn with_clock(config: RelayConfig, clock: Arc<dyn Clock>) -> Self {
        let state = AppState {
            client: reqwest::Client::new(),
            clock,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", post(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// The relay endpoint.
/// Validates fields, signs the outbound request, forwards it once, and
/// translates the result.
async fn relay_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(inbound): Json<InboundRequest>,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let resolved = match inbound.resolve() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Rejecting relay request");
            metrics::record_relay("none", 422, start_time);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let url = build_url(
        &resolved.protocol,
        &resolved.uri,
        &resolved.controller,
        &resolved.action,
    );
    let hmac_header = sign(
        state.clock.as_ref(),
        &resolved.key,
        &resolved.method,
        &url,
        &resolved.body,
    );

    tracing::debug!(
        request_id = %request_id,
        method = %resolved.method,
        url = %url,
        "Relaying request"
    );

    let outcome = forward::send_request(
        &state.client,
        &resolved.method,
        &url,
        resolved.body.clone(),
        &hmac_header,
    )
    .await;

    // The downstream body is trusted to carry its own status field; a 400
    // there is treated the same as a local transport failure.
    if is_error_status(&outcome) {
        let message = outcome.get("error").cloned().unwrap_or(Value::Null);
        tracing::warn!(request_id = %request_id, url = %url, error = %message, "Relay failed");
        metrics::record_relay(&resolved.method, 400, start_time);
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": message, "status": 400 })),
        )
            .into_response();
    }

    metrics::record_relay(&resolved.method, 200, start_time);
    (StatusCode::OK, Json(outcome)).into_response()
}

/// True when the result JSON signals an error via its `status` field.
/// Downstream bodies report the field as either a number or a string, so
/// both `400` and `"400"` count.
fn is_error_status(outcome: &Value) -> bool {
    match outcome.get("status") {
        Some(Value::Number(n)) => n.as_i64() == Some(400),
        Some(Value::String(s)) => s == "400",
        _ => false,
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
