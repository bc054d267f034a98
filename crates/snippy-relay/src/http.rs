//! HTTP surface of the relay
//!
//! `POST /api/performance` takes `{code, language}` and streams the model
//! answer back as `text/plain`. Anything that fails before streaming
//! starts is a 500 with the error text as body. `GET /health` answers `ok`.
//!
//! An `x-request-id` header is reused as the correlation id of the analysis;
//! otherwise one is minted. Either way it is echoed on the response.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use bytes::Bytes;
use snippy_core_types::RequestId;
use tokio::net::TcpListener;

use crate::error::{RelayError, Result};
use crate::prompt::AnalysisRequest;
use crate::relay::PerformanceRelay;

pub const PERFORMANCE_ROUTE: &str = "/api/performance";
pub const HEALTH_ROUTE: &str = "/health";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct AppState {
    relay: Arc<PerformanceRelay>,
}

pub fn router(relay: PerformanceRelay) -> Router {
    Router::new()
        .route(PERFORMANCE_ROUTE, post(performance))
        .route(HEALTH_ROUTE, get(health))
        .with_state(AppState {
            relay: Arc::new(relay),
        })
}

async fn health() -> &'static str {
    "ok"
}

fn request_id_from(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| RequestId::from_string(value.to_string()))
        .unwrap_or_default()
}

fn with_request_id(mut response: Response, request_id: &RequestId) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

async fn performance(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let request_id = request_id_from(&headers);
    let request: AnalysisRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            let fault = server_fault(RelayError::InvalidRequest(e.to_string()), &request_id);
            return with_request_id(fault, &request_id);
        }
    };

    let response = match state
        .relay
        .analyze_with_id(&request, request_id.clone())
        .await
    {
        Ok(fragments) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            Body::from_stream(fragments),
        )
            .into_response(),
        Err(err) => server_fault(err, &request_id),
    };
    with_request_id(response, &request_id)
}

fn server_fault(err: RelayError, request_id: &RequestId) -> Response {
    tracing::error!(
        route = PERFORMANCE_ROUTE,
        request_id = request_id.as_str(),
        error = %err,
        "analysis request failed"
    );
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain")],
        err.to_string(),
    )
        .into_response()
}

/// Bind `addr` and serve until the process is stopped
///
/// # Errors
///
/// `RelayError::Server` if the address cannot be bound or serving fails.
pub async fn serve(addr: SocketAddr, relay: PerformanceRelay) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| RelayError::Server(format!("bind {}: {}", addr, e)))?;

    tracing::info!(
        addr = %addr,
        provider = relay.provider().name(),
        model = relay.provider().model(),
        "performance relay listening"
    );

    axum::serve(listener, router(relay))
        .await
        .map_err(|e| RelayError::Server(e.to_string()))
}
