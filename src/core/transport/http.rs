//! HTTP front controller.
//!
//! Every path except `/health` is a catalog resource. GET returns the
//! document, HEAD only checks that it exists, anything else is refused.
//! Failures are rendered as a small JSON body next to the status code.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde::Serialize;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use super::{HttpConfig, OutputFormat, TransportError, TransportResult};
use crate::core::{Config, FdpServer};
use crate::domains::fdp::{FdpResponse, ResolveRequest};
use crate::domains::routing::RequestPath;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    server: FdpServer,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub version: String,
    pub messages: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ErrorBody {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            messages: Vec::new(),
            warnings: Vec::new(),
            errors,
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Build the router serving `server`.
    pub fn router(&self, server: FdpServer) -> Router {
        let state = AppState { server };

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/", any(handle_root))
            .route("/{*path}", any(handle_path))
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http());

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods([Method::GET, Method::HEAD])
                .allow_headers(cors::Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until the server stops.
    pub async fn run(self, server: FdpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → Catalog: GET /");
        info!("  → Health:  GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn handle_root(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    match body_wanted(&method) {
        Ok(emit_body) => serve(&state, &uri, &headers, "", emit_body).await,
        Err(response) => response,
    }
}

async fn handle_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let emit_body = match body_wanted(&method) {
        Ok(emit_body) => emit_body,
        Err(response) => return response,
    };

    match path {
        Ok(Path(path)) => serve(&state, &uri, &headers, &path, emit_body).await,
        Err(rejection) => {
            info!("Rejected path {}: {}", uri.path(), rejection);
            error_response(
                StatusCode::BAD_REQUEST,
                vec![format!("Could not parse requested URL '{}'.", uri.path())],
                emit_body,
            )
        }
    }
}

/// GET wants a body, HEAD does not; other methods get a 405.
fn body_wanted(method: &Method) -> Result<bool, Response> {
    match *method {
        Method::GET => Ok(true),
        Method::HEAD => Ok(false),
        _ => {
            let mut response = error_response(
                StatusCode::METHOD_NOT_ALLOWED,
                vec![format!("Method {} is not allowed here.", method)],
                true,
            );
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
            Err(response)
        }
    }
}

async fn serve(
    state: &AppState,
    uri: &Uri,
    headers: &HeaderMap,
    raw_path: &str,
    emit_body: bool,
) -> Response {
    let format_param = query_param(uri, "format");
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    let format = OutputFormat::negotiate(format_param.as_deref(), accept);

    let request = ResolveRequest {
        path: RequestPath::parse(raw_path),
        base_url: base_url(state.server.config(), uri, headers),
        emit_body,
    };

    let outcome = state.server.resolve(&request).await;
    render(outcome, format, emit_body)
}

fn render(outcome: FdpResponse, format: OutputFormat, emit_body: bool) -> Response {
    if !outcome.is_success() {
        return error_response(outcome.status, outcome.errors, emit_body);
    }

    let body = match (&outcome.graph, emit_body) {
        (Some(graph), true) => match format.render(graph) {
            Ok(body) => body,
            Err(e) => {
                error!("Could not serialise response: {}", e);
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Could not serialise the response.".to_string()],
                    true,
                );
            }
        },
        _ => String::new(),
    };

    (
        outcome.status,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response()
}

fn error_response(status: StatusCode, errors: Vec<String>, emit_body: bool) -> Response {
    if !emit_body {
        return (status, [(header::CONTENT_TYPE, "application/json")]).into_response();
    }
    (status, Json(ErrorBody::new(errors))).into_response()
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        vec!["An internal error occurred while handling this request.".to_string()],
        true,
    )
}

/// First value of a query parameter, form-decoded.
fn query_param(uri: &Uri, name: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(uri.query()?).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// The configured base URL, or one derived from the request's host.
fn base_url(config: &Config, uri: &Uri, headers: &HeaderMap) -> String {
    if let Some(base_url) = &config.server.base_url {
        return base_url.clone();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");

    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    format!("{}://{}/", scheme, host)
}
