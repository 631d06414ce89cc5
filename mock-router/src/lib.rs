//! Minimal stand-in for an edge router, used to exercise unfolded test inputs
//! end-to-end.
//!
//! Every request is matched against a static [`RouteTable`] by authority
//! (the `Host` header), method and path prefix. The first matching route
//! wins and its destination is returned as JSON, and as `host:port` in the
//! `x-destination` response header so that HEAD requests can be checked too.
//! Unmatched requests get 404.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Response header carrying the resolved destination as `host:port`.
pub const DESTINATION_HEADER: &str = "x-destination";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub number: i16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub host: String,
    pub port: Port,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub authority: String,
    /// Methods this route accepts. Empty accepts any method.
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default = "root_prefix")]
    pub path_prefix: String,
    pub destination: Destination,
}

fn root_prefix() -> String {
    "/".to_string()
}

impl Route {
    fn matches(&self, authority: &str, method: &Method, path: &str) -> bool {
        self.authority.eq_ignore_ascii_case(authority)
            && (self.methods.is_empty() || self.methods.iter().any(|m| m == method.as_str()))
            && path.starts_with(&self.path_prefix)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteTable {
    pub routes: Vec<Route>,
}

impl RouteTable {
    pub fn resolve(&self, authority: &str, method: &Method, path: &str) -> Option<&Destination> {
        self.routes
            .iter()
            .find(|route| route.matches(authority, method, path))
            .map(|route| &route.destination)
    }
}

type Table = Arc<RouteTable>;

pub fn app(table: RouteTable) -> Router {
    Router::new().fallback(route_request).with_state(Arc::new(table))
}

pub async fn run(listener: TcpListener, table: RouteTable) -> Result<(), std::io::Error> {
    axum::serve(listener, app(table)).await
}

async fn route_request(
    State(table): State<Table>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let authority = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .ok_or(StatusCode::BAD_REQUEST)?;

    match table.resolve(authority, &method, uri.path()) {
        Some(destination) => {
            tracing::debug!(%authority, %method, path = uri.path(), host = %destination.host, "routed");
            let target = format!("{}:{}", destination.host, destination.port.number);
            Ok(([(DESTINATION_HEADER, target)], Json(destination.clone())))
        }
        None => {
            tracing::debug!(%authority, %method, path = uri.path(), "no route");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
