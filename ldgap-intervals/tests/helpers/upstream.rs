//! Fake upstream for integration tests
//!
//! One in-process axum server plays both external parties:
//! - `GET /sparql` answers discovery queries with a canned response
//! - any other path serves a registered Turtle document, or 404

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Request seen by the fake upstream
#[derive(Debug, Clone)]
pub struct Hit {
    pub path: String,
    pub accept: Option<String>,
    pub query: Option<String>,
}

#[derive(Default)]
struct UpstreamState {
    sparql: Mutex<(u16, String)>,
    documents: Mutex<HashMap<String, String>>,
    hits: Mutex<Vec<Hit>>,
}

/// Running fake upstream
pub struct FakeUpstream {
    base: String,
    state: Arc<UpstreamState>,
}

impl FakeUpstream {
    /// Bind to an ephemeral port and start serving
    pub async fn start() -> Self {
        let state = Arc::new(UpstreamState::default());
        *state.sparql.lock().unwrap() = (200, json!({ "results": { "bindings": [] } }).to_string());

        let app = Router::new()
            .route("/sparql", get(sparql))
            .fallback(document)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            state,
        }
    }

    pub fn sparql_url(&self) -> String {
        format!("{}/sparql", self.base)
    }

    /// Absolute IRI of a path on this server
    pub fn iri(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Serve `turtle` at `path`
    pub fn add_document(&self, path: &str, turtle: &str) {
        self.state
            .documents
            .lock()
            .unwrap()
            .insert(path.to_string(), turtle.to_string());
    }

    /// Answer discovery with `(graph, value)` URI bindings
    pub fn set_bindings(&self, bindings: &[(&str, serde_json::Value)]) {
        let bindings: Vec<_> = bindings
            .iter()
            .map(|(graph, value)| {
                json!({
                    "dsgraph": { "type": "uri", "value": graph },
                    "o": value,
                })
            })
            .collect();
        let body = json!({
            "head": { "vars": ["dsgraph", "o"] },
            "results": { "bindings": bindings },
        });
        *self.state.sparql.lock().unwrap() = (200, body.to_string());
    }

    /// Answer discovery with an arbitrary status and body
    pub fn set_sparql_response(&self, status: u16, body: &str) {
        *self.state.sparql.lock().unwrap() = (status, body.to_string());
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }

    /// Number of requests for `path`
    pub fn hits_for(&self, path: &str) -> usize {
        self.hits().iter().filter(|h| h.path == path).count()
    }
}

/// URI binding value for `set_bindings`
pub fn uri(value: &str) -> serde_json::Value {
    json!({ "type": "uri", "value": value })
}

/// Literal binding value for `set_bindings`
pub fn literal(value: &str) -> serde_json::Value {
    json!({ "type": "literal", "value": value })
}

fn record(state: &UpstreamState, uri: &Uri, headers: &HeaderMap, query: Option<String>) {
    state.hits.lock().unwrap().push(Hit {
        path: uri.path().to_string(),
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        query,
    });
}

async fn sparql(
    State(state): State<Arc<UpstreamState>>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&state, &uri, &headers, params.get("query").cloned());

    let (status, body) = state.sparql.lock().unwrap().clone();
    let status = StatusCode::from_u16(status).unwrap();
    (
        status,
        [(header::CONTENT_TYPE, "application/sparql-results+json")],
        body,
    )
        .into_response()
}

async fn document(State(state): State<Arc<UpstreamState>>, uri: Uri, headers: HeaderMap) -> Response {
    record(&state, &uri, &headers, None);

    let document = state.documents.lock().unwrap().get(uri.path()).cloned();
    match document {
        Some(turtle) => ([(header::CONTENT_TYPE, "text/turtle")], turtle).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
