//! HTTP CRUD service for todo documents.
//!
//! # Overview
//! `app` builds the axum router over an explicit `AppState`; `run` serves it
//! on a listener the caller has already bound. The binary in `main.rs` is the
//! only place that picks a store engine and installs logging.
//!
//! # Design
//! - No global store handle: the `TodoStore` and the `ErrorReporter` travel
//!   in `AppState`, so tests can swap either.
//! - `error::fallback_responder` wraps every route and answers failures that
//!   a handler forwarded instead of answering.
//! - `TraceLayer` sits outermost so request spans see the final status.

pub mod config;
pub mod error;
pub mod handlers;
pub mod report;
pub mod telemetry;

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use todo_core::TodoStore;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_todo, delete_todo, get_todo_by_id, get_todos, hello, update_todo};
use crate::report::{ErrorReporter, TracingReporter};

pub use error::ErrorBody;
pub use todo_core::Todo;

/// Everything a handler needs, shared by clone across requests.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    pub reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    /// State that reports failures through `tracing`.
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: impl ErrorReporter) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/todos", get(get_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo_by_id).put(update_todo).delete(delete_todo),
        )
        .layer(middleware::from_fn(error::fallback_responder))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
