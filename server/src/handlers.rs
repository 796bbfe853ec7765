//! Request handlers, one per route.
//!
//! Each handler makes exactly one `TodoStore` call and maps the outcome:
//! a record becomes the JSON body (201 on create, 200 otherwise),
//! `Lookup::NotFound` becomes an empty 404, and a `StoreError` is reported
//! to the `ErrorReporter` and answered with 500 `{"message": ...}`.
//! `delete_todo` only forwards its failures; see `error::fallback_responder`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use todo_core::{Fields, Lookup, StoreError, Todo};

use crate::error::{ForwardedFailure, StoreFailure};
use crate::AppState;

pub async fn hello() -> Json<&'static str> {
    Json("Hello World")
}

pub async fn create_todo(State(state): State<AppState>, Json(fields): Json<Fields>) -> Response {
    match state.store.create(fields).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => answer(&state, "create_todo", err),
    }
}

pub async fn get_todos(State(state): State<AppState>) -> Response {
    match state.store.find_all().await {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => answer(&state, "get_todos", err),
    }
}

pub async fn get_todo_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.find_by_id(&id).await {
        Ok(lookup) => found_or_404(lookup),
        Err(err) => answer(&state, "get_todo_by_id", err),
    }
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Fields>,
) -> Response {
    match state.store.update_by_id(&id, patch).await {
        Ok(lookup) => found_or_404(lookup),
        Err(err) => answer(&state, "update_todo", err),
    }
}

pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.delete_by_id(&id).await {
        Ok(lookup) => found_or_404(lookup),
        Err(err) => forward(&state, "delete_todo", err),
    }
}

fn found_or_404(lookup: Lookup<Todo>) -> Response {
    match lookup {
        Lookup::Found(todo) => Json(todo).into_response(),
        Lookup::NotFound => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Report, then answer locally.
fn answer(state: &AppState, operation: &'static str, err: StoreError) -> Response {
    state.reporter.report(operation, &err);
    StoreFailure(err).into_response()
}

/// Report, then leave the answer to the fallback responder.
fn forward(state: &AppState, operation: &'static str, err: StoreError) -> Response {
    state.reporter.report(operation, &err);
    ForwardedFailure(err).into_response()
}
