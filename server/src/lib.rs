//! In-memory todo service exposed over HTTP.
//!
//! # Overview
//! `TodoStore` owns the todos and the id counter; `app` wires it into an
//! axum `Router` under `/api`. The store is created once and shared by
//! `Arc`, so every test can build a fresh, isolated app.

pub mod config;
pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::TodoError;
pub use store::TodoStore;
pub use types::{CreateTodo, Health, Todo, UpdateTodo};

pub type SharedStore = Arc<TodoStore>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(Arc::new(TodoStore::new()))
}

pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` until `shutdown` resolves.
pub async fn run_until<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}

fn todo_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, TodoError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(%rejection, "unroutable todo id");
        TodoError::BadPath
    })
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    // A missing or unparsable body is reported the same way as a body
    // without `text`; well-formed JSON of the wrong shape gets its own message.
    let input = match payload {
        Ok(Json(input)) => input,
        Err(JsonRejection::JsonDataError(rejection)) => {
            tracing::debug!(%rejection, "create body has wrong shape");
            return Err(TodoError::invalid_text());
        }
        Err(_) => CreateTodo::default(),
    };
    let todo = store.create(input.text).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, TodoError> {
    let id = todo_id(id)?;
    let Json(changes) = payload.map_err(|rejection| TodoError::Validation(rejection.body_text()))?;
    let todo = store.update(id, changes).await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, TodoError> {
    let id = todo_id(id)?;
    store.delete(id).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn health(State(store): State<SharedStore>) -> Json<Health> {
    Json(store.health())
}
