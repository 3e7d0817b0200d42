//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ErrorBody};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Health, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: u64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        bodyless(HttpMethod::Get, self.todos_url())
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, self.todos_url(), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, self.todo_url(id), input)
    }

    /// Flip `todo.completed`, sending only that field.
    pub fn build_toggle_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let input = UpdateTodo {
            text: None,
            completed: Some(!todo.completed),
        };
        self.build_update_todo(todo.id, &input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        bodyless(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn build_health(&self) -> HttpRequest {
        bodyless(HttpMethod::Get, format!("{}/api/health", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        from_body(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    /// The server answers 204 whether or not the todo existed.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }
}

fn bodyless(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn from_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => {
            // Fall back to the raw body if the server did not send its usual shape.
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|e| e.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::BadRequest { message })
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
