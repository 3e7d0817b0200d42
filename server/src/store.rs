//! In-memory todo store.
//!
//! # Design
//! One `RwLock` guards both the ordered list and the id counter, so id
//! allocation and insertion order can never race. Lookups are linear scans;
//! the list is small and `list()` must preserve creation order anyway.

use tokio::sync::RwLock;

use crate::error::TodoError;
use crate::types::{Health, Todo, UpdateTodo};

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`, which
/// clients commonly treat as blank but `char::is_whitespace` does not.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Authoritative collection of todos plus the next-id counter.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All todos in creation order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    pub async fn get(&self, id: u64) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.todos.iter().find(|t| t.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Create a todo from `text`, stored trimmed.
    ///
    /// Fails with `TodoError::Validation` when `text` is absent or blank.
    /// Ids come from a counter that never goes backwards, so ids of deleted
    /// todos are not handed out again.
    pub async fn create(&self, text: Option<String>) -> Result<Todo, TodoError> {
        let text = text.ok_or_else(TodoError::missing_text)?;
        let text = text.trim_matches(is_blank);
        if text.is_empty() {
            return Err(TodoError::empty_text());
        }

        let mut inner = self.inner.write().await;
        let todo = Todo {
            id: inner.next_id,
            text: text.to_string(),
            completed: false,
        };
        inner.todos.push(todo.clone());
        inner.next_id += 1;
        tracing::debug!(id = todo.id, "todo created");
        Ok(todo)
    }

    /// Apply the present fields of `changes` to the todo with `id`.
    ///
    /// `text` replaces the stored value verbatim: unlike `create`, it is not
    /// trimmed and may be empty.
    pub async fn update(&self, id: u64, changes: UpdateTodo) -> Result<Todo, TodoError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        if let Some(text) = changes.text {
            todo.text = text;
        }
        if let Some(completed) = changes.completed {
            todo.completed = completed;
        }
        tracing::debug!(id, completed = todo.completed, "todo updated");
        Ok(todo.clone())
    }

    /// Remove the todo with `id`. Unknown ids are a no-op.
    pub async fn delete(&self, id: u64) {
        let mut inner = self.inner.write().await;
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);
        if inner.todos.len() < before {
            tracing::debug!(id, remaining = inner.todos.len(), "todo deleted");
        } else {
            tracing::debug!(id, "delete of unknown todo ignored");
        }
    }

    pub fn health(&self) -> Health {
        Health::ok()
    }
}
