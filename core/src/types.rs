//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! so the client carries no axum or tokio dependency. Integration tests catch
//! any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server trims `text` and
/// rejects it when blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub app: String,
}

impl Health {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Summary counts shown alongside a todo list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

impl TodoStats {
    pub fn from_todos(todos: &[Todo]) -> Self {
        Self {
            total: todos.len(),
            completed: todos.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn active(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Which todos a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }

    /// The matching todos, in their original order.
    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            text: format!("todo {id}"),
            completed,
        }
    }

    #[test]
    fn stats_count_completed() {
        let stats = TodoStats::from_todos(&[todo(1, true), todo(2, false), todo(3, true)]);
        assert_eq!(stats, TodoStats { total: 3, completed: 2 });
        assert_eq!(stats.active(), 1);
    }

    #[test]
    fn stats_of_empty_list() {
        assert_eq!(TodoStats::from_todos(&[]), TodoStats::default());
    }

    #[test]
    fn active_never_underflows() {
        let stats = TodoStats { total: 1, completed: 3 };
        assert_eq!(stats.active(), 0);
    }

    #[test]
    fn filter_all_keeps_everything() {
        let todos = [todo(1, true), todo(2, false)];
        let ids: Vec<u64> = TodoFilter::All.apply(&todos).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(TodoFilter::default(), TodoFilter::All);
    }

    #[test]
    fn filter_active_keeps_open_todos() {
        let todos = [todo(1, true), todo(2, false), todo(3, false)];
        let ids: Vec<u64> = TodoFilter::Active.apply(&todos).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!TodoFilter::Active.matches(&todo(4, true)));
    }

    #[test]
    fn filter_completed_keeps_done_todos() {
        let todos = [todo(1, true), todo(2, false), todo(3, true)];
        let ids: Vec<u64> = TodoFilter::Completed.apply(&todos).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(TodoFilter::Completed.apply(&[]).is_empty());
    }

    #[test]
    fn update_skips_absent_fields() {
        let input = UpdateTodo {
            text: None,
            completed: Some(false),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"completed": false}));
    }
}
