use serde::{Deserialize, Serialize};

/// A single todo item as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Request body for `POST /api/todos`. `text` is optional here so a missing
/// field reaches the store and is reported as a validation error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}

/// Request body for `PUT /api/todos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub app: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            app: "todo-app".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "text": "Test", "completed": false}));
    }

    #[test]
    fn create_todo_tolerates_missing_text() {
        let input: CreateTodo = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(input.text.is_none());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.text.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(input.text.is_none());
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn update_todo_rejects_non_bool_completed() {
        let result: Result<UpdateTodo, _> = serde_json::from_str(r#"{"completed":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn health_payload_is_fixed() {
        let json = serde_json::to_value(Health::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok", "app": "todo-app"}));
    }
}
