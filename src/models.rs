use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted todo item. `id` is assigned by the database on insert and
/// never accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Request payload for creating or updating a todo. All fields are
/// required; `completed` is stored exactly as sent, with no default.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Fixed set of tokens accepted by the `/items/type/{item_type}` demo route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Life,
    Universe,
    Everything,
}

#[derive(Debug, Deserialize)]
pub struct ItemTypeQuery {
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_request_requires_all_fields() {
        let result: Result<TodoRequest, _> =
            serde_json::from_str(r#"{"title":"Buy milk","description":"2%"}"#);
        assert!(result.is_err());

        let result: Result<TodoRequest, _> =
            serde_json::from_str(r#"{"title":"Buy milk","completed":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn todo_request_rejects_mistyped_completed() {
        let result: Result<TodoRequest, _> = serde_json::from_str(
            r#"{"title":"Buy milk","description":"2%","completed":"yes"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn todo_request_keeps_completed_false() {
        let input: TodoRequest = serde_json::from_str(
            r#"{"title":"Buy milk","description":"2%","completed":false}"#,
        )
        .unwrap();
        assert!(!input.completed);
    }

    #[test]
    fn todo_serializes_with_id() {
        let todo = Todo {
            id: 7,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], "2%");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn item_type_parses_lowercase_tokens() {
        for (token, expected) in [
            ("\"life\"", "life"),
            ("\"universe\"", "universe"),
            ("\"everything\"", "everything"),
        ] {
            let item_type: ItemType = serde_json::from_str(token).unwrap();
            assert_eq!(serde_json::to_value(item_type).unwrap(), expected);
        }

        let result: Result<ItemType, _> = serde_json::from_str("\"nothing\"");
        assert!(result.is_err());
    }
}
