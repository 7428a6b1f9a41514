use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::{Todo, TodoRequest};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    completed INTEGER NOT NULL
)";

/// Process-wide handle to the todo table. Cloning is cheap; every
/// operation checks a connection out of the pool for a single statement
/// and returns it on completion or failure.
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Open the database at `database_url` (e.g. `sqlite:todo_db.db`),
    /// creating the file and the todos table if they do not exist yet.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// All todos, most recently created first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed FROM todos ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a new todo and return it with the database-assigned id.
    pub async fn create_todo(&self, input: &TodoRequest) -> Result<Todo, ApiError> {
        let result =
            sqlx::query("INSERT INTO todos (title, description, completed) VALUES (?, ?, ?)")
                .bind(&input.title)
                .bind(&input.description)
                .bind(input.completed)
                .execute(&self.pool)
                .await?;

        Ok(Todo {
            id: result.last_insert_rowid(),
            title: input.title.clone(),
            description: input.description.clone(),
            completed: input.completed,
        })
    }

    /// Overwrite every non-id field of the todo with `id`. Returns
    /// `NotFound` if no such row exists.
    pub async fn update_todo(&self, id: i64, input: &TodoRequest) -> Result<Todo, ApiError> {
        let result =
            sqlx::query("UPDATE todos SET title = ?, description = ?, completed = ? WHERE id = ?")
                .bind(&input.title)
                .bind(&input.description)
                .bind(input.completed)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }

        Ok(Todo {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            completed: input.completed,
        })
    }
}
