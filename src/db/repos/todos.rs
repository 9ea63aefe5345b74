//! Todo repository
//!
//! Handles todo CRUD with:
//! - Windowed listing ordered by ascending id
//! - Fetch-then-merge inside a transaction for partial updates

use sqlx::SqlitePool;

use crate::models::{Page, Todo, TodoCreate, TodoUpdate};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List todos ordered by ascending id, skipping `offset` rows and
    /// returning at most `limit` rows.
    pub async fn list(&self, page: Page) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a todo, returning the full row with its storage-assigned id.
    pub async fn create(&self, input: TodoCreate) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(input.title.as_str())
        .bind(input.description.as_deref())
        .bind(input.completed)
        .fetch_one(self.pool)
        .await?;

        Ok(todo)
    }

    /// Apply a partial update to an existing todo.
    ///
    /// Fetch and write happen in one transaction: either the merged row
    /// is committed or nothing changes. A missing id yields NotFound with
    /// no side effects.
    pub async fn update(&self, id: i64, update: TodoUpdate) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin().await?;

        let mut todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound {
            resource: "todo",
            id,
        })?;

        todo.apply(update);

        sqlx::query(
            r#"
            UPDATE todos
            SET title = $1, description = $2, completed = $3
            WHERE id = $4
            "#,
        )
        .bind(todo.title.as_str())
        .bind(todo.description.as_deref())
        .bind(todo.completed)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(todo)
    }

    /// Delete a todo by id. A missing id yields NotFound.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "todo",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool_with_options};
    use crate::models::Field;

    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn sample_input() -> TodoCreate {
        TodoCreate {
            title: "Buy milk".into(),
            description: Some("2 liters".into()),
            completed: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_increasing_ids() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let first = repo.create(sample_input()).await.unwrap();
        let second = repo.create(sample_input()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn create_round_trips_fields() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(sample_input()).await.unwrap();
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description.as_deref(), Some("2 liters"));
        assert!(!created.completed);

        let listed = repo.list(Page::default()).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn list_orders_by_id_and_applies_window() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        for i in 0..5 {
            repo.create(TodoCreate {
                title: format!("todo {i}"),
                description: None,
                completed: false,
            })
            .await
            .unwrap();
        }

        let page = Page::new(Some(2), Some(1)).unwrap();
        let todos = repo.list(page).await.unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "todo 1");
        assert_eq!(todos[1].title, "todo 2");
        assert!(todos[0].id < todos[1].id);
    }

    #[tokio::test]
    async fn update_merges_only_set_fields() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(sample_input()).await.unwrap();
        let updated = repo
            .update(
                created.id,
                TodoUpdate {
                    completed: Field::Set(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
    }

    #[tokio::test]
    async fn update_with_empty_payload_is_a_no_op() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(sample_input()).await.unwrap();
        let updated = repo
            .update(created.id, TodoUpdate::default())
            .await
            .unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_clears_description_on_explicit_null() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(sample_input()).await.unwrap();
        let updated = repo
            .update(
                created.id,
                TodoUpdate {
                    description: Field::Set(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, None);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let err = repo.update(42, TodoUpdate::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = test_pool().await;
        let repo = TodoRepo::new(&pool);

        let created = repo.create(sample_input()).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.list(Page::default()).await.unwrap().is_empty());
        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
