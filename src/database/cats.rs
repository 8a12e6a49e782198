use sqlx::PgPool;

use crate::database::models::Cat;

/// New cat values, already validated at the handler layer.
#[derive(Debug)]
pub struct NewCat {
    pub name: String,
    pub age: i32,
    pub breed: String,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Default)]
pub struct CatChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
}

pub struct CatsRepository {
    pool: PgPool,
}

impl CatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewCat) -> Result<Cat, sqlx::Error> {
        sqlx::query_as::<_, Cat>(
            "INSERT INTO cats (name, age, breed) VALUES ($1, $2, $3) \
             RETURNING id, name, age, breed, created_at, updated_at",
        )
        .bind(new.name)
        .bind(new.age)
        .bind(new.breed)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list(&self) -> Result<Vec<Cat>, sqlx::Error> {
        sqlx::query_as::<_, Cat>(
            "SELECT id, name, age, breed, created_at, updated_at FROM cats ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find(&self, id: i32) -> Result<Option<Cat>, sqlx::Error> {
        sqlx::query_as::<_, Cat>(
            "SELECT id, name, age, breed, created_at, updated_at FROM cats WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns `None` when no cat has that id.
    pub async fn update(&self, id: i32, changes: CatChanges) -> Result<Option<Cat>, sqlx::Error> {
        sqlx::query_as::<_, Cat>(
            "UPDATE cats SET \
                 name = COALESCE($2, name), \
                 age = COALESCE($3, age), \
                 breed = COALESCE($4, breed), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, age, breed, created_at, updated_at",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.age)
        .bind(changes.breed)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
