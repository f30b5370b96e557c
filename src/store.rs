//! Store access for the `"SuperHeroes"` table.
//!
//! Every call acquires one pooled connection and holds it for the duration of the call.
//! The connection goes back to the pool when the guard drops, on success, error, or unwind.
//! Mutations re-read the whole table on that same connection.

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::model::SuperHero;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Postgres;

const SELECT_ALL: &str =
    r#"SELECT "Id", "Name", "FirstName", "LastName", "Place" FROM "SuperHeroes" ORDER BY "Id""#;
const SELECT_BY_ID: &str =
    r#"SELECT "Id", "Name", "FirstName", "LastName", "Place" FROM "SuperHeroes" WHERE "Id" = $1"#;
const INSERT: &str =
    r#"INSERT INTO "SuperHeroes" ("Name", "FirstName", "LastName", "Place") VALUES ($1, $2, $3, $4)"#;
const UPDATE: &str =
    r#"UPDATE "SuperHeroes" SET "Name" = $1, "FirstName" = $2, "LastName" = $3, "Place" = $4 WHERE "Id" = $5"#;
const DELETE: &str = r#"DELETE FROM "SuperHeroes" WHERE "Id" = $1"#;

/// Outcome of an insert, update or delete: rows touched plus the table as read afterwards.
#[derive(Clone, Debug, Default)]
pub struct Mutation {
    pub rows_affected: u64,
    pub heroes: Vec<SuperHero>,
}

#[async_trait]
pub trait HeroStore: Send + Sync {
    /// All rows ordered by id.
    async fn list(&self) -> Result<Vec<SuperHero>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<SuperHero>, StoreError>;

    /// Insert name/first name/last name/place; the store assigns the id.
    async fn insert(&self, hero: &SuperHero) -> Result<Mutation, StoreError>;

    /// Overwrite the non-key fields of the row whose id is `hero.id`.
    async fn update(&self, hero: &SuperHero) -> Result<Mutation, StoreError>;

    async fn delete(&self, id: i32) -> Result<Mutation, StoreError>;

    /// Round-trip check used by readiness.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct PgHeroStore {
    pool: PgPool,
}

impl PgHeroStore {
    /// Build the pool from config without dialing; the first operation opens the first connection.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy(&config.url)
            .map_err(StoreError::Connect)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::Connect)
    }

    async fn select_all(
        conn: &mut PoolConnection<Postgres>,
    ) -> Result<Vec<SuperHero>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let heroes = sqlx::query_as::<_, SuperHero>(SELECT_ALL)
            .fetch_all(&mut **conn)
            .await?;
        Ok(heroes)
    }
}

#[async_trait]
impl HeroStore for PgHeroStore {
    async fn list(&self) -> Result<Vec<SuperHero>, StoreError> {
        let mut conn = self.acquire().await?;
        Self::select_all(&mut conn).await
    }

    async fn get(&self, id: i32) -> Result<Option<SuperHero>, StoreError> {
        let mut conn = self.acquire().await?;
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let hero = sqlx::query_as::<_, SuperHero>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(hero)
    }

    async fn insert(&self, hero: &SuperHero) -> Result<Mutation, StoreError> {
        let mut conn = self.acquire().await?;
        tracing::debug!(sql = %INSERT, "query");
        let done = sqlx::query(INSERT)
            .bind(&hero.name)
            .bind(&hero.first_name)
            .bind(&hero.last_name)
            .bind(&hero.place)
            .execute(&mut *conn)
            .await?;
        let heroes = Self::select_all(&mut conn).await?;
        Ok(Mutation {
            rows_affected: done.rows_affected(),
            heroes,
        })
    }

    async fn update(&self, hero: &SuperHero) -> Result<Mutation, StoreError> {
        let mut conn = self.acquire().await?;
        tracing::debug!(sql = %UPDATE, id = hero.id, "query");
        let done = sqlx::query(UPDATE)
            .bind(&hero.name)
            .bind(&hero.first_name)
            .bind(&hero.last_name)
            .bind(&hero.place)
            .bind(hero.id)
            .execute(&mut *conn)
            .await?;
        let heroes = Self::select_all(&mut conn).await?;
        Ok(Mutation {
            rows_affected: done.rows_affected(),
            heroes,
        })
    }

    async fn delete(&self, id: i32) -> Result<Mutation, StoreError> {
        let mut conn = self.acquire().await?;
        tracing::debug!(sql = %DELETE, id, "query");
        let done = sqlx::query(DELETE).bind(id).execute(&mut *conn).await?;
        let heroes = Self::select_all(&mut conn).await?;
        Ok(Mutation {
            rows_affected: done.rows_affected(),
            heroes,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").fetch_optional(&mut *conn).await?;
        Ok(())
    }
}
