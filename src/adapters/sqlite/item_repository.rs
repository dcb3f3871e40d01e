//! SQLite implementation of the ItemRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Item, NewItem};
use crate::domain::ports::ItemRepository;

/// SQLite implementation of [`ItemRepository`].
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Wrap an already migrated pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn get_all(&self) -> DomainResult<Vec<Item>> {
        let rows: Vec<ItemRow> = sqlx::query_as("SELECT id, text, is_completed FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as("SELECT id, text, is_completed FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Item::from))
    }

    async fn add(&self, item: &NewItem) -> DomainResult<Item> {
        let result = sqlx::query("INSERT INTO items (text, is_completed) VALUES (?, ?)")
            .bind(&item.text)
            .bind(item.is_completed)
            .execute(&self.pool)
            .await?;

        Ok(item.clone().with_id(result.last_insert_rowid()))
    }

    async fn update(&self, item: &Item) -> DomainResult<()> {
        sqlx::query("UPDATE items SET text = ?, is_completed = ? WHERE id = ?")
            .bind(&item.text)
            .bind(item.is_completed)
            .bind(item.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    text: String,
    is_completed: bool,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            is_completed: row.is_completed,
        }
    }
}
