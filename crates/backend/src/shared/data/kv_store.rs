use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

/// Локальное key-value хранилище: один ключ - одно JSON-значение целиком
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Полностью заменить значение ключа
    async fn put(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Реализация поверх таблицы `kv_store` в SQLite
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    conn: DatabaseConnection,
}

impl SqliteKeyValueStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let query = r#"
            SELECT value
            FROM kv_store
            WHERE key = ?
        "#;

        let row = self
            .conn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                query,
                vec![key.into()],
            ))
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("", "value")?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let query = r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
        "#;

        self.conn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                query,
                vec![key.into(), value.into(), Utc::now().to_rfc3339().into()],
            ))
            .await?;
        Ok(())
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_get_missing_key() {
        let (conn, path) = test_db::temp_database().await;
        let store = SqliteKeyValueStore::new(conn);

        assert_eq!(store.get("customCategories").await.unwrap(), None);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_sqlite_put_replaces_value() {
        let (conn, path) = test_db::temp_database().await;
        let store = SqliteKeyValueStore::new(conn);

        store.put("customCategories", "[1]").await.unwrap();
        store.put("customCategories", "[1,2]").await.unwrap();

        assert_eq!(
            store.get("customCategories").await.unwrap().as_deref(),
            Some("[1,2]")
        );
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_memory_store_failing_writes() {
        let store = memory::MemoryKeyValueStore::with_entry("k", "old");
        store.set_fail_writes(true);

        assert!(store.put("k", "new").await.is_err());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("old"));
    }
}
