use std::path::Path;

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Storage key for the serialized site configuration record.
pub(super) const CONFIG_KEY: &str = "siteConfig";
/// Storage key for the serialized blog post collection.
pub(super) const POSTS_KEY: &str = "sitePosts";
/// Storage key for the serialized project collection.
pub(super) const PROJECTS_KEY: &str = "siteProjects";
/// Storage key for the admin flag (`"true"` / anything else).
pub(super) const ADMIN_KEY: &str = "siteAdmin";

/// Durable key-value storage backing the site: four independent string-keyed
/// entries in a single SQLite file.
pub(super) struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub(super) async fn open<P: AsRef<Path>>(site_file: P) -> anyhow::Result<Self> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(site_file.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open site storage {:?}", site_file.as_ref()))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run site storage migrations")?;
        Ok(Self { pool })
    }

    pub(super) async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM site_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read storage entry {key:?}"))?;
        Ok(value)
    }

    pub(super) async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO site_storage (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write storage entry {key:?}"))?;
        Ok(())
    }
}
