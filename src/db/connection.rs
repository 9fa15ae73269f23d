use std::{fmt, time::Duration};

use anyhow::{Context, Result, bail};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Backends the directory can be stored in, picked from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Sqlite,
}

impl StoreKind {
    pub fn from_url(url: &str) -> Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if normalized.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            bail!(
                "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite:",
                redact_url(url)
            )
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opens the pool, applies backend session settings and syncs the schema
/// from the registered entities.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let kind = StoreKind::from_url(&cfg.url)?;

    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(CONNECT_TIMEOUT)
        .sqlx_logging(false);

    if kind == StoreKind::Sqlite {
        // Applied as each pooled connection opens.
        options.map_sqlx_sqlite_opts(|opts| {
            opts.foreign_keys(true).busy_timeout(SQLITE_BUSY_TIMEOUT)
        });

        // Every pooled connection to `sqlite::memory:` opens its own database.
        if is_in_memory(&cfg.url) {
            options.max_connections(1).min_connections(1);
        }
    }

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {kind} database"))?;

    sync_schema(&db).await?;
    info!(backend = %kind, "database ready");
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_registry("fyyur::db::entities::*")
        .sync(db)
        .await
        .context("schema sync failed")?;
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.to_ascii_lowercase().contains(":memory:")
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreKind, is_in_memory};

    #[test]
    fn detects_backend_from_scheme() {
        assert_eq!(
            StoreKind::from_url("postgres://user:pw@localhost/fyyur").unwrap(),
            StoreKind::Postgres
        );
        assert_eq!(
            StoreKind::from_url("PostgreSQL://localhost/fyyur").unwrap(),
            StoreKind::Postgres
        );
        assert_eq!(
            StoreKind::from_url("sqlite://fyyur.db?mode=rwc").unwrap(),
            StoreKind::Sqlite
        );
    }

    #[test]
    fn rejects_unknown_scheme_without_leaking_credentials() {
        let err = StoreKind::from_url("mysql://root:hunter2@db/fyyur")
            .expect_err("mysql should be rejected");
        let message = err.to_string();

        assert!(message.contains("unsupported database url"));
        assert!(message.contains("mysql://<redacted>"));
        assert!(!message.contains("hunter2"));
    }

    #[test]
    fn recognises_in_memory_sqlite() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(!is_in_memory("sqlite://fyyur.db"));
    }
}
