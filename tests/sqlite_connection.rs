use chrono::Utc;
use uuid::Uuid;

use fyyur::{
    config::{AppConfig, EnvConfig},
    db::{
        connection,
        dao::{DaoBase, DaoContext, DaoLayerError},
        drafts::ShowDraft,
    },
};

struct TempDb(std::path::PathBuf);

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.0.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}

fn orphan_show() -> ShowDraft {
    ShowDraft {
        artist_id: Uuid::new_v4(),
        venue_id: Uuid::new_v4(),
        start_time: Utc::now(),
    }
}

#[tokio::test]
async fn every_pooled_file_connection_enforces_foreign_keys() {
    let file = TempDb(std::env::temp_dir().join(format!("fyyur-{}.db", Uuid::new_v4())));
    let url = format!("sqlite://{}?mode=rwc", file.0.display());
    let cfg = AppConfig::from_pairs([
        ("database.url", url.as_str()),
        ("database.max_connections", "2"),
        ("database.min_idle", "2"),
    ])
    .expect("file config should be valid");
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to file sqlite");
    let shows = DaoContext::new(&db).show();

    // The open transaction holds one connection, so the pool serves the
    // other insert from the second.
    let txn = shows.begin().await.expect("begin");
    let on_pool = shows.create(orphan_show()).await;
    let in_txn = shows.insert_in(&txn, orphan_show()).await;
    drop(txn);

    assert!(matches!(in_txn, Err(DaoLayerError::Db(_))), "{in_txn:?}");
    assert!(matches!(on_pool, Err(DaoLayerError::Db(_))), "{on_pool:?}");
    assert!(shows.list_shows().await.expect("list shows").is_empty());
}
