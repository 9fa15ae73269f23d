use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult, base::commit_or_rollback};
use crate::db::drafts::VenueDraft;
use crate::db::entities::prelude::{Show, Venue};
use crate::db::entities::{show, venue};

#[derive(Clone)]
pub struct VenueDao {
    db: DatabaseConnection,
}

impl DaoBase for VenueDao {
    type Entity = Venue;
    const LABEL: &'static str = "Venue";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Rows removed by [`VenueDao::delete_venue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueRemoval {
    pub venue_id: Uuid,
    pub shows_removed: u64,
}

impl VenueDao {
    pub async fn create_venue(&self, draft: VenueDraft) -> DaoResult<venue::Model> {
        self.create(draft).await
    }

    pub async fn find_venue(&self, id: &Uuid) -> DaoResult<venue::Model> {
        self.find_by_id(*id).await
    }

    pub async fn update_venue(&self, id: &Uuid, draft: VenueDraft) -> DaoResult<venue::Model> {
        self.update(*id, move |active| draft.apply_to(active)).await
    }

    /// Every venue, ordered by name.
    pub async fn list_venues(&self) -> DaoResult<Vec<venue::Model>> {
        self.find_iter(None, Some((venue::Column::Name, Order::Asc)), |query| query)
            .collect_all()
            .await
    }

    pub async fn recent_venues(&self, limit: u64) -> DaoResult<Vec<venue::Model>> {
        let limit = limit.clamp(1, <Self as DaoBase>::MAX_PAGE_SIZE);
        Ok(self.find(1, limit, None, |query| query).await?.data)
    }

    pub async fn search_venues(&self, term: &str) -> DaoResult<Vec<venue::Model>> {
        self.search_by_name(term).await
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> DaoResult<HashMap<Uuid, venue::Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Venue::find()
            .filter(venue::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }

    /// Removes the venue together with its shows in one transaction.
    pub async fn delete_venue(&self, id: &Uuid) -> DaoResult<VenueRemoval> {
        let venue_id = *id;
        let txn = self.begin().await?;
        let outcome = async {
            let shows = Show::delete_many()
                .filter(show::Column::VenueId.eq(venue_id))
                .exec(&txn)
                .await
                .map_err(DaoLayerError::Db)?;
            self.delete_in(&txn, venue_id).await?;
            Ok(VenueRemoval {
                venue_id,
                shows_removed: shows.rows_affected,
            })
        }
        .await;
        commit_or_rollback(txn, outcome).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::VenueDao;
    use crate::db::dao::{DaoBase, DaoLayerError};

    #[tokio::test]
    async fn delete_venue_reports_removed_shows() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();
        let dao = VenueDao::new(&db);

        let removal = dao.delete_venue(&id).await.expect("delete should succeed");
        assert_eq!(removal.venue_id, id);
        assert_eq!(removal.shows_removed, 2);
    }

    #[tokio::test]
    async fn delete_venue_rolls_back_when_venue_is_missing() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let dao = VenueDao::new(&db);

        let err = dao.delete_venue(&id).await.expect_err("missing venue");
        assert!(matches!(
            err,
            DaoLayerError::NotFound { entity: "Venue", id: missing } if missing == id
        ));
    }

    #[tokio::test]
    async fn find_by_ids_skips_the_query_for_no_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("should not be queried".to_string())])
            .into_connection();
        let dao = VenueDao::new(&db);

        let found = dao.find_by_ids(&[]).await.expect("empty lookup");
        assert!(found.is_empty());
    }
}
