use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, Order, PaginatorTrait,
    QueryFilter,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult, base::commit_or_rollback};
use crate::db::drafts::ShowDraft;
use crate::db::entities::prelude::{Artist, Show, Venue};
use crate::db::entities::show;

#[derive(Clone)]
pub struct ShowDao {
    db: DatabaseConnection,
}

impl DaoBase for ShowDao {
    type Entity = Show;
    const LABEL: &'static str = "Show";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ShowDao {
    /// Inserts the show after checking, inside the same transaction, that
    /// both the artist and the venue exist.
    pub async fn create_show(&self, draft: ShowDraft) -> DaoResult<show::Model> {
        let txn = self.begin().await?;
        let outcome = async {
            ensure_references(&txn, &draft).await?;
            self.insert_in(&txn, draft).await
        }
        .await;
        commit_or_rollback(txn, outcome).await
    }

    /// Every show, earliest first.
    pub async fn list_shows(&self) -> DaoResult<Vec<show::Model>> {
        self.find_iter(None, Some((show::Column::StartTime, Order::Asc)), |query| query)
            .collect_all()
            .await
    }

    pub async fn shows_for_venue(&self, venue_id: &Uuid) -> DaoResult<Vec<show::Model>> {
        let venue_id = *venue_id;
        self.find_iter(
            None,
            Some((show::Column::StartTime, Order::Asc)),
            move |query| query.filter(show::Column::VenueId.eq(venue_id)),
        )
        .collect_all()
        .await
    }

    pub async fn shows_for_artist(&self, artist_id: &Uuid) -> DaoResult<Vec<show::Model>> {
        let artist_id = *artist_id;
        self.find_iter(
            None,
            Some((show::Column::StartTime, Order::Asc)),
            move |query| query.filter(show::Column::ArtistId.eq(artist_id)),
        )
        .collect_all()
        .await
    }

    /// Shows at the venue starting strictly after `now`.
    pub async fn count_upcoming_for_venue(
        &self,
        venue_id: &Uuid,
        now: DateTime<Utc>,
    ) -> DaoResult<u64> {
        Show::find()
            .filter(show::Column::VenueId.eq(*venue_id))
            .filter(show::Column::StartTime.gt(now))
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Shows by the artist starting strictly after `now`.
    pub async fn count_upcoming_for_artist(
        &self,
        artist_id: &Uuid,
        now: DateTime<Utc>,
    ) -> DaoResult<u64> {
        Show::find()
            .filter(show::Column::ArtistId.eq(*artist_id))
            .filter(show::Column::StartTime.gt(now))
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}

async fn ensure_references(txn: &DatabaseTransaction, draft: &ShowDraft) -> DaoResult<()> {
    let artist = Artist::find_by_id(draft.artist_id)
        .one(txn)
        .await
        .map_err(DaoLayerError::Db)?;
    if artist.is_none() {
        return Err(DaoLayerError::MissingReference {
            entity: "Artist",
            id: draft.artist_id,
        });
    }

    let venue = Venue::find_by_id(draft.venue_id)
        .one(txn)
        .await
        .map_err(DaoLayerError::Db)?;
    if venue.is_none() {
        return Err(DaoLayerError::MissingReference {
            entity: "Venue",
            id: draft.venue_id,
        });
    }

    Ok(())
}
