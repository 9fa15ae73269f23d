use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::drafts::ArtistDraft;
use crate::db::entities::artist;
use crate::db::entities::prelude::Artist;

#[derive(Clone)]
pub struct ArtistDao {
    db: DatabaseConnection,
}

impl DaoBase for ArtistDao {
    type Entity = Artist;
    const LABEL: &'static str = "Artist";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ArtistDao {
    pub async fn create_artist(&self, draft: ArtistDraft) -> DaoResult<artist::Model> {
        self.create(draft).await
    }

    pub async fn find_artist(&self, id: &Uuid) -> DaoResult<artist::Model> {
        self.find_by_id(*id).await
    }

    pub async fn update_artist(&self, id: &Uuid, draft: ArtistDraft) -> DaoResult<artist::Model> {
        self.update(*id, move |active| draft.apply_to(active)).await
    }

    pub async fn list_artists(&self) -> DaoResult<Vec<artist::Model>> {
        self.find_iter(None, Some((artist::Column::Name, Order::Asc)), |query| query)
            .collect_all()
            .await
    }

    pub async fn recent_artists(&self, limit: u64) -> DaoResult<Vec<artist::Model>> {
        let limit = limit.clamp(1, <Self as DaoBase>::MAX_PAGE_SIZE);
        Ok(self.find(1, limit, None, |query| query).await?.data)
    }

    pub async fn search_artists(&self, term: &str) -> DaoResult<Vec<artist::Model>> {
        self.search_by_name(term).await
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> DaoResult<HashMap<Uuid, artist::Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Artist::find()
            .filter(artist::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}
