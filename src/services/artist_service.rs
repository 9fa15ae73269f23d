use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    db::dao::{ArtistDao, ShowDao, VenueDao},
    db::drafts::ArtistDraft,
    db::entities::artist,
    error::AppError,
    services::listings::{ArtistDetail, ArtistRecord, EntryLink, SearchHit, SearchResults, ShowCard},
    services::timing::partition,
};

#[derive(Clone)]
pub struct ArtistService {
    artist_dao: ArtistDao,
    show_dao: ShowDao,
    venue_dao: VenueDao,
}

impl ArtistService {
    pub fn new(artist_dao: ArtistDao, show_dao: ShowDao, venue_dao: VenueDao) -> Self {
        Self {
            artist_dao,
            show_dao,
            venue_dao,
        }
    }

    pub async fn list_artists(&self) -> Result<Vec<EntryLink>, AppError> {
        let artists = self.artist_dao.list_artists().await?;
        Ok(artists.into_iter().map(EntryLink::from).collect())
    }

    pub async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, AppError> {
        let artists = self.artist_dao.search_artists(term).await?;
        let mut hits = Vec::with_capacity(artists.len());
        for artist in artists {
            let num_upcoming_shows = self
                .show_dao
                .count_upcoming_for_artist(&artist.id, now)
                .await?;
            hits.push(SearchHit {
                id: artist.id,
                name: artist.name,
                num_upcoming_shows,
            });
        }
        Ok(SearchResults::new(hits))
    }

    pub async fn artist_detail(
        &self,
        id: &Uuid,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetail, AppError> {
        let artist = self.artist_dao.find_artist(id).await?;
        let shows = self.show_dao.shows_for_artist(id).await?;

        let mut venue_ids: Vec<Uuid> = shows.iter().map(|show| show.venue_id).collect();
        venue_ids.sort_unstable();
        venue_ids.dedup();
        let venues = self.venue_dao.find_by_ids(&venue_ids).await?;

        let cards = shows.iter().filter_map(|show| {
            venues
                .get(&show.venue_id)
                .map(|venue| ShowCard::hosted_at(show, venue))
        });
        let split = partition(cards, now, |card| card.start_time);
        Ok(ArtistDetail::new(
            ArtistRecord::from(artist),
            split.past,
            split.upcoming,
        ))
    }

    pub async fn require_artist(&self, id: &Uuid) -> Result<artist::Model, AppError> {
        Ok(self.artist_dao.find_artist(id).await?)
    }

    pub async fn create_artist(&self, draft: ArtistDraft) -> Result<artist::Model, AppError> {
        match self.artist_dao.create_artist(draft).await {
            Ok(artist) => {
                tracing::info!(artist_id = %artist.id, name = %artist.name, "artist listed");
                Ok(artist)
            }
            Err(err) => {
                tracing::error!(error = %err, "artist could not be created");
                Err(err.into())
            }
        }
    }

    pub async fn update_artist(
        &self,
        id: &Uuid,
        draft: ArtistDraft,
    ) -> Result<artist::Model, AppError> {
        match self.artist_dao.update_artist(id, draft).await {
            Ok(artist) => {
                tracing::info!(artist_id = %artist.id, "artist updated");
                Ok(artist)
            }
            Err(err) => {
                tracing::warn!(artist_id = %id, error = %err, "artist could not be updated");
                Err(err.into())
            }
        }
    }
}
