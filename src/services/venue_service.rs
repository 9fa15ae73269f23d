use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    db::dao::{ArtistDao, ShowDao, VenueDao, VenueRemoval},
    db::drafts::VenueDraft,
    db::entities::venue,
    error::AppError,
    services::listings::{
        AreaListing, EntryLink, SearchHit, SearchResults, ShowCard, VenueDetail, VenueRecord,
    },
    services::timing::partition,
};

#[derive(Clone)]
pub struct VenueService {
    venue_dao: VenueDao,
    show_dao: ShowDao,
    artist_dao: ArtistDao,
}

impl VenueService {
    pub fn new(venue_dao: VenueDao, show_dao: ShowDao, artist_dao: ArtistDao) -> Self {
        Self {
            venue_dao,
            show_dao,
            artist_dao,
        }
    }

    /// Venues grouped by (city, state), groups ordered by state then city.
    pub async fn list_areas(&self, now: DateTime<Utc>) -> Result<Vec<AreaListing>, AppError> {
        let venues = self.venue_dao.list_venues().await?;
        let mut areas: BTreeMap<(String, String), Vec<SearchHit>> = BTreeMap::new();
        for venue in venues {
            let hit = self.search_hit(venue.id, venue.name, now).await?;
            areas
                .entry((venue.state, venue.city))
                .or_default()
                .push(hit);
        }
        Ok(areas
            .into_iter()
            .map(|((state, city), venues)| AreaListing {
                city,
                state,
                venues,
            })
            .collect())
    }

    pub async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, AppError> {
        let venues = self.venue_dao.search_venues(term).await?;
        let mut hits = Vec::with_capacity(venues.len());
        for venue in venues {
            hits.push(self.search_hit(venue.id, venue.name, now).await?);
        }
        Ok(SearchResults::new(hits))
    }

    pub async fn venue_detail(&self, id: &Uuid, now: DateTime<Utc>) -> Result<VenueDetail, AppError> {
        let venue = self.venue_dao.find_venue(id).await?;
        let shows = self.show_dao.shows_for_venue(id).await?;

        let mut artist_ids: Vec<Uuid> = shows.iter().map(|show| show.artist_id).collect();
        artist_ids.sort_unstable();
        artist_ids.dedup();
        let artists = self.artist_dao.find_by_ids(&artist_ids).await?;

        let cards = shows.iter().filter_map(|show| {
            artists
                .get(&show.artist_id)
                .map(|artist| ShowCard::featuring(show, artist))
        });
        let split = partition(cards, now, |card| card.start_time);
        Ok(VenueDetail::new(
            VenueRecord::from(venue),
            split.past,
            split.upcoming,
        ))
    }

    pub async fn require_venue(&self, id: &Uuid) -> Result<venue::Model, AppError> {
        Ok(self.venue_dao.find_venue(id).await?)
    }

    pub async fn create_venue(&self, draft: VenueDraft) -> Result<venue::Model, AppError> {
        match self.venue_dao.create_venue(draft).await {
            Ok(venue) => {
                tracing::info!(venue_id = %venue.id, name = %venue.name, "venue listed");
                Ok(venue)
            }
            Err(err) => {
                tracing::error!(error = %err, "venue could not be created");
                Err(err.into())
            }
        }
    }

    pub async fn update_venue(&self, id: &Uuid, draft: VenueDraft) -> Result<venue::Model, AppError> {
        match self.venue_dao.update_venue(id, draft).await {
            Ok(venue) => {
                tracing::info!(venue_id = %venue.id, "venue updated");
                Ok(venue)
            }
            Err(err) => {
                tracing::warn!(venue_id = %id, error = %err, "venue could not be updated");
                Err(err.into())
            }
        }
    }

    pub async fn delete_venue(&self, id: &Uuid) -> Result<VenueRemoval, AppError> {
        let removal = self.venue_dao.delete_venue(id).await?;
        tracing::info!(
            venue_id = %removal.venue_id,
            shows_removed = removal.shows_removed,
            "venue deleted"
        );
        Ok(removal)
    }

    /// Every venue by name, for pickers.
    pub async fn venue_links(&self) -> Result<Vec<EntryLink>, AppError> {
        let venues = self.venue_dao.list_venues().await?;
        Ok(venues.into_iter().map(EntryLink::from).collect())
    }

    async fn search_hit(
        &self,
        id: Uuid,
        name: String,
        now: DateTime<Utc>,
    ) -> Result<SearchHit, AppError> {
        let num_upcoming_shows = self.show_dao.count_upcoming_for_venue(&id, now).await?;
        Ok(SearchHit {
            id,
            name,
            num_upcoming_shows,
        })
    }
}
