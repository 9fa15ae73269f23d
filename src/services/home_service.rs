use crate::{
    db::dao::{ArtistDao, VenueDao},
    error::AppError,
    services::listings::{EntryLink, RecentListings},
};

#[derive(Clone)]
pub struct HomeService {
    venue_dao: VenueDao,
    artist_dao: ArtistDao,
}

impl HomeService {
    pub fn new(venue_dao: VenueDao, artist_dao: ArtistDao) -> Self {
        Self {
            venue_dao,
            artist_dao,
        }
    }

    /// Newest venues and artists, newest first.
    pub async fn recent_listings(&self, limit: u64) -> Result<RecentListings, AppError> {
        let venues = self.venue_dao.recent_venues(limit).await?;
        let artists = self.artist_dao.recent_artists(limit).await?;
        Ok(RecentListings {
            venues: venues.into_iter().map(EntryLink::from).collect(),
            artists: artists.into_iter().map(EntryLink::from).collect(),
        })
    }
}
