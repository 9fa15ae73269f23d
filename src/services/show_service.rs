use crate::{
    db::dao::{ArtistDao, DaoLayerError, ShowDao, VenueDao},
    db::drafts::ShowDraft,
    db::entities::show,
    error::{AppError, SubmitError},
    forms::FormErrors,
    services::listings::ShowListing,
};

#[derive(Clone)]
pub struct ShowService {
    show_dao: ShowDao,
    artist_dao: ArtistDao,
    venue_dao: VenueDao,
}

impl ShowService {
    pub fn new(show_dao: ShowDao, artist_dao: ArtistDao, venue_dao: VenueDao) -> Self {
        Self {
            show_dao,
            artist_dao,
            venue_dao,
        }
    }

    /// Every show, earliest first, with its venue and artist.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, AppError> {
        let shows = self.show_dao.list_shows().await?;

        let mut venue_ids: Vec<_> = shows.iter().map(|show| show.venue_id).collect();
        venue_ids.sort_unstable();
        venue_ids.dedup();
        let mut artist_ids: Vec<_> = shows.iter().map(|show| show.artist_id).collect();
        artist_ids.sort_unstable();
        artist_ids.dedup();

        let venues = self.venue_dao.find_by_ids(&venue_ids).await?;
        let artists = self.artist_dao.find_by_ids(&artist_ids).await?;

        Ok(shows
            .iter()
            .filter_map(|show| {
                let venue = venues.get(&show.venue_id)?;
                let artist = artists.get(&show.artist_id)?;
                Some(ShowListing::new(show, venue, artist))
            })
            .collect())
    }

    /// An unknown artist or venue comes back as a message on that field.
    pub async fn create_show(&self, draft: ShowDraft) -> Result<show::Model, SubmitError> {
        match self.show_dao.create_show(draft).await {
            Ok(show) => {
                tracing::info!(
                    show_id = %show.id,
                    artist_id = %show.artist_id,
                    venue_id = %show.venue_id,
                    "show listed"
                );
                Ok(show)
            }
            Err(DaoLayerError::MissingReference { entity, id }) => {
                tracing::warn!(entity, %id, "show references a missing record");
                let field = if entity == "Artist" {
                    "artist_id"
                } else {
                    "venue_id"
                };
                let message = format!("No {} with id {id}.", entity.to_lowercase());
                Err(FormErrors::single(field, message).into())
            }
            Err(err) => {
                tracing::error!(error = %err, "show could not be created");
                Err(err.into())
            }
        }
    }
}
