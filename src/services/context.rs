use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        artist_service::ArtistService, home_service::HomeService, show_service::ShowService,
        venue_service::VenueService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn venue(&self) -> VenueService {
        VenueService::new(self.daos.venue(), self.daos.show(), self.daos.artist())
    }

    pub fn artist(&self) -> ArtistService {
        ArtistService::new(self.daos.artist(), self.daos.show(), self.daos.venue())
    }

    pub fn show(&self) -> ShowService {
        ShowService::new(self.daos.show(), self.daos.artist(), self.daos.venue())
    }

    pub fn home(&self) -> HomeService {
        HomeService::new(self.daos.venue(), self.daos.artist())
    }
}
