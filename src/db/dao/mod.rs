use sea_orm::DatabaseConnection;

pub mod artist_dao;
pub mod base;
pub mod base_traits;
pub mod error;
pub mod show_dao;
pub mod venue_dao;

pub use artist_dao::ArtistDao;
pub use base::{DaoBase, fold_name};
pub use base_traits::{HasIdActiveModel, TimestampedActiveModel};
pub use error::{DaoLayerError, DaoResult};
pub use show_dao::ShowDao;
pub use venue_dao::{VenueDao, VenueRemoval};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn venue(&self) -> VenueDao {
        DaoBase::new(&self.db)
    }

    pub fn artist(&self) -> ArtistDao {
        DaoBase::new(&self.db)
    }

    pub fn show(&self) -> ShowDao {
        DaoBase::new(&self.db)
    }
}
