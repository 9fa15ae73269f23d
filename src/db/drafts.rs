//! Validated input for the write paths. Forms produce these; DAOs turn
//! them into active models.

use chrono::{DateTime, Utc};
use sea_orm::{IntoActiveModel, Set};
use uuid::Uuid;

use crate::db::{
    dao::fold_name,
    entities::{artist, show, venue},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueDraft {
    pub fn apply_to(self, active: &mut venue::ActiveModel) {
        active.name_key = Set(fold_name(&self.name));
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.address = Set(self.address);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.facebook_link = Set(self.facebook_link);
        active.website_link = Set(self.website_link);
        active.genres = Set(self.genres.into());
        active.seeking_talent = Set(self.seeking_talent);
        active.seeking_description = Set(self.seeking_description);
    }
}

impl IntoActiveModel<venue::ActiveModel> for VenueDraft {
    fn into_active_model(self) -> venue::ActiveModel {
        let mut active = venue::ActiveModel::default();
        self.apply_to(&mut active);
        active
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistDraft {
    pub fn apply_to(self, active: &mut artist::ActiveModel) {
        active.name_key = Set(fold_name(&self.name));
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.facebook_link = Set(self.facebook_link);
        active.website_link = Set(self.website_link);
        active.genres = Set(self.genres.into());
        active.seeking_venue = Set(self.seeking_venue);
        active.seeking_description = Set(self.seeking_description);
    }
}

impl IntoActiveModel<artist::ActiveModel> for ArtistDraft {
    fn into_active_model(self) -> artist::ActiveModel {
        let mut active = artist::ActiveModel::default();
        self.apply_to(&mut active);
        active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDraft {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTime<Utc>,
}

impl IntoActiveModel<show::ActiveModel> for ShowDraft {
    fn into_active_model(self) -> show::ActiveModel {
        show::ActiveModel {
            artist_id: Set(self.artist_id),
            venue_id: Set(self.venue_id),
            start_time: Set(self.start_time),
            ..Default::default()
        }
    }
}
