use serde::Deserialize;

use super::{FormErrors, rules};
use crate::db::drafts::ArtistDraft;
use crate::db::entities::artist;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistDraft, FormErrors> {
        let mut errors = FormErrors::new();
        let draft = ArtistDraft {
            name: rules::required(&mut errors, "name", &self.name),
            city: rules::required(&mut errors, "city", &self.city),
            state: rules::state(&mut errors, "state", &self.state),
            phone: rules::phone(&mut errors, "phone", &self.phone),
            image_link: rules::link(&mut errors, "image_link", &self.image_link),
            facebook_link: rules::link(&mut errors, "facebook_link", &self.facebook_link),
            website_link: rules::link(&mut errors, "website_link", &self.website_link),
            genres: rules::genres(&mut errors, "genres", &self.genres),
            seeking_venue: self.seeking_venue(),
            seeking_description: rules::description(
                &mut errors,
                "seeking_description",
                &self.seeking_description,
            ),
        };
        errors.into_result(draft)
    }

    pub fn seeking_venue(&self) -> bool {
        rules::checkbox(self.seeking_venue.as_deref())
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|picked| picked == genre)
    }

    pub fn state_is(&self, state: &str) -> bool {
        self.state == state
    }
}

impl From<artist::Model> for ArtistForm {
    fn from(model: artist::Model) -> Self {
        Self {
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone.unwrap_or_default(),
            image_link: model.image_link.unwrap_or_default(),
            genres: model.genres.into(),
            facebook_link: model.facebook_link.unwrap_or_default(),
            website_link: model.website_link.unwrap_or_default(),
            seeking_venue: model.seeking_venue.then(|| "y".to_string()),
            seeking_description: model.seeking_description.unwrap_or_default(),
        }
    }
}
