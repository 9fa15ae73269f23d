//! Read-side shapes handed to the templates. Every shape is built by an
//! explicit conversion from the entity models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::entities::{artist, show, venue};

const MACHINE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const DISPLAY_TIME_FORMAT: &str = "%a %b %-d, %Y %-I:%M %p";

/// A name that links to its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryLink {
    pub id: Uuid,
    pub name: String,
}

impl From<venue::Model> for EntryLink {
    fn from(model: venue::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<artist::Model> for EntryLink {
    fn from(model: artist::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// One (city, state) group on the venues page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaListing {
    pub city: String,
    pub state: String,
    pub venues: Vec<SearchHit>,
}

/// A show as seen from one side: on a venue page the counterpart is the
/// artist, on an artist page it is the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowCard {
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ShowCard {
    pub fn featuring(show: &show::Model, artist: &artist::Model) -> Self {
        Self {
            counterpart_id: artist.id,
            counterpart_name: artist.name.clone(),
            counterpart_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        }
    }

    pub fn hosted_at(show: &show::Model, venue: &venue::Model) -> Self {
        Self {
            counterpart_id: venue.id,
            counterpart_name: venue.name.clone(),
            counterpart_image_link: venue.image_link.clone(),
            start_time: show.start_time,
        }
    }

    pub fn start_time_label(&self) -> String {
        machine_time(self.start_time)
    }

    pub fn when(&self) -> String {
        display_time(self.start_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueRecord {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl From<venue::Model> for VenueRecord {
    fn from(model: venue::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genres: model.genres.into(),
            address: model.address,
            city: model.city,
            state: model.state,
            phone: model.phone,
            website_link: model.website_link,
            facebook_link: model.facebook_link,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRecord {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

impl From<artist::Model> for ArtistRecord {
    fn from(model: artist::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genres: model.genres.into(),
            city: model.city,
            state: model.state,
            phone: model.phone,
            website_link: model.website_link,
            facebook_link: model.facebook_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
        }
    }
}

/// A record page with its shows split around `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPage<R> {
    #[serde(flatten)]
    pub record: R,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<R> DetailPage<R> {
    pub fn new(record: R, past_shows: Vec<ShowCard>, upcoming_shows: Vec<ShowCard>) -> Self {
        Self {
            record,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

pub type VenueDetail = DetailPage<VenueRecord>;
pub type ArtistDetail = DetailPage<ArtistRecord>;

/// A row on the shows page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl ShowListing {
    pub fn new(show: &show::Model, venue: &venue::Model, artist: &artist::Model) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        }
    }

    pub fn start_time_label(&self) -> String {
        machine_time(self.start_time)
    }

    pub fn when(&self) -> String {
        display_time(self.start_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecentListings {
    pub venues: Vec<EntryLink>,
    pub artists: Vec<EntryLink>,
}

pub fn machine_time(at: DateTime<Utc>) -> String {
    at.format(MACHINE_TIME_FORMAT).to_string()
}

pub fn display_time(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{DetailPage, display_time, machine_time};

    #[test]
    fn time_labels() {
        let at = Utc.with_ymd_and_hms(2035, 4, 1, 20, 30, 0).unwrap();
        assert_eq!(machine_time(at), "2035-04-01T20:30:00.000Z");
        assert_eq!(display_time(at), "Sun Apr 1, 2035 8:30 PM");
    }

    #[test]
    fn detail_page_counts_follow_the_lists() {
        let page = DetailPage::new((), Vec::new(), Vec::new());
        assert_eq!(page.past_shows_count, 0);
        assert_eq!(page.upcoming_shows_count, 0);
    }
}
