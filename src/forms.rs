pub mod artist;
pub mod choices;
pub mod errors;
pub mod rules;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use choices::{GENRES, STATES};
pub use errors::FormErrors;
pub use show::ShowForm;
pub use venue::VenueForm;

/// Body of the venue and artist search forms.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}
