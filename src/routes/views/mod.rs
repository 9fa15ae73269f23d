use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use crate::{error::AppError, services::listings::EntryLink, state::AppState};

pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

/// Number of venues and artists listed on the home page.
pub const RECENT_LIMIT: u64 = 10;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(home::router(state.clone()))
        .merge(venues::router(state.clone()))
        .merge(artists::router(state.clone()))
        .merge(shows::router(state))
}

/// One `<option>` of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn fixed(values: &[&str], is_selected: impl Fn(&str) -> bool) -> Vec<Self> {
        values
            .iter()
            .map(|value| Self {
                value: value.to_string(),
                label: value.to_string(),
                selected: is_selected(value),
            })
            .collect()
    }

    pub fn links(links: Vec<EntryLink>, is_selected: impl Fn(&Uuid) -> bool) -> Vec<Self> {
        links
            .into_iter()
            .map(|link| Self {
                selected: is_selected(&link.id),
                value: link.id.to_string(),
                label: link.name,
            })
            .collect()
    }
}

/// Malformed ids in a path are treated like unknown ones.
pub(crate) fn parse_id(raw: &str, label: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found(format!("{label} not found")))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{Choice, parse_id};
    use crate::error::AppError;
    use crate::services::listings::EntryLink;

    #[test]
    fn parse_id_maps_garbage_to_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "Venue").ok(), Some(id));
        assert!(matches!(parse_id("12", "Venue"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn choices_mark_the_selection() {
        let choices = Choice::fixed(&["CA", "NY"], |value| value == "NY");
        assert!(!choices[0].selected);
        assert!(choices[1].selected);

        let id = Uuid::new_v4();
        let links = vec![EntryLink {
            id,
            name: "The Musical Hop".to_string(),
        }];
        let choices = Choice::links(links, |candidate| *candidate == id);
        assert_eq!(choices[0].value, id.to_string());
        assert!(choices[0].selected);
    }
}
