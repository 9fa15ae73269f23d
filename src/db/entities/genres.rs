use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered genre labels, stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Genres(pub Vec<String>);

impl From<Vec<String>> for Genres {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Genres> for Vec<String> {
    fn from(genres: Genres) -> Self {
        genres.0
    }
}
