use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{FormErrors, rules};
use crate::db::drafts::ShowDraft;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// Empty form with the start time set to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(START_TIME_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ShowDraft, FormErrors> {
        let mut errors = FormErrors::new();
        let artist_id = id_field(&mut errors, "artist_id", &self.artist_id);
        let venue_id = id_field(&mut errors, "venue_id", &self.venue_id);
        let start_time = start_time_field(&mut errors, "start_time", &self.start_time);

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowDraft {
                    artist_id,
                    venue_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }

    pub fn artist_is(&self, id: &Uuid) -> bool {
        self.artist_id.trim() == id.to_string()
    }

    pub fn venue_is(&self, id: &Uuid) -> bool {
        self.venue_id.trim() == id.to_string()
    }
}

fn id_field(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<Uuid> {
    let value = rules::required(errors, field, value);
    if value.is_empty() {
        return None;
    }
    match Uuid::parse_str(&value) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(field, "Not a valid id.");
            None
        }
    }
}

fn start_time_field(
    errors: &mut FormErrors,
    field: &'static str,
    value: &str,
) -> Option<DateTime<Utc>> {
    let value = rules::required(errors, field, value);
    if value.is_empty() {
        return None;
    }
    let parsed = parse_start_time(&value);
    if parsed.is_none() {
        errors.push(field, "Not a valid datetime value.");
    }
    parsed
}

/// Naive inputs are taken as UTC; RFC 3339 input keeps its offset.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::{ShowForm, parse_start_time};

    #[test]
    fn accepts_the_offered_time_formats() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01 20:00:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01 20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T20:00"), Some(expected));
        assert_eq!(parse_start_time("2035-04-01T22:00:00+02:00"), Some(expected));
        assert_eq!(parse_start_time("next tuesday"), None);
    }

    #[test]
    fn valid_form_becomes_draft() {
        let artist_id = Uuid::new_v4();
        let venue_id = Uuid::new_v4();
        let form = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: format!(" {venue_id} "),
            start_time: "2035-04-01 20:00:00".to_string(),
        };

        let draft = form.validate().expect("form should validate");
        assert_eq!(draft.artist_id, artist_id);
        assert_eq!(draft.venue_id, venue_id);
    }

    #[test]
    fn bad_ids_and_times_are_reported() {
        let form = ShowForm {
            artist_id: "42".to_string(),
            venue_id: String::new(),
            start_time: "soon".to_string(),
        };

        let errors = form.validate().expect_err("form is invalid");
        assert_eq!(
            errors.messages(),
            [
                "Artist Id: Not a valid id.",
                "Venue Id: This field is required.",
                "Start Time: Not a valid datetime value.",
            ]
        );
    }

    #[test]
    fn default_start_time_round_trips() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 0).unwrap();
        let form = ShowForm::starting_at(now);
        assert_eq!(parse_start_time(&form.start_time), Some(now));
    }
}
