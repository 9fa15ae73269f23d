use chrono::{DateTime, Utc};

/// Where a show sits relative to the moment a page is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show is past once its start time is strictly before `now`.
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioned<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Splits `items` into past and upcoming, keeping their relative order.
pub fn partition<T, F>(items: impl IntoIterator<Item = T>, now: DateTime<Utc>, start_of: F) -> Partitioned<T>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for item in items {
        match ShowTiming::classify(start_of(&item), now) {
            ShowTiming::Past => past.push(item),
            ShowTiming::Upcoming => upcoming.push(item),
        }
    }
    Partitioned { past, upcoming }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{ShowTiming, partition};

    #[test]
    fn start_equal_to_now_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(ShowTiming::classify(now, now), ShowTiming::Upcoming);
        assert_eq!(
            ShowTiming::classify(now - Duration::seconds(1), now),
            ShowTiming::Past
        );
    }

    #[test]
    fn every_item_lands_in_exactly_one_bucket() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let starts: Vec<_> = (-3..=3).map(|days| now + Duration::days(days)).collect();

        let split = partition(starts.clone(), now, |start| *start);

        assert_eq!(split.past.len() + split.upcoming.len(), starts.len());
        assert!(split.past.iter().all(|start| *start < now));
        assert!(split.upcoming.iter().all(|start| *start >= now));
        assert!(split.past.iter().all(|start| !split.upcoming.contains(start)));
    }

    #[test]
    fn keeps_input_order_inside_each_bucket() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let items = vec![
            ("a", now - Duration::days(2)),
            ("b", now + Duration::days(5)),
            ("c", now - Duration::days(1)),
            ("d", now + Duration::days(9)),
        ];

        let split = partition(items, now, |(_, start)| *start);

        let past: Vec<_> = split.past.iter().map(|(name, _)| *name).collect();
        let upcoming: Vec<_> = split.upcoming.iter().map(|(name, _)| *name).collect();
        assert_eq!(past, ["a", "c"]);
        assert_eq!(upcoming, ["b", "d"]);
    }
}
