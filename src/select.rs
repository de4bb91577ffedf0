//! Deterministic daily selection.
//!
//! The selector is pure: the caller supplies the date (UTC, day granularity)
//! and the store, and the same inputs always produce the same selection. The
//! seed is the date written as `YYYYMMDD`, so a given day is stable across
//! rebuilds and re-runs of the tool.

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::store::{Entry, Store};

/// The subset of the store chosen for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// The day this selection is for.
    pub date: NaiveDate,
    /// Selected quotes, at most the configured count.
    pub quotes: Vec<Entry>,
    /// The day's poem, `None` when the collection is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poem: Option<Entry>,
}

/// Seed for the day's RNG: the date as a `YYYYMMDD` integer.
pub fn seed_for(date: NaiveDate) -> u64 {
    let y = date.year() as u64;
    y * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Select `quote_count` quotes and one poem for the given date.
///
/// Quotes are sampled without replacement; the sample size is clamped to the
/// collection size, and empty collections yield an empty selection rather
/// than an error.
pub fn select_daily(store: &Store, date: NaiveDate, quote_count: usize) -> Selection {
    let mut rng = StdRng::seed_from_u64(seed_for(date));

    let quotes: Vec<Entry> = store
        .quotes
        .choose_multiple(&mut rng, quote_count.min(store.quotes.len()))
        .cloned()
        .collect();

    let poem = store.poems.choose(&mut rng).cloned();

    tracing::debug!(
        %date,
        quotes = quotes.len(),
        poem = poem.is_some(),
        "Daily selection computed"
    );

    Selection { date, quotes, poem }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EntryKind, NewEntry};

    fn store_with(quotes: usize, poems: usize) -> Store {
        let mut store = Store::default();
        for i in 0..quotes {
            store
                .append(NewEntry::new(
                    EntryKind::Quote,
                    format!("quote {}", i),
                    format!("author {}", i),
                ))
                .unwrap();
        }
        for i in 0..poems {
            store
                .append(NewEntry::new(
                    EntryKind::Poem,
                    format!("poem {}", i),
                    format!("poet {}", i),
                ))
                .unwrap();
        }
        store
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_matches_yyyymmdd() {
        assert_eq!(seed_for(date(2025, 3, 7)), 20250307);
        assert_eq!(seed_for(date(1999, 12, 31)), 19991231);
    }

    #[test]
    fn same_date_same_store_same_selection() {
        let store = store_with(20, 5);
        let d = date(2025, 6, 1);
        let a = select_daily(&store, d, 3);
        let b = select_daily(&store, d, 3);
        assert_eq!(a.quotes, b.quotes);
        assert_eq!(a.poem, b.poem);
    }

    #[test]
    fn different_dates_usually_differ() {
        let store = store_with(50, 20);
        // With 50 quotes the odds of two days picking the same 3 are tiny;
        // over a 30-day window at least one pair must differ.
        let base = select_daily(&store, date(2025, 6, 1), 3);
        let differs = (2..=30).any(|d| {
            let other = select_daily(&store, date(2025, 6, d), 3);
            other.quotes != base.quotes || other.poem != base.poem
        });
        assert!(differs);
    }

    #[test]
    fn selection_clamped_to_collection_size() {
        let store = store_with(2, 1);
        let selection = select_daily(&store, date(2025, 1, 15), 3);
        assert_eq!(selection.quotes.len(), 2);
        assert!(selection.poem.is_some());
    }

    #[test]
    fn empty_store_yields_empty_selection() {
        let store = Store::default();
        let selection = select_daily(&store, date(2025, 1, 15), 3);
        assert!(selection.quotes.is_empty());
        assert!(selection.poem.is_none());
    }

    #[test]
    fn quotes_sampled_without_replacement() {
        let store = store_with(10, 0);
        let selection = select_daily(&store, date(2025, 7, 4), 3);
        let mut ids: Vec<&str> = selection.quotes.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), selection.quotes.len());
    }

    #[test]
    fn selected_entries_come_from_the_store() {
        let store = store_with(10, 3);
        let selection = select_daily(&store, date(2025, 2, 2), 3);
        for q in &selection.quotes {
            assert!(store.quotes.contains(q));
        }
        assert!(store.poems.contains(selection.poem.as_ref().unwrap()));
    }
}
