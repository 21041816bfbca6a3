//! Projection of the note cache into the active view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Note;

/// Which subset of notes is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterState {
    /// Only notes created today
    #[default]
    Today,
    /// Every cached note
    All,
}

/// Select the notes visible under `filter`, preserving cache order.
#[must_use]
pub fn visible_notes(notes: &[Note], filter: FilterState, today: NaiveDate) -> Vec<Note> {
    match filter {
        FilterState::All => notes.to_vec(),
        FilterState::Today => notes.iter().filter(|note| note.is_on(today)).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NoteId};
    use pretty_assertions::assert_eq;

    fn note(id: i64, date: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: format!("Note {id}"),
            content: "body".to_string(),
            category: Category::Idea,
            date: date.to_string(),
            completed: false,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_is_order_preserving_identity() {
        let notes = vec![
            note(3, "2024-01-03T10:00:00Z"),
            note(1, "2024-01-01T10:00:00Z"),
            note(2, "garbage"),
        ];
        assert_eq!(visible_notes(&notes, FilterState::All, day(2024, 1, 3)), notes);
    }

    #[test]
    fn today_keeps_exactly_the_notes_of_the_day() {
        let notes = vec![
            note(1, "2024-01-02T23:59:59+02:00"),
            note(2, "2024-01-01T12:00:00Z"),
            note(3, "2024-01-02"),
            note(4, "not a date"),
        ];
        let visible = visible_notes(&notes, FilterState::Today, day(2024, 1, 2));
        let ids: Vec<_> = visible.iter().map(|note| note.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn today_with_only_older_notes_is_empty() {
        let notes = vec![note(1, "2024-01-01")];
        assert!(visible_notes(&notes, FilterState::Today, day(2024, 1, 2)).is_empty());
    }

    #[test]
    fn default_filter_is_today() {
        assert_eq!(FilterState::default(), FilterState::Today);
    }
}
