//! Plain view models handed to the rendering layer.
//!
//! The core never touches UI elements. It produces [`NoteView`] records with
//! action tokens, and the front end binds each token to its own handler and
//! sends it back through `NoteStore::dispatch`.

use chrono::Locale;
use serde::Serialize;

use crate::aggregate::{display_date, Stats, WeekSeries};
use crate::models::{Note, NoteId};
use crate::session::EditDraft;

/// User intent attached to a rendered note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NoteAction {
    /// Set the completion flag to `completed`
    Toggle { id: NoteId, completed: bool },
    Edit { id: NoteId },
    Delete { id: NoteId },
}

/// A note prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub completed: bool,
    pub display_date: String,
    pub category_label: &'static str,
    pub actions: Vec<NoteAction>,
}

impl NoteView {
    #[must_use]
    pub fn from_note(note: &Note, locale: Locale) -> Self {
        let display_date = note
            .day()
            .map_or_else(|| note.date.clone(), |day| display_date(day, locale));
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            completed: note.completed,
            display_date,
            category_label: note.category.label(),
            actions: vec![
                NoteAction::Toggle {
                    id: note.id.clone(),
                    completed: !note.completed,
                },
                NoteAction::Edit {
                    id: note.id.clone(),
                },
                NoteAction::Delete {
                    id: note.id.clone(),
                },
            ],
        }
    }
}

/// Map visible notes into view records, keeping order.
#[must_use]
pub fn note_views(notes: &[Note], locale: Locale) -> Vec<NoteView> {
    notes
        .iter()
        .map(|note| NoteView::from_note(note, locale))
        .collect()
}

/// Rendering side of the UI.
///
/// `Chart` is whatever handle the chart widget returns. The store keeps the
/// latest one and hands it back through [`ViewRenderer::discard_chart`]
/// before building the next, so stale chart instances never pile up.
pub trait ViewRenderer {
    type Chart;

    /// Replace the note list. An empty slice means the empty state.
    fn render_notes(&mut self, notes: &[NoteView]);

    fn render_stats(&mut self, stats: &Stats);

    fn build_chart(&mut self, series: &WeekSeries) -> Self::Chart;

    fn discard_chart(&mut self, chart: Self::Chart);

    /// Clear the compose form after a note was created.
    fn reset_compose_form(&mut self) {}

    fn show_edit_form(&mut self, _draft: &EditDraft) {}

    fn hide_edit_form(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use pretty_assertions::assert_eq;

    fn note(date: &str, completed: bool, category: Category) -> Note {
        Note {
            id: NoteId::from(4),
            title: "Title".to_string(),
            content: "Body".to_string(),
            category,
            date: date.to_string(),
            completed,
        }
    }

    #[test]
    fn view_carries_display_fields() {
        let view = NoteView::from_note(
            &note("2024-01-02T10:00:00-03:00", false, Category::Reminder),
            Locale::pt_BR,
        );
        assert_eq!(view.display_date, "02/01/2024");
        assert_eq!(view.category_label, "Reminder");
        assert!(!view.completed);
    }

    #[test]
    fn toggle_action_targets_the_opposite_state() {
        let open = NoteView::from_note(&note("2024-01-02", false, Category::Idea), Locale::en_US);
        let done = NoteView::from_note(&note("2024-01-02", true, Category::Idea), Locale::en_US);
        assert_eq!(
            open.actions[0],
            NoteAction::Toggle {
                id: NoteId::from(4),
                completed: true
            }
        );
        assert_eq!(
            done.actions[0],
            NoteAction::Toggle {
                id: NoteId::from(4),
                completed: false
            }
        );
        assert_eq!(
            open.actions[1..].to_vec(),
            vec![
                NoteAction::Edit { id: NoteId::from(4) },
                NoteAction::Delete { id: NoteId::from(4) },
            ]
        );
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        let view = NoteView::from_note(
            &note("sometime", false, Category::Other("misc".to_string())),
            Locale::en_US,
        );
        assert_eq!(view.display_date, "sometime");
        assert_eq!(view.category_label, "Other");
    }

    #[test]
    fn action_tokens_serialize_with_tag() {
        let json = serde_json::to_value(NoteAction::Delete { id: NoteId::from(3) }).unwrap();
        assert_eq!(json, serde_json::json!({"action": "delete", "id": 3}));
    }
}
