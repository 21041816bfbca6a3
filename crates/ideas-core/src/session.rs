//! Edit session state machine.
//!
//! At most one note is open for editing. Opening always starts from a clean
//! slate: a session for another note is closed before the new one opens.

use crate::models::{Category, Note, NoteEdit, NoteId};
use crate::util::normalize_required;
use crate::{Error, Result};

/// Form values pre-filled from the note being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl EditDraft {
    fn snapshot(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
        }
    }
}

/// Why an edit session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancelled,
    OutsideClick,
    Saved,
}

/// Current state of the edit session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Editing(EditDraft),
}

impl EditSession {
    /// Open a session for `id`, which must be present in `notes`.
    ///
    /// Any previous session is closed first. When the note is missing the
    /// session ends up `Closed`.
    pub fn open(&mut self, id: &NoteId, notes: &[Note]) -> Result<&EditDraft> {
        *self = Self::Closed;
        let note = notes
            .iter()
            .find(|note| &note.id == id)
            .ok_or_else(|| Error::NotInCache(id.to_string()))?;
        *self = Self::Editing(EditDraft::snapshot(note));
        match self {
            Self::Editing(draft) => Ok(draft),
            Self::Closed => Err(Error::NotInCache(id.to_string())),
        }
    }

    /// Close the session, returning the draft that was open.
    pub fn close(&mut self, reason: CloseReason) -> Option<EditDraft> {
        let previous = std::mem::take(self);
        match previous {
            Self::Editing(draft) => {
                tracing::debug!(id = %draft.id, ?reason, "Closed edit session");
                Some(draft)
            }
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&EditDraft> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The id being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<&NoteId> {
        self.draft().map(|draft| &draft.id)
    }
}

/// Validate and trim note fields shared by create and save.
pub fn validate_fields(title: &str, content: &str, category: Category) -> Result<NoteEdit> {
    let title = normalize_required(title, "title")?;
    let content = normalize_required(content, "content")?;
    Ok(NoteEdit {
        title,
        content,
        category,
    })
}
