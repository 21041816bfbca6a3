//! Data models for Ideas

mod category;
mod note;

pub use category::Category;
pub use note::{day_key, CompletionPatch, NewNote, Note, NoteEdit, NoteId};
