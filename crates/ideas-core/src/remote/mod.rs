//! Remote note collection.

mod http;

pub use http::HttpNoteRemote;

use crate::models::{NewNote, Note, NoteEdit, NoteId};
use crate::Result;

/// Operations the client needs from the remote collection.
///
/// Every call either succeeds or fails as a whole; implementations do not
/// distinguish failure kinds beyond the error message.
#[allow(async_fn_in_trait)]
pub trait NoteRemote {
    /// Fetch the full collection in store order.
    async fn list(&self) -> Result<Vec<Note>>;

    async fn create(&self, note: &NewNote) -> Result<()>;

    async fn update(&self, id: &NoteId, edit: &NoteEdit) -> Result<()>;

    async fn set_completed(&self, id: &NoteId, completed: bool) -> Result<()>;

    async fn remove(&self, id: &NoteId) -> Result<()>;
}
