//! ideas-core - Core library for Ideas
//!
//! This crate contains the note models, the REST client, and the note store
//! that drives every Ideas front end (CLI today, anything that implements the
//! rendering traits tomorrow). The HTTP server reuses the models.

pub mod aggregate;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod notify;
pub mod remote;
pub mod session;
pub mod store;
pub mod util;
pub mod view;

pub use aggregate::{completion_rate, DayBucket, Stats, WeekSeries};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use filter::FilterState;
pub use models::{Category, NewNote, Note, NoteEdit, NoteId};
pub use notify::{ConfirmPrompt, Notification, Notifier, Severity, Toast};
pub use remote::{HttpNoteRemote, NoteRemote};
pub use session::{EditDraft, EditSession};
pub use store::{Frontend, NoteStore, Outcome};
pub use view::{NoteAction, NoteView, ViewRenderer};
