//! The note store: cache, sync, filter, aggregates and edit session.
//!
//! The cache mirrors the remote collection and is only ever replaced by a full
//! reload. Every mutation goes mutate → reload → render, strictly in order,
//! and a failing step aborts the rest of the chain. Operations never return
//! errors to the caller: each ends in an [`Outcome`] and (except a silent
//! successful `load`) exactly one notification.


use std::collections::HashSet;

use chrono::{Locale, NaiveDate};

use crate::aggregate::{Stats, WeekSeries};
use crate::clock::{Clock, SystemClock};
use crate::filter::{visible_notes, FilterState};
use crate::models::{Category, NewNote, Note, NoteEdit, NoteId};
use crate::notify::{ConfirmPrompt, Notification, Notifier};
use crate::remote::NoteRemote;
use crate::session::{validate_fields, CloseReason, EditDraft, EditSession};
use crate::view::{note_views, NoteAction, ViewRenderer};
use crate::{Error, Result};

pub const VALIDATION_MESSAGE: &str = "Please fill in both the title and the content.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";
pub const REFRESH_FAILED_MESSAGE: &str = "Change saved, but the note list could not be refreshed";

/// Everything the store needs from the user interface.
pub trait Frontend: ViewRenderer + Notifier + ConfirmPrompt {}

impl<T: ViewRenderer + Notifier + ConfirmPrompt> Frontend for T {}

/// How a user operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation completed, including the reload that follows mutations
    Applied,
    /// Input was rejected before any request was made
    Invalid,
    /// A store request failed; the cache is unchanged
    Failed,
    /// The user declined the confirmation prompt
    Declined,
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Load,
    Create,
    Update,
    Remove,
    Complete(bool),
}

impl Operation {
    const fn success_message(self) -> &'static str {
        match self {
            Self::Load => "Notes loaded",
            Self::Create => "Note added",
            Self::Update => "Note updated",
            Self::Remove => "Note deleted",
            Self::Complete(true) => "Note marked as done",
            Self::Complete(false) => "Note marked as not done",
        }
    }

    const fn error_message(self) -> &'static str {
        match self {
            Self::Load => "Failed to load notes",
            Self::Create => "Failed to add note",
            Self::Update | Self::Complete(_) => "Failed to update note",
            Self::Remove => "Failed to delete note",
        }
    }
}

/// Owner of the note cache and the UI state derived from it.
pub struct NoteStore<R, U, C = SystemClock>
where
    U: ViewRenderer,
{
    remote: R,
    ui: U,
    clock: C,
    locale: Locale,
    notes: Vec<Note>,
    filter: FilterState,
    session: EditSession,
    chart: Option<U::Chart>,
}

impl<R, U> NoteStore<R, U, SystemClock>
where
    R: NoteRemote,
    U: Frontend,
{
    pub fn new(remote: R, ui: U, locale: Locale) -> Self {
        Self::with_clock(remote, ui, SystemClock, locale)
    }
}

impl<R, U, C> NoteStore<R, U, C>
where
    R: NoteRemote,
    U: Frontend,
    C: Clock,
{
    pub fn with_clock(remote: R, ui: U, clock: C, locale: Locale) -> Self {
        Self {
            remote,
            ui,
            clock,
            locale,
            notes: Vec::new(),
            filter: FilterState::default(),
            session: EditSession::default(),
            chart: None,
        }
    }

    // -----------------------------------------------------------------------
    // Sync
    // -----------------------------------------------------------------------

    /// Replace the cache with the store's collection and re-render.
    ///
    /// Silent on success; on failure the previous cache is kept.
    pub async fn load(&mut self) -> Outcome {
        match self.reload().await {
            Ok(()) => {
                self.render();
                Outcome::Applied
            }
            Err(error) => self.fail(Operation::Load, &error),
        }
    }

    /// Create a note dated now, then reload.
    pub async fn create(&mut self, title: &str, content: &str, category: Category) -> Outcome {
        let fields = match validate_fields(title, content, category) {
            Ok(fields) => fields,
            Err(error) => return self.reject(&error),
        };
        let note = NewNote {
            title: fields.title,
            content: fields.content,
            category: fields.category,
            date: self.clock.now().to_rfc3339(),
            completed: false,
        };

        let submitted = self.remote.create(&note).await;
        let outcome = self.complete(Operation::Create, submitted).await;
        if outcome.is_applied() {
            self.ui.reset_compose_form();
        }
        outcome
    }

    /// Replace title, content and category of `id`, then reload.
    pub async fn update(
        &mut self,
        id: &NoteId,
        title: &str,
        content: &str,
        category: Category,
    ) -> Outcome {
        match validate_fields(title, content, category) {
            Ok(edit) => self.submit_update(id, &edit).await,
            Err(error) => self.reject(&error),
        }
    }

    /// Delete `id` after the user confirms, then reload.
    pub async fn remove(&mut self, id: &NoteId) -> Outcome {
        if !self.ui.confirm(DELETE_PROMPT) {
            tracing::debug!(%id, "Delete declined");
            return Outcome::Declined;
        }
        let submitted = self.remote.remove(id).await;
        self.complete(Operation::Remove, submitted).await
    }

    /// Set the completion flag of `id`, then reload.
    pub async fn set_completed(&mut self, id: &NoteId, completed: bool) -> Outcome {
        let submitted = self.remote.set_completed(id, completed).await;
        self.complete(Operation::Complete(completed), submitted).await
    }

    /// Run the operation bound to a rendered action token.
    pub async fn dispatch(&mut self, action: NoteAction) -> Outcome {
        match action {
            NoteAction::Toggle { id, completed } => self.set_completed(&id, completed).await,
            NoteAction::Edit { id } => self.open_edit(&id),
            NoteAction::Delete { id } => self.remove(&id).await,
        }
    }

    async fn submit_update(&mut self, id: &NoteId, edit: &NoteEdit) -> Outcome {
        let submitted = self.remote.update(id, edit).await;
        self.complete(Operation::Update, submitted).await
    }

    /// Finish a mutation: reload, re-render and notify once.
    async fn complete(&mut self, operation: Operation, submitted: Result<()>) -> Outcome {
        if let Err(error) = submitted {
            return self.fail(operation, &error);
        }
        if let Err(error) = self.reload().await {
            tracing::warn!(?operation, remote = error.is_fetch(), %error, "Reload after change failed");
            self.ui.notify(Notification::error(REFRESH_FAILED_MESSAGE));
            return Outcome::Failed;
        }
        self.render();
        tracing::info!(?operation, notes = self.notes.len(), "Applied note operation");
        self.ui.notify(Notification::success(operation.success_message()));
        Outcome::Applied
    }

    async fn reload(&mut self) -> Result<()> {
        let fetched = self.remote.list().await?;
        self.notes = dedupe_by_id(fetched);
        tracing::debug!(notes = self.notes.len(), "Reloaded note cache");
        Ok(())
    }

    fn fail(&mut self, operation: Operation, error: &Error) -> Outcome {
        tracing::warn!(?operation, remote = error.is_fetch(), %error, "Note operation failed");
        self.ui.notify(Notification::error(operation.error_message()));
        Outcome::Failed
    }

    fn reject(&mut self, error: &Error) -> Outcome {
        tracing::debug!(%error, "Rejected note input");
        self.ui.notify(Notification::error(VALIDATION_MESSAGE));
        Outcome::Invalid
    }

    // -----------------------------------------------------------------------
    // Filter and render
    // -----------------------------------------------------------------------

    /// Switch the active filter and re-render the list.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.render_notes();
    }

    /// Re-render list, stats and chart from the current cache.
    pub fn render(&mut self) {
        self.render_notes();
        let stats = self.stats();
        self.ui.render_stats(&stats);
        self.redraw_chart();
    }

    fn render_notes(&mut self) {
        let views = note_views(&self.visible_notes(), self.locale);
        self.ui.render_notes(&views);
    }

    fn redraw_chart(&mut self) {
        if let Some(previous) = self.chart.take() {
            self.ui.discard_chart(previous);
        }
        let series = self.week_series();
        self.chart = Some(self.ui.build_chart(&series));
    }

    // -----------------------------------------------------------------------
    // Edit session
    // -----------------------------------------------------------------------

    /// Open the edit form for a cached note.
    pub fn open_edit(&mut self, id: &NoteId) -> Outcome {
        match self.session.open(id, &self.notes) {
            Ok(draft) => {
                let draft = draft.clone();
                self.ui.show_edit_form(&draft);
                Outcome::Applied
            }
            Err(error) => {
                tracing::warn!(%error, "Cannot open edit session");
                self.ui.hide_edit_form();
                self.ui.notify(Notification::error("Note not found"));
                Outcome::Failed
            }
        }
    }

    /// Close the edit form without saving.
    pub fn cancel_edit(&mut self) -> Option<EditDraft> {
        self.close_edit(CloseReason::Cancelled)
    }

    /// Close the edit form because the user clicked outside it.
    pub fn dismiss_edit(&mut self) -> Option<EditDraft> {
        self.close_edit(CloseReason::OutsideClick)
    }

    /// Validate the form, submit the update and close on success.
    ///
    /// Validation or store failures keep the session open for another try.
    pub async fn save_edit(&mut self, title: &str, content: &str, category: Category) -> Outcome {
        let Some(id) = self.session.editing_id().cloned() else {
            tracing::warn!("Save requested without an open edit session");
            self.ui.notify(Notification::error("No note is being edited"));
            return Outcome::Invalid;
        };
        let edit = match validate_fields(title, content, category) {
            Ok(edit) => edit,
            Err(error) => return self.reject(&error),
        };

        let outcome = self.submit_update(&id, &edit).await;
        if outcome.is_applied() {
            self.close_edit(CloseReason::Saved);
        }
        outcome
    }

    fn close_edit(&mut self, reason: CloseReason) -> Option<EditDraft> {
        let closed = self.session.close(reason);
        if closed.is_some() {
            self.ui.hide_edit_form();
        }
        closed
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// The cached notes in store order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    #[must_use]
    pub const fn filter(&self) -> FilterState {
        self.filter
    }

    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        visible_notes(&self.notes, self.filter, self.today())
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from_notes(&self.notes, self.today())
    }

    #[must_use]
    pub fn week_series(&self) -> WeekSeries {
        WeekSeries::from_notes(&self.notes, self.today(), self.locale)
    }

    #[must_use]
    pub const fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub const fn remote(&self) -> &R {
        &self.remote
    }
}

/// Keep the first occurrence of each id; the store should never send
/// duplicates, but the cache must stay keyed by id.
fn dedupe_by_id(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::with_capacity(notes.len());
    let before = notes.len();
    let unique: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id.clone()))
        .collect();
    if unique.len() != before {
        tracing::warn!(
            dropped = before - unique.len(),
            "Remote store returned duplicate note ids"
        );
    }
    unique
}
