use ideas_core::{Category, Clock, NoteId, NoteRemote, NoteStore};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

/// Replacement values given on the command line; missing ones keep the
/// note's current value.
#[derive(Debug, Default)]
pub struct EditFields {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
}

pub async fn run_edit<R, U, C>(
    store: &mut NoteStore<R, U, C>,
    id: &NoteId,
    fields: EditFields,
) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    store.ui_mut().set_screen(Screen::Quiet);
    let loaded = store.load().await;
    if !loaded.is_applied() {
        return finish(store, loaded);
    }

    let opened = store.open_edit(id);
    let Some(draft) = store.session().draft().cloned() else {
        return finish(store, opened);
    };

    let title = fields.title.unwrap_or(draft.title);
    let content = fields.content.unwrap_or(draft.content);
    let category = fields.category.unwrap_or(draft.category);
    let outcome = store.save_edit(&title, &content, category).await;
    if store.session().is_open() {
        store.cancel_edit();
    }
    finish(store, outcome)
}
