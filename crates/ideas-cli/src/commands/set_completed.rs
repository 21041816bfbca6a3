use ideas_core::{Clock, NoteId, NoteRemote, NoteStore};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

pub async fn run_set_completed<R, U, C>(
    store: &mut NoteStore<R, U, C>,
    id: &NoteId,
    completed: bool,
) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    store.ui_mut().set_screen(Screen::Quiet);
    let outcome = store.set_completed(id, completed).await;
    finish(store, outcome)
}
