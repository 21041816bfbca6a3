use ideas_core::{Clock, NoteId, NoteRemote, NoteStore, Outcome};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

pub async fn run_delete<R, U, C>(
    store: &mut NoteStore<R, U, C>,
    id: &NoteId,
    assume_yes: bool,
) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    store.ui_mut().set_screen(Screen::Quiet);
    store.ui_mut().set_assume_yes(assume_yes);
    let outcome = store.remove(id).await;
    if outcome == Outcome::Declined {
        store.ui_mut().report("Delete cancelled.");
    }
    finish(store, outcome)
}
