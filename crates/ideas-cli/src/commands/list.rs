use ideas_core::{Clock, FilterState, NoteRemote, NoteStore};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

pub async fn run_list<R, U, C>(
    store: &mut NoteStore<R, U, C>,
    all: bool,
    as_json: bool,
) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    let filter = if all {
        FilterState::All
    } else {
        FilterState::Today
    };
    // Switch while quiet so the empty pre-load cache is not printed.
    store.ui_mut().set_screen(Screen::Quiet);
    store.set_filter(filter);

    store.ui_mut().set_screen(Screen::Notes { json: as_json });
    let outcome = store.load().await;
    finish(store, outcome)
}
