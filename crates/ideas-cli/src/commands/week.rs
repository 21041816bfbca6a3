use ideas_core::{Clock, NoteRemote, NoteStore};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

pub async fn run_week<R, U, C>(store: &mut NoteStore<R, U, C>) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    store.ui_mut().set_screen(Screen::Week);
    let outcome = store.load().await;
    finish(store, outcome)
}
