use ideas_core::{Category, Clock, NoteRemote, NoteStore};

use crate::commands::common::finish;
use crate::error::CliError;
use crate::terminal::{Console, Screen};

pub async fn run_add<R, U, C>(
    store: &mut NoteStore<R, U, C>,
    title: &str,
    content_parts: &[String],
    category: Category,
) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    let content = content_parts.join(" ");
    store.ui_mut().set_screen(Screen::Quiet);
    let outcome = store.create(title, &content, category).await;
    finish(store, outcome)
}
