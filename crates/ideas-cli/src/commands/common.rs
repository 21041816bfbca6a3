use ideas_core::{Clock, NoteRemote, NoteStore, Outcome};

use crate::error::CliError;
use crate::terminal::Console;

const FALLBACK_FAILURE: &str = "The operation did not complete";

/// Flush the terminal and turn a non-applied outcome into an exit error.
///
/// Declined operations are not failures.
pub fn finish<R, U, C>(store: &mut NoteStore<R, U, C>, outcome: Outcome) -> Result<(), CliError>
where
    R: NoteRemote,
    U: Console,
    C: Clock,
{
    store.ui_mut().finish()?;
    match outcome {
        Outcome::Applied | Outcome::Declined => Ok(()),
        Outcome::Invalid | Outcome::Failed => {
            let message = store
                .ui()
                .notification()
                .map_or_else(|| FALLBACK_FAILURE.to_string(), |n| n.message.clone());
            Err(CliError::Incomplete(message))
        }
    }
}
