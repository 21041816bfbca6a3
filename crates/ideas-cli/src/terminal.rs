//! Terminal front end for the note store.
//!
//! Renders to `out`, reports to `err`, and reads confirmations from `input`.
//! Write failures cannot travel back through the rendering traits, so the
//! first one is kept and surfaced by [`Console::finish`].

use std::io::{self, BufRead, Stderr, Stdout, Write};
use std::time::{Duration, Instant};

use ideas_core::{
    ConfirmPrompt, Frontend, Notification, Notifier, NoteView, Severity, Stats, Toast,
    ViewRenderer, WeekSeries,
};

use crate::error::CliError;

const BAR_WIDTH: usize = 30;
const PREVIEW_CHARS: usize = 48;

/// What the current command wants printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Screen {
    /// Mutations: only notifications reach the terminal
    #[default]
    Quiet,
    Notes {
        json: bool,
    },
    Stats {
        json: bool,
    },
    Week,
}

/// Rendered weekly chart, one line per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChart {
    pub lines: Vec<String>,
}

pub struct Terminal<O, E, I> {
    out: O,
    err: E,
    input: I,
    screen: Screen,
    assume_yes: bool,
    toast: Toast,
    write_error: Option<io::Error>,
}

impl Terminal<Stdout, Stderr, io::StdinLock<'static>> {
    pub fn stdio(toast_duration: Duration) -> Self {
        Self::new(
            io::stdout(),
            io::stderr(),
            io::stdin().lock(),
            toast_duration,
        )
    }
}

impl<O: Write, E: Write, I: BufRead> Terminal<O, E, I> {
    pub fn new(out: O, err: E, input: I, toast_duration: Duration) -> Self {
        Self {
            out,
            err,
            input,
            screen: Screen::Quiet,
            assume_yes: false,
            toast: Toast::new(toast_duration),
            write_error: None,
        }
    }

    #[cfg(test)]
    pub const fn output(&self) -> &O {
        &self.out
    }

    #[cfg(test)]
    pub const fn errors(&self) -> &E {
        &self.err
    }

    fn write_out(&mut self, text: &str) {
        if let Err(error) = writeln!(self.out, "{text}") {
            self.write_error.get_or_insert(error);
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&mut self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.write_out(&json),
            Err(error) => {
                self.write_error.get_or_insert(error.into());
            }
        }
    }
}

/// Terminal-specific controls the commands drive on top of [`Frontend`].
pub trait Console: Frontend {
    /// Choose what the next render prints.
    fn set_screen(&mut self, screen: Screen);

    /// Answer every confirmation with yes.
    fn set_assume_yes(&mut self, assume_yes: bool);

    /// Print an informational line that is not a notification.
    fn report(&mut self, text: &str);

    /// The notification still on display, if any.
    fn notification(&self) -> Option<&Notification>;

    /// Flush output and surface the first write failure.
    fn finish(&mut self) -> Result<(), CliError>;
}

impl<O: Write, E: Write, I: BufRead> Console for Terminal<O, E, I> {
    fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn set_assume_yes(&mut self, assume_yes: bool) {
        self.assume_yes = assume_yes;
    }

    fn report(&mut self, text: &str) {
        if let Err(error) = writeln!(self.err, "{text}") {
            self.write_error.get_or_insert(error);
        }
    }

    fn notification(&self) -> Option<&Notification> {
        self.toast.visible(Instant::now())
    }

    fn finish(&mut self) -> Result<(), CliError> {
        self.out.flush()?;
        match self.write_error.take() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl<O: Write, E: Write, I: BufRead> ViewRenderer for Terminal<O, E, I> {
    type Chart = TextChart;

    fn render_notes(&mut self, notes: &[NoteView]) {
        match self.screen {
            Screen::Notes { json: true } => self.write_json(notes),
            Screen::Notes { json: false } => {
                if notes.is_empty() {
                    self.write_out("No notes to show.");
                }
                for line in format_note_lines(notes) {
                    self.write_out(&line);
                }
            }
            _ => {}
        }
    }

    fn render_stats(&mut self, stats: &Stats) {
        match self.screen {
            Screen::Stats { json: true } => self.write_json(stats),
            Screen::Stats { json: false } => {
                let line = format_stats(stats);
                self.write_out(&line);
            }
            _ => {}
        }
    }

    fn build_chart(&mut self, series: &WeekSeries) -> TextChart {
        let chart = TextChart {
            lines: format_week_lines(series),
        };
        if self.screen == Screen::Week {
            for line in &chart.lines {
                self.write_out(line);
            }
        }
        chart
    }

    fn discard_chart(&mut self, chart: TextChart) {
        tracing::trace!(lines = chart.lines.len(), "Discarded text chart");
    }
}

impl<O: Write, E: Write, I: BufRead> Notifier for Terminal<O, E, I> {
    fn notify(&mut self, notification: Notification) {
        // Errors are reported once, by main, through CliError::Incomplete.
        if notification.severity == Severity::Success {
            self.report(&notification.message);
        }
        self.toast.show(notification, Instant::now());
    }
}

impl<O: Write, E: Write, I: BufRead> ConfirmPrompt for Terminal<O, E, I> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.err, "{message} [y/N] ")
            .and_then(|()| self.err.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(error) => {
                tracing::warn!(%error, "Failed to read confirmation");
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn format_note_lines(notes: &[NoteView]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let check = if note.completed { "[x]" } else { "[ ]" };
            format!(
                "{check} {:>4}  {}  {:<8}  {}: {}",
                note.id.as_str(),
                note.display_date,
                note.category_label,
                note.title,
                preview(&note.content, PREVIEW_CHARS)
            )
        })
        .collect()
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Today: {}  Total: {}  Completed: {}  Completion rate: {}%",
        stats.today_count, stats.total_count, stats.completed_count, stats.completion_rate
    )
}

/// One `label | bars count` line per day, scaled to the busiest day.
pub fn format_week_lines(series: &WeekSeries) -> Vec<String> {
    let peak = series.peak();
    let label_width = series
        .buckets
        .iter()
        .map(|bucket| bucket.label.chars().count())
        .max()
        .unwrap_or(0);
    series
        .buckets
        .iter()
        .map(|bucket| {
            let width = if peak == 0 {
                0
            } else {
                (bucket.count * BAR_WIDTH).div_ceil(peak)
            };
            format!(
                "{:<label_width$} | {} {}",
                bucket.label,
                "#".repeat(width),
                bucket.count
            )
        })
        .collect()
}

/// Single-line preview of `content`, truncated with an ellipsis.
pub fn preview(content: &str, max_chars: usize) -> String {
    let single_line = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let mut truncated = single_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect::<String>();
    truncated.push_str("...");
    truncated
}
