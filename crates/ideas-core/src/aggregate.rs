//! Summaries derived from the note cache: totals and the weekly histogram.

use chrono::{Days, Locale, NaiveDate};
use serde::Serialize;

use crate::filter::{visible_notes, FilterState};
use crate::models::Note;

/// Number of daily buckets in a [`WeekSeries`].
pub const WEEK_DAYS: u64 = 7;

/// Running totals shown in the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub today_count: usize,
    pub total_count: usize,
    pub completed_count: usize,
    /// Integer percentage in `0..=100`
    pub completion_rate: u8,
}

impl Stats {
    /// Compute stats over the whole cache.
    #[must_use]
    pub fn from_notes(notes: &[Note], today: NaiveDate) -> Self {
        let completed_count = notes.iter().filter(|note| note.completed).count();
        Self {
            today_count: visible_notes(notes, FilterState::Today, today).len(),
            total_count: notes.len(),
            completed_count,
            completion_rate: completion_rate(completed_count, notes.len()),
        }
    }
}

/// `round(100 * completed / total)`, or 0 for an empty collection.
#[must_use]
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // Half-up rounding in integer arithmetic.
    let rate = (completed * 200 + total) / (total * 2);
    u8::try_from(rate).unwrap_or(100)
}

/// One day of the weekly histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Short weekday name in the configured locale
    pub label: String,
    pub count: usize,
}

/// Note counts for the seven days ending today, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSeries {
    pub buckets: Vec<DayBucket>,
}

impl WeekSeries {
    /// Build the series for the week ending at `today`.
    ///
    /// Always yields [`WEEK_DAYS`] buckets, including days without notes.
    #[must_use]
    pub fn from_notes(notes: &[Note], today: NaiveDate, locale: Locale) -> Self {
        let buckets = (0..WEEK_DAYS)
            .rev()
            .map(|offset| {
                let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
                DayBucket {
                    date,
                    label: weekday_label(date, locale),
                    count: notes.iter().filter(|note| note.is_on(date)).count(),
                }
            })
            .collect();
        Self { buckets }
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.buckets
            .iter()
            .map(|bucket| bucket.label.as_str())
            .collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<usize> {
        self.buckets.iter().map(|bucket| bucket.count).collect()
    }

    /// Largest bucket count, used to scale text charts.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.buckets
            .iter()
            .map(|bucket| bucket.count)
            .max()
            .unwrap_or(0)
    }
}

/// Abbreviated weekday name for `date` in `locale`.
#[must_use]
pub fn weekday_label(date: NaiveDate, locale: Locale) -> String {
    format_day(date, "%a", locale)
}

/// Locale-aware short date (`%x`), e.g. `02/01/2024` for `pt_BR`.
#[must_use]
pub fn display_date(date: NaiveDate, locale: Locale) -> String {
    format_day(date, "%x", locale)
}

fn format_day(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    date.and_hms_opt(0, 0, 0).map_or_else(
        || date.to_string(),
        |midnight| {
            midnight
                .and_utc()
                .format_localized(pattern, locale)
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NoteId};
    use pretty_assertions::assert_eq;

    fn note(id: i64, date: &str, completed: bool) -> Note {
        Note {
            id: NoteId::from(id),
            title: format!("Note {id}"),
            content: "body".to_string(),
            category: Category::Idea,
            date: date.to_string(),
            completed,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn completion_rate_of_empty_cache_is_zero() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(Stats::from_notes(&[], day(2024, 1, 1)), Stats::default());
    }

    #[test]
    fn completion_rate_rounds_half_up() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(1, 200), 1);
        assert_eq!(completion_rate(1, 201), 0);
        assert_eq!(completion_rate(5, 5), 100);
    }

    #[test]
    fn completion_rate_stays_in_range() {
        for total in 0..40 {
            for completed in 0..=total {
                assert!(completion_rate(completed, total) <= 100);
            }
        }
    }

    #[test]
    fn stats_for_single_old_note() {
        let notes = vec![note(1, "2024-01-01", false)];
        let stats = Stats::from_notes(&notes, day(2024, 1, 2));
        assert_eq!(
            stats,
            Stats {
                today_count: 0,
                total_count: 1,
                completed_count: 0,
                completion_rate: 0,
            }
        );
    }

    #[test]
    fn stats_count_today_and_completed() {
        let notes = vec![
            note(1, "2024-01-02T08:00:00Z", true),
            note(2, "2024-01-02T09:00:00Z", false),
            note(3, "2023-12-30T09:00:00Z", true),
            note(4, "2023-12-29T09:00:00Z", true),
        ];
        let stats = Stats::from_notes(&notes, day(2024, 1, 2));
        assert_eq!(stats.today_count, 2);
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.completed_count, 3);
        assert_eq!(stats.completion_rate, 75);
    }

    #[test]
    fn week_series_has_seven_buckets_ending_today() {
        let series = WeekSeries::from_notes(&[], day(2024, 3, 2), Locale::en_US);
        assert_eq!(series.buckets.len(), 7);
        assert_eq!(series.buckets[0].date, day(2024, 2, 25));
        assert_eq!(series.buckets[6].date, day(2024, 3, 2));
        assert_eq!(series.values(), vec![0; 7]);
        assert_eq!(series.peak(), 0);
    }

    #[test]
    fn week_series_counts_per_day() {
        let notes = vec![
            note(1, "2024-01-07T10:00:00Z", false),
            note(2, "2024-01-07T11:00:00Z", true),
            note(3, "2024-01-01T11:00:00Z", false),
            note(4, "2023-12-31T11:00:00Z", false),
            note(5, "2024-01-08T11:00:00Z", false),
        ];
        let series = WeekSeries::from_notes(&notes, day(2024, 1, 7), Locale::en_US);
        assert_eq!(series.values(), vec![1, 0, 0, 0, 0, 0, 2]);
        assert_eq!(series.peak(), 2);
    }

    #[test]
    fn week_series_labels_follow_locale() {
        // 2024-01-07 was a Sunday.
        let english = WeekSeries::from_notes(&[], day(2024, 1, 7), Locale::en_US);
        assert_eq!(english.labels().last().copied(), Some("Sun"));
        assert_eq!(english.labels().first().copied(), Some("Mon"));

        let portuguese = WeekSeries::from_notes(&[], day(2024, 1, 7), Locale::pt_BR);
        assert_eq!(portuguese.labels().last().copied(), Some("dom"));
    }

    #[test]
    fn display_date_follows_locale() {
        assert_eq!(display_date(day(2024, 1, 2), Locale::pt_BR), "02/01/2024");
    }
}
