//! Idea repository

#![allow(clippy::cast_precision_loss)] // counts stay far below 2^52

use std::path::Path;

use chrono::NaiveDate;
use ideas_core::{Category, Note, NoteId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use serde::Serialize;

use super::migrations;

/// A row to insert; defaults are applied by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdea {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub date: String,
    pub completed: bool,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaPatch {
    pub completed: Option<bool>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
}

impl IdeaPatch {
    pub const fn is_empty(&self) -> bool {
        self.completed.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
    }

    fn assignments(&self) -> (Vec<&'static str>, Vec<Value>) {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        if let Some(completed) = self.completed {
            columns.push("completed = ?");
            values.push(Value::Integer(i64::from(completed)));
        }
        if let Some(title) = &self.title {
            columns.push("title = ?");
            values.push(Value::Text(title.clone()));
        }
        if let Some(content) = &self.content {
            columns.push("content = ?");
            values.push(Value::Text(content.clone()));
        }
        if let Some(category) = &self.category {
            columns.push("category = ?");
            values.push(Value::Text(category.as_str().to_string()));
        }
        (columns, values)
    }
}

/// Collection totals, as served by `GET /api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdeaStats {
    pub total: i64,
    pub completed: i64,
    pub today: i64,
    /// Percentage rounded to two decimals
    pub completion_rate: f64,
}

/// `SQLite`-backed idea storage.
pub struct IdeaRepository {
    conn: Connection,
}

impl IdeaRepository {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// All ideas, newest date first.
    pub fn list(&self) -> rusqlite::Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, category, date, completed
             FROM ideas ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map([], parse_idea)?;
        rows.collect()
    }

    /// Insert a row and return its id.
    pub fn insert(&self, idea: &NewIdea) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO ideas (title, content, category, date, completed)
             VALUES (?, ?, ?, ?, ?)",
            params![
                idea.title,
                idea.content,
                idea.category.as_str(),
                idea.date,
                idea.completed
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replace title, content and category. Returns whether a row matched.
    pub fn replace(
        &self,
        id: i64,
        title: &str,
        content: &str,
        category: &Category,
    ) -> rusqlite::Result<bool> {
        let changed = self.conn.execute(
            "UPDATE ideas SET title = ?, content = ?, category = ? WHERE id = ?",
            params![title, content, category.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    /// Apply the fields present in `patch`. Returns whether a row matched.
    pub fn patch(&self, id: i64, patch: &IdeaPatch) -> rusqlite::Result<bool> {
        let (columns, mut values) = patch.assignments();
        if columns.is_empty() {
            return Ok(false);
        }
        values.push(Value::Integer(id));
        let sql = format!("UPDATE ideas SET {} WHERE id = ?", columns.join(", "));
        let changed = self.conn.execute(&sql, params_from_iter(values))?;
        Ok(changed > 0)
    }

    /// Hard delete. Returns whether a row matched.
    pub fn delete(&self, id: i64) -> rusqlite::Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM ideas WHERE id = ?", params![id])?;
        Ok(changed > 0)
    }

    /// Totals with `today` counted by the `YYYY-MM-DD` prefix of `date`.
    pub fn stats(&self, today: NaiveDate) -> rusqlite::Result<IdeaStats> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM ideas", [], |row| row.get(0))?;
        let completed: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM ideas WHERE completed = 1",
            [],
            |row| row.get(0),
        )?;
        let prefix = format!("{}%", today.format("%Y-%m-%d"));
        let today_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM ideas WHERE date LIKE ?",
            params![prefix],
            |row| row.get(0),
        )?;

        Ok(IdeaStats {
            total,
            completed,
            today: today_count,
            completion_rate: rounded_rate(completed, total),
        })
    }
}

fn rounded_rate(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let percent = completed as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

fn parse_idea(row: &Row<'_>) -> rusqlite::Result<Note> {
    let category: String = row.get(3)?;
    Ok(Note {
        id: NoteId::from(row.get::<_, i64>(0)?),
        title: row.get(1)?,
        content: row.get(2)?,
        category: Category::from(category.as_str()),
        date: row.get(4)?,
        completed: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn idea(title: &str, date: &str) -> NewIdea {
        NewIdea {
            title: title.to_string(),
            content: format!("{title} content"),
            category: Category::Idea,
            date: date.to_string(),
            completed: false,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn list_orders_newest_first() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        repo.insert(&idea("old", "2024-01-01T08:00:00")).unwrap();
        repo.insert(&idea("new", "2024-01-03T08:00:00")).unwrap();
        repo.insert(&idea("mid", "2024-01-02T08:00:00")).unwrap();

        let titles: Vec<String> = repo.list().unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn insert_returns_row_id_and_round_trips_fields() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        let mut new = idea("walk", "2024-01-02T10:00:00-03:00");
        new.category = Category::Other("pensamento".to_string());
        new.completed = true;

        let id = repo.insert(&new).unwrap();
        let notes = repo.list().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, NoteId::from(id));
        assert_eq!(notes[0].category, Category::Other("pensamento".to_string()));
        assert!(notes[0].completed);
    }

    #[test]
    fn replace_and_delete_report_missing_rows() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        let id = repo.insert(&idea("a", "2024-01-02")).unwrap();

        assert!(repo.replace(id, "b", "c", &Category::Meta).unwrap());
        assert!(!repo.replace(id + 1, "b", "c", &Category::Meta).unwrap());
        let note = &repo.list().unwrap()[0];
        assert_eq!((note.title.as_str(), note.category.clone()), ("b", Category::Meta));

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn patch_touches_only_given_fields() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        let id = repo.insert(&idea("keep", "2024-01-02")).unwrap();

        let patch = IdeaPatch {
            completed: Some(true),
            ..IdeaPatch::default()
        };
        assert!(repo.patch(id, &patch).unwrap());
        let note = &repo.list().unwrap()[0];
        assert!(note.completed);
        assert_eq!(note.title, "keep");

        assert!(!repo.patch(id, &IdeaPatch::default()).unwrap());
        assert!(!repo.patch(id + 7, &patch).unwrap());
    }

    #[test]
    fn stats_count_today_by_date_prefix() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        let mut done = idea("done", "2024-01-02T09:00:00");
        done.completed = true;
        repo.insert(&done).unwrap();
        repo.insert(&idea("today", "2024-01-02T18:00:00")).unwrap();
        repo.insert(&idea("before", "2024-01-01T18:00:00")).unwrap();

        let stats = repo.stats(day(2024, 1, 2)).unwrap();
        assert_eq!(
            stats,
            IdeaStats {
                total: 3,
                completed: 1,
                today: 2,
                completion_rate: 33.33,
            }
        );
    }

    #[test]
    fn stats_on_empty_database() {
        let repo = IdeaRepository::open_in_memory().unwrap();
        let stats = repo.stats(day(2024, 1, 2)).unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.completion_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ideas.db");
        {
            let repo = IdeaRepository::open(&path).unwrap();
            repo.insert(&idea("persisted", "2024-01-02")).unwrap();
        }
        let repo = IdeaRepository::open(&path).unwrap();
        assert_eq!(repo.list().unwrap()[0].title, "persisted");
    }
}
