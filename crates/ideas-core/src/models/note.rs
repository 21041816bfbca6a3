//! Note model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::Category;

/// Identifier assigned by the remote store.
///
/// The store hands out integer row ids today, but the client treats the value
/// as opaque text so either JSON numbers or strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("note id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Only ids whose text is exactly a canonical integer go out as numbers.
        if let Ok(number) = self.0.parse::<i64>() {
            if number.to_string() == self.0 {
                return serializer.serialize_i64(number);
            }
        }
        if let Ok(number) = self.0.parse::<u64>() {
            if number.to_string() == self.0 {
                return serializer.serialize_u64(number);
            }
        }
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Unsigned(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Ok(Self::from(number)),
            RawId::Unsigned(number) => Ok(Self(number.to_string())),
            RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// A journal entry as stored by the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier
    pub id: NoteId,
    /// Short heading
    pub title: String,
    /// Body text
    pub content: String,
    /// Category, kept verbatim even when unrecognized
    pub category: Category,
    /// Creation timestamp (ISO-8601), never changed after creation
    pub date: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    /// Calendar day this note was created on.
    ///
    /// Taken from the `YYYY-MM-DD` prefix of `date`, so the day is whatever the
    /// creating client wrote, without any timezone conversion.
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        day_key(&self.date)
    }

    /// Whether this note was created on `day`.
    #[must_use]
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == Some(day)
    }
}

/// Parse the `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
#[must_use]
pub fn day_key(date: &str) -> Option<NaiveDate> {
    let prefix = date.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Payload submitted when creating a note (everything except the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub date: String,
    pub completed: bool,
}

/// Payload submitted when editing a note. `date` and `completed` are never
/// part of an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEdit {
    pub title: String,
    pub content: String,
    pub category: Category,
}

/// Payload submitted when toggling completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPatch {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_json(id: &str) -> String {
        format!(
            r#"{{"id": {id}, "title": "t", "content": "c", "category": "idea",
                "date": "2024-01-02T09:30:00+01:00", "completed": true}}"#
        )
    }

    #[test]
    fn test_note_id_accepts_number_and_string() {
        let from_number: Note = serde_json::from_str(&note_json("7")).unwrap();
        let from_text: Note = serde_json::from_str(&note_json("\"7\"")).unwrap();
        assert_eq!(from_number.id, from_text.id);
        assert_eq!(from_number.id.as_str(), "7");
    }

    #[test]
    fn test_note_id_serializes_numeric_ids_as_numbers() {
        assert_eq!(serde_json::to_string(&NoteId::from(42)).unwrap(), "42");
        let text: NoteId = "abc-1".parse().unwrap();
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"abc-1\"");
    }

    #[test]
    fn test_note_id_keeps_non_canonical_text() {
        for raw in ["007", "+7", "-0"] {
            let id: NoteId = raw.parse().unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{raw}\""));
            let back: NoteId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn test_note_id_accepts_ids_beyond_i64() {
        let note: Note = serde_json::from_str(&note_json("18446744073709551615")).unwrap();
        assert_eq!(note.id.as_str(), "18446744073709551615");
        assert_eq!(
            serde_json::to_string(&note.id).unwrap(),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_note_id_rejects_blank() {
        assert!("  ".parse::<NoteId>().is_err());
        assert!(serde_json::from_str::<Note>(&note_json("\"\"")).is_err());
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let note: Note = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "category": "meta", "date": "2024-01-01"}"#,
        )
        .unwrap();
        assert!(!note.completed);
    }

    #[test]
    fn test_day_uses_date_prefix() {
        let note: Note = serde_json::from_str(&note_json("1")).unwrap();
        assert_eq!(note.day(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert!(note.is_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
    }

    #[test]
    fn test_day_key_rejects_garbage() {
        assert_eq!(day_key(""), None);
        assert_eq!(day_key("yesterday"), None);
        assert_eq!(day_key("2024-13-01T00:00:00Z"), None);
        assert_eq!(day_key("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_edit_payload_has_only_editable_fields() {
        let edit = NoteEdit {
            title: "t".to_string(),
            content: "c".to_string(),
            category: Category::Reminder,
        };
        let value = serde_json::to_value(&edit).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("date"));
        assert!(!object.contains_key("completed"));
    }
}
