//! Note category

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category of a note.
///
/// Values outside the known set are preserved as `Other` so that a note
/// written by another client round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Meta,
    Thought,
    #[default]
    Idea,
    Reminder,
    Other(String),
}

impl Category {
    /// The known categories in display order.
    pub const KNOWN: [Self; 4] = [Self::Meta, Self::Thought, Self::Idea, Self::Reminder];

    /// Wire value stored by the remote collection.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Meta => "meta",
            Self::Thought => "thought",
            Self::Idea => "idea",
            Self::Reminder => "reminder",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label; unknown values display as "Other".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meta => "Meta",
            Self::Thought => "Thought",
            Self::Idea => "Idea",
            Self::Reminder => "Reminder",
            Self::Other(_) => "Other",
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "meta" => Self::Meta,
            "thought" => Self::Thought,
            "idea" => Self::Idea,
            "reminder" => Self::Reminder,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
