//! SQLite storage for ideas

mod migrations;
mod repository;

pub use repository::{IdeaPatch, IdeaRepository, IdeaStats, NewIdea};
