//! Song identity and the data-source contracts.
//!
//! The engine never owns song content. It consumes two collaborator
//! interfaces implemented by the embedding application:
//!
//! - [`SongCatalog`] - supplies candidate songs, excluding ones already
//!   played this session.
//! - [`LyricSource`] - extracts lyric lines ("bars") from a given song.
//!
//! Both receive the engine's random generator so that a seeded session
//! replays identically, including collaborator-side choices.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A song identity.
///
/// Equality is by (title, artist) - this is what correct-answer matching
/// and played-song exclusion key on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.artist)
    }
}

/// Supplies candidate songs for a round.
pub trait SongCatalog {
    /// Return exactly `n` distinct songs, none of which appear in
    /// `excluding`.
    ///
    /// Fails with [`CatalogError::InsufficientCatalog`] when fewer than `n`
    /// eligible songs remain. The engine treats that as a fatal precondition
    /// failure (the content pool is exhausted for the session) and surfaces
    /// it unchanged.
    fn get_songs(
        &self,
        excluding: &[Song],
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Song>, CatalogError>;
}

/// Extracts lyric lines from a song.
pub trait LyricSource {
    /// Return `n` consecutive lyric lines of `song`, starting from a
    /// randomly chosen offset.
    ///
    /// Fails with [`CatalogError::InsufficientLyrics`] when the song has
    /// fewer than `n` lines.
    fn get_random_bars(
        &self,
        song: &Song,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, CatalogError>;
}

/// Data-source failures.
///
/// Never caught or retried by the engine; every variant aborts the current
/// operation and surfaces to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog cannot produce enough non-repeating songs.
    InsufficientCatalog { requested: usize, available: usize },
    /// The chosen song has fewer lines than requested.
    InsufficientLyrics { requested: usize, available: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCatalog {
                requested,
                available,
            } => write!(
                f,
                "Catalog exhausted: {} songs requested, {} eligible",
                requested, available
            ),
            Self::InsufficientLyrics {
                requested,
                available,
            } => write!(
                f,
                "Not enough lyrics: {} bars requested, song has {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_equality_by_identity() {
        let a = Song::new("Lose Yourself", "Eminem");
        let b = Song::new("Lose Yourself", "Eminem");
        let c = Song::new("Lose Yourself", "Covers Inc");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_song_display() {
        let song = Song::new("Hey Jude", "The Beatles");
        assert_eq!(format!("{}", song), "Hey Jude - The Beatles");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::InsufficientCatalog {
            requested: 3,
            available: 1,
        };
        assert_eq!(
            format!("{}", err),
            "Catalog exhausted: 3 songs requested, 1 eligible"
        );

        let err = CatalogError::InsufficientLyrics {
            requested: 3,
            available: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Not enough lyrics: 3 bars requested, song has 2"
        );
    }
}
