//! Level construction.
//!
//! A [`Level`] is one round's visible state: the candidate songs, the
//! correct answer, and the raw lyric lines shown to the player. Levels are
//! built by [`LevelBuilder`] from the catalog and lyric-source collaborators
//! and are immutable once built - the game replaces the whole level when the
//! round advances.

use rand::{Rng, RngCore};

use super::song::{CatalogError, LyricSource, Song, SongCatalog};

/// Candidate songs shown per round.
pub const OPTION_COUNT: usize = 3;

/// Lyric lines shown per round.
pub const BAR_COUNT: usize = 3;

/// One round's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Candidate songs, `OPTION_COUNT` of them, all distinct.
    pub options: Vec<Song>,

    /// The correct answer. Always an element of `options`.
    pub correct: Song,

    /// Raw (non-obfuscated) lyric lines from `correct`.
    pub bars: Vec<String>,
}

impl Level {
    /// Render the bars through a pure text transform (e.g. emoji
    /// substitution).
    ///
    /// The raw bars stay untouched; display text is recomputed on every
    /// call, so the same level can be re-rendered without re-fetching data.
    pub fn display_bars<F>(&self, transform: F) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        self.bars.iter().map(|bar| transform(bar)).collect()
    }
}

/// Builds levels from the data-source collaborators.
#[derive(Debug)]
pub struct LevelBuilder<'a, C, L> {
    catalog: &'a C,
    lyrics: &'a L,
}

impl<'a, C: SongCatalog, L: LyricSource> LevelBuilder<'a, C, L> {
    pub fn new(catalog: &'a C, lyrics: &'a L) -> Self {
        Self { catalog, lyrics }
    }

    /// Build a fresh level whose songs exclude everything in `played`.
    ///
    /// Picks the correct answer uniformly at random among the options, then
    /// extracts `BAR_COUNT` bars from it. Collaborator failures propagate
    /// unchanged; there is no retry or partial recovery.
    pub fn build(
        &self,
        played: &[Song],
        rng: &mut dyn RngCore,
    ) -> Result<Level, CatalogError> {
        let options = self.catalog.get_songs(played, OPTION_COUNT, rng)?;

        // Recheck the catalog contract rather than trusting the impl.
        if options.len() < OPTION_COUNT {
            return Err(CatalogError::InsufficientCatalog {
                requested: OPTION_COUNT,
                available: options.len(),
            });
        }

        let correct = options[rng.random_range(0..options.len())].clone();
        let bars = self.lyrics.get_random_bars(&correct, BAR_COUNT, rng)?;

        Ok(Level {
            options,
            correct,
            bars,
        })
    }
}
