//! Game session state machine.
//!
//! One [`GameState`] is one player session. It owns the current level, the
//! append-only guess history, and the accumulated played-song history, and
//! drives round transitions and termination.
//!
//! # State Diagram
//!
//! ```text
//! ┌───────────┐  guess (correct, or wrong with lives left)
//! │  PLAYING  │──────────────────────────────────┐
//! │           │◀─────────────────────────────────┘ new level loaded
//! └─────┬─────┘
//!       │ guess (wrong, lives hit 0)
//!       ▼
//! ┌───────────┐
//! │ GAME_OVER │   guess() here is an InvalidStateTransition error
//! └─────┬─────┘
//!       │ reset()
//!       ▼
//!    PLAYING     (reset() is also legal mid-session: early abandon)
//! ```
//!
//! Score and lives are never stored: both are recomputed from the guess log
//! on every query, so the `score + wrong == guesses` algebra cannot drift.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::level::{Level, LevelBuilder};
use super::song::{CatalogError, LyricSource, Song, SongCatalog};

/// Wrong guesses allowed before the session ends.
pub const STARTING_LIVES: u32 = 3;

/// An immutable record of one player action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    /// The song the player chose.
    pub song: Song,

    /// Whether it matched the level's correct answer at the time.
    pub is_correct: bool,

    /// When the guess was made.
    pub guessed_at: DateTime<Utc>,
}

/// Game session errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A data-source collaborator failed; surfaced unchanged.
    Catalog(CatalogError),
    /// An operation was attempted in a state where it is not legal.
    InvalidStateTransition {
        action: &'static str,
        reason: &'static str,
    },
}

impl From<CatalogError> for GameError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{}", err),
            Self::InvalidStateTransition { action, reason } => {
                write!(f, "Illegal {}: {}", action, reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A running game session.
///
/// Generic over the two data-source collaborators. Owns a seedable random
/// generator so a whole session replays deterministically from a seed.
///
/// Single-writer: one `GameState` is one session is one mutual-exclusion
/// unit. Embedders in concurrent environments must serialize access per
/// session; there is no internal locking.
#[derive(Debug)]
pub struct GameState<C, L> {
    catalog: C,
    lyrics: L,
    rng: ChaCha8Rng,

    level: Level,

    /// Every song that has ever been a correct answer this process,
    /// including the current level's. Grows monotonically; survives reset.
    played_songs: Vec<Song>,

    /// Append-only within a session; cleared by reset.
    guesses: Vec<Guess>,

    game_over: bool,

    created_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl<C: SongCatalog, L: LyricSource> GameState<C, L> {
    /// Start a session with an OS-entropy seed.
    pub fn new(catalog: C, lyrics: L) -> Result<Self, GameError> {
        Self::with_rng(catalog, lyrics, ChaCha8Rng::from_os_rng())
    }

    /// Start a session with a fixed seed, for deterministic replay.
    pub fn with_seed(catalog: C, lyrics: L, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(catalog, lyrics, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(catalog: C, lyrics: L, mut rng: ChaCha8Rng) -> Result<Self, GameError> {
        let level = LevelBuilder::new(&catalog, &lyrics).build(&[], &mut rng)?;
        let played_songs = vec![level.correct.clone()];

        Ok(Self {
            catalog,
            lyrics,
            rng,
            level,
            played_songs,
            guesses: Vec::new(),
            game_over: false,
            created_at: Utc::now(),
            ended_at: None,
        })
    }

    /// The level currently shown to the player.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Guess history for this session, oldest first.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Correct answers seen so far, across resets.
    pub fn played_songs(&self) -> &[Song] {
        &self.played_songs
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the session hit game over, if it has.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Count of correct guesses. Recomputed from the guess log.
    pub fn score(&self) -> u32 {
        self.guesses.iter().filter(|g| g.is_correct).count() as u32
    }

    /// Remaining error budget. Recomputed from the guess log.
    pub fn lives(&self) -> u32 {
        let wrong = self.guesses.len() as u32 - self.score();
        STARTING_LIVES.saturating_sub(wrong)
    }

    /// Record a guess and advance or terminate the session.
    ///
    /// The guess is appended to history first; lives are evaluated after, so
    /// a life-depleting guess is itself counted and the session terminates
    /// with the state as of that guess, level untouched. Otherwise a new
    /// level is loaded, excluding every previously played song.
    ///
    /// Errors with [`GameError::InvalidStateTransition`] if the session is
    /// already over; terminal sessions only accept [`reset`](Self::reset).
    pub fn guess(&mut self, option: Song) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::InvalidStateTransition {
                action: "guess",
                reason: "the session is over; reset() to play again",
            });
        }

        let is_correct = option == self.level.correct;
        self.guesses.push(Guess {
            song: option,
            is_correct,
            guessed_at: Utc::now(),
        });

        if !is_correct && self.lives() == 0 {
            self.game_over = true;
            self.ended_at = Some(Utc::now());
            return Ok(());
        }

        self.next_level()
    }

    /// Start over: clear the guess history and terminal flag and load a new
    /// level.
    ///
    /// Played-song history is deliberately kept, so songs from before the
    /// reset never come back within this process. Legal in both states.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.game_over = false;
        self.ended_at = None;
        self.guesses.clear();
        self.next_level()
    }

    /// A read-only view of the session, with bars rendered through the
    /// display transform.
    pub fn snapshot<F>(&self, transform: F) -> GameSnapshot
    where
        F: Fn(&str) -> String,
    {
        GameSnapshot {
            options: self.level.options.clone(),
            bars: self.level.display_bars(transform),
            score: self.score(),
            lives: self.lives(),
            guess_count: self.guesses.len(),
            game_over: self.game_over,
        }
    }

    fn next_level(&mut self) -> Result<(), GameError> {
        let level = LevelBuilder::new(&self.catalog, &self.lyrics)
            .build(&self.played_songs, &mut self.rng)?;
        self.played_songs.push(level.correct.clone());
        self.level = level;
        Ok(())
    }
}

/// Plain read-only view of a session for a UI/CLI layer.
///
/// `bars` carry display-ready (obfuscated) text; the raw lines never leave
/// the engine through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub options: Vec<Song>,
    pub bars: Vec<String>,
    pub score: u32,
    pub lives: u32,
    pub guess_count: usize,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn to_json(&self) -> serde_json::Value {
        let options: Vec<serde_json::Value> = self
            .options
            .iter()
            .map(|s| serde_json::json!({"title": s.title, "artist": s.artist}))
            .collect();

        serde_json::json!({
            "options": options,
            "bars": self.bars,
            "score": self.score,
            "lives": self.lives,
            "guess_count": self.guess_count,
            "game_over": self.game_over
        })
    }
}
