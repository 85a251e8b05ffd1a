//! State management module for Lyriq.
//!
//! This module provides the core state types:
//!
//! - `song` - Song identity plus the catalog and lyric-source contracts
//! - `level` - Level construction (options, correct answer, bars)
//! - `game` - The session state machine (guesses, score, lives, game over)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         GameState                            │
//! │                                                              │
//! │  level: Level          guesses: Vec<Guess>  (append-only)    │
//! │  played_songs: Vec<Song>  (monotone, survives reset)         │
//! │  game_over: bool       rng: ChaCha8Rng  (seedable)           │
//! │                                                              │
//! │        │ new level on construction, guess, reset             │
//! │        ▼                                                     │
//! │  ┌──────────────┐   get_songs(excluding, n)   ┌───────────┐  │
//! │  │ LevelBuilder │──────────────────────────▶  │SongCatalog│  │
//! │  │              │   get_random_bars(song, n)  ├───────────┤  │
//! │  │              │──────────────────────────▶  │LyricSource│  │
//! │  └──────────────┘                             └───────────┘  │
//! │                                          (embedder-provided) │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use lyriq_state::state::{GameState, Song};
//!
//! let mut game = GameState::new(catalog, lyrics)?;
//!
//! // Render the current round.
//! let snapshot = game.snapshot(emoji_transform);
//!
//! // Apply a player action.
//! let pick: Song = snapshot.options[0].clone();
//! game.guess(pick)?;
//!
//! if game.is_game_over() {
//!     game.reset()?;
//! }
//! ```

pub mod game;
pub mod level;
pub mod song;

// Re-export commonly used types
pub use game::{GameError, GameSnapshot, GameState, Guess, STARTING_LIVES};
pub use level::{Level, LevelBuilder, BAR_COUNT, OPTION_COUNT};
pub use song::{CatalogError, LyricSource, Song, SongCatalog};
