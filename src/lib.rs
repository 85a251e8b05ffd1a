//! Lyriq State Library
//!
//! This crate provides state management for Lyriq song-guessing game logic.
//!
//! # Overview
//!
//! Each round shows the player a few obfuscated lyric lines ("bars") and a
//! small set of candidate songs, one of which is correct. The state module
//! provides:
//!
//! - **Level Builder** - Picks a fresh candidate set from the song catalog,
//!   excluding everything already played, chooses the correct answer, and
//!   extracts the bars to display.
//!
//! - **Game State Machine** - Owns the running session: current level, guess
//!   history, derived score and lives, and the game-over transition.
//!
//! # Design Principles
//!
//! 1. **Data sources are collaborators** - The song catalog and lyric source
//!    are traits implemented by the embedding application; this crate never
//!    owns content.
//!
//! 2. **Randomness is injected** - The engine owns a seedable generator, so
//!    a whole session replays deterministically from a seed.
//!
//! 3. **Derived state is recomputed** - Score and lives are pure functions
//!    of the guess log; there are no counters to drift.
//!
//! 4. **Terminal states reject actions** - Guessing after game over is an
//!    explicit error, not a silent mutation.
//!
//! # Example
//!
//! ```rust
//! use lyriq_state::state::{CatalogError, GameState, LyricSource, Song, SongCatalog};
//! use rand::RngCore;
//!
//! struct Pool(Vec<Song>);
//!
//! impl SongCatalog for Pool {
//!     fn get_songs(
//!         &self,
//!         excluding: &[Song],
//!         n: usize,
//!         _rng: &mut dyn RngCore,
//!     ) -> Result<Vec<Song>, CatalogError> {
//!         let eligible: Vec<Song> = self
//!             .0
//!             .iter()
//!             .filter(|s| !excluding.contains(s))
//!             .cloned()
//!             .collect();
//!         if eligible.len() < n {
//!             return Err(CatalogError::InsufficientCatalog {
//!                 requested: n,
//!                 available: eligible.len(),
//!             });
//!         }
//!         Ok(eligible.into_iter().take(n).collect())
//!     }
//! }
//!
//! struct Lines;
//!
//! impl LyricSource for Lines {
//!     fn get_random_bars(
//!         &self,
//!         song: &Song,
//!         n: usize,
//!         _rng: &mut dyn RngCore,
//!     ) -> Result<Vec<String>, CatalogError> {
//!         Ok((0..n).map(|i| format!("{} line {}", song.title, i)).collect())
//!     }
//! }
//!
//! let pool = Pool(
//!     (0..8)
//!         .map(|i| Song::new(format!("Song {}", i), "Artist"))
//!         .collect(),
//! );
//! let mut game = GameState::with_seed(pool, Lines, 7).unwrap();
//!
//! // Guess the correct answer: the session advances to a new level.
//! let answer = game.level().correct.clone();
//! game.guess(answer).unwrap();
//!
//! assert_eq!(game.score(), 1);
//! assert!(!game.is_game_over());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
