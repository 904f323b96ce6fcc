//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the complete rules of the match-3 cascade engine.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same seed and move sequence produce identical
//!   sessions (boards, scores, tile ids)
//! - **Testable**: every rule has unit coverage next to its module
//! - **Portable**: runs headless, in a terminal front end, or behind a
//!   network adapter
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid of optional tiles with column gravity
//! - [`matcher`]: run detection and special-tile spawn requests
//! - [`resolve`]: clear/collapse/refill cascade primitives and the
//!   resolution loop
//! - [`scoring`]: per-round gain and the doubling cascade multiplier
//! - [`session`]: session state machine (swaps, rounds, reset, game over)
//! - [`rng`]: seeded LCG and the tile factory with monotonic ids
//! - [`snapshot`]: compact value snapshots for observers
//!
//! # Rules
//!
//! A swap of two adjacent tiles is legal when it produces at least one run
//! of three same-element tiles in a row or column. Resolution then loops:
//! matched cells are cleared (specials carried by matched tiles widen the
//! clear set), special spawn requests fill emptied cells first-write-wins,
//! columns collapse downward, empties refill randomly, and the round
//! multiplier doubles - until a detection pass finds nothing.
//!
//! # Example
//!
//! ```
//! use prism_match_core::SessionState;
//! use prism_match_types::INITIAL_MOVES;
//!
//! let session = SessionState::new(12345, INITIAL_MOVES);
//! assert_eq!(session.moves_remaining(), INITIAL_MOVES);
//! assert_eq!(session.board().empty_count(), 0);
//! ```

pub mod board;
pub mod matcher;
pub mod resolve;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use prism_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use matcher::{detect, MatchResult, SpecialSpawn};
pub use resolve::{cascade_round, clear_matches, refill, resolve, ClearOutcome, Resolution, RoundOutcome};
pub use rng::{SimpleRng, TileSource};
pub use scoring::{multiplier_for_round, next_multiplier, round_gain};
pub use session::{ResolveSummary, SessionState};
pub use snapshot::{snapshot, snapshot_into, SessionSnapshot};
