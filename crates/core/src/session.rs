//! Session module - owns the board, score, moves, and phase machine
//!
//! The session is the single mutator of its board: swaps enter through
//! [`SessionState::begin_swap`] and cascades advance through
//! [`SessionState::step_round`], one round per call, so an orchestrator can
//! pause between rounds for presentation pacing without affecting the
//! numeric outcome. [`SessionState::run_to_idle`] drives the loop to
//! stability in one call.

use crate::board::Board;
use crate::matcher::detect;
use crate::resolve::{clear_matches, refill, RoundOutcome};
use crate::rng::TileSource;
use crate::scoring::next_multiplier;
use prism_match_types::{GamePhase, Pos, INITIAL_MOVES, INIT_RETRY_LIMIT};

/// Totals from driving a resolution to stability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveSummary {
    pub score_gained: u32,
    pub rounds: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    board: Board,
    tiles: TileSource,
    score: u32,
    moves_remaining: u32,
    multiplier: u32,
    phase: GamePhase,
    starting_moves: u32,
    seed: u32,
}

impl SessionState {
    /// Create a new session with the given RNG seed and starting move count.
    ///
    /// The initial board is regenerated until it holds no matches, so play
    /// always starts from a stable grid.
    pub fn new(seed: u32, starting_moves: u32) -> Self {
        let mut tiles = TileSource::new(seed);
        let board = generate_stable_board(&mut tiles);

        Self {
            board,
            tiles,
            score: 0,
            moves_remaining: starting_moves,
            multiplier: 1,
            phase: GamePhase::Idle,
            starting_moves,
            seed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn starting_moves(&self) -> u32 {
        self.starting_moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn tiles_created(&self) -> u32 {
        self.tiles.tiles_created()
    }

    pub fn rng_state(&self) -> u32 {
        self.tiles.rng_state()
    }

    /// Tentatively swap two cells and evaluate the result.
    ///
    /// Returns true when the swap produced at least one match: the move is
    /// committed (moves_remaining decremented, phase Evaluating) and the
    /// cascade is ready to be stepped. Returns false and restores the board
    /// when the swap produced nothing or preconditions fail; the session
    /// stays Idle and no counters change.
    pub fn begin_swap(&mut self, a: Pos, b: Pos) -> bool {
        if self.phase != GamePhase::Idle
            || !a.in_bounds()
            || !b.in_bounds()
            || !a.is_adjacent(b)
        {
            return false;
        }

        self.phase = GamePhase::Swapping;
        self.board.swap(a, b);

        if detect(&self.board).is_empty() {
            // Reject-and-revert: the caller may pause on Swapping for a
            // revert animation before this returns the board untouched.
            self.board.swap(a, b);
            self.phase = GamePhase::Idle;
            return false;
        }

        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        self.multiplier = 1;
        self.phase = GamePhase::Evaluating;
        true
    }

    /// Advance an in-flight resolution by one cascade round.
    ///
    /// Returns None once the board is stable; at that point (and only then)
    /// the game-over condition is evaluated: phase becomes GameOver when no
    /// moves remain, Idle otherwise, and the multiplier resets to 1.
    pub fn step_round(&mut self) -> Option<RoundOutcome> {
        if !self.phase.is_resolving() {
            return None;
        }

        self.phase = GamePhase::Evaluating;
        let Some(outcome) = clear_matches(&mut self.board, &mut self.tiles, self.multiplier)
        else {
            self.multiplier = 1;
            self.phase = if self.moves_remaining == 0 {
                GamePhase::GameOver
            } else {
                GamePhase::Idle
            };
            return None;
        };

        self.score = self.score.saturating_add(outcome.gain);
        self.multiplier = next_multiplier(self.multiplier);

        self.phase = GamePhase::Cascading;
        self.board.collapse_columns();

        self.phase = GamePhase::Refilling;
        let refilled = refill(&mut self.board, &mut self.tiles);

        Some(RoundOutcome {
            cleared: outcome.cleared,
            gain: outcome.gain,
            spawned: outcome.spawned,
            refilled,
        })
    }

    /// Drive the current resolution to stability.
    pub fn run_to_idle(&mut self) -> ResolveSummary {
        let mut summary = ResolveSummary::default();
        while let Some(round) = self.step_round() {
            summary.score_gained = summary.score_gained.saturating_add(round.gain);
            summary.rounds += 1;
        }
        summary
    }

    /// Reinitialize the session: fresh stable board, zero score, moves back
    /// to the starting value. Allowed from any phase, abandoning an
    /// in-flight resolution; the RNG stream continues rather than rewinding.
    pub fn reset(&mut self) {
        self.board = generate_stable_board(&mut self.tiles);
        self.score = 0;
        self.moves_remaining = self.starting_moves;
        self.multiplier = 1;
        self.phase = GamePhase::Idle;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(1, INITIAL_MOVES)
    }
}

/// Generate full random boards until one holds no matches.
///
/// Bounded by `INIT_RETRY_LIMIT` as a guard against a degenerate random
/// source; on exhaustion the last candidate is used as-is.
fn generate_stable_board(tiles: &mut TileSource) -> Board {
    let mut board = Board::new();
    for _ in 0..INIT_RETRY_LIMIT {
        board.clear();
        refill(&mut board, tiles);
        if detect(&board).is_empty() {
            break;
        }
    }
    board
}
