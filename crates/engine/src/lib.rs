//! Move application on top of the core session.
//!
//! Validates a proposed swap against the session preconditions, commits it
//! through the session state machine, and drives the resulting resolution
//! to stability. Precondition failures are typed errors with stable
//! code/message strings for the protocol layer; a legal-but-matchless swap
//! is not an error, it is a rejected outcome.

use prism_match_core::{detect, Board, SessionState};
use prism_match_types::{GamePhase, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NotAdjacent,
    SamePosition,
    NotIdle,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::OutOfBounds | MoveError::NotAdjacent | MoveError::SamePosition => {
                "invalid_move"
            }
            MoveError::NotIdle => "not_idle",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::OutOfBounds => "coordinate is outside the grid",
            MoveError::NotAdjacent => "cells are not grid-adjacent",
            MoveError::SamePosition => "swap targets the same cell",
            MoveError::NotIdle => "session is not accepting input",
        }
    }
}

/// Result of an accepted precondition check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The swap produced no match; the board was restored and nothing
    /// (score, moves, phase) changed.
    Rejected,
    /// The swap matched: one move was spent and the cascade ran to
    /// stability.
    Resolved { score_gained: u32, rounds: u32 },
}

/// Check the swap preconditions without touching the session.
pub fn validate_move(session: &SessionState, a: Pos, b: Pos) -> Result<(), MoveError> {
    if session.phase() != GamePhase::Idle {
        return Err(MoveError::NotIdle);
    }
    if !a.in_bounds() || !b.in_bounds() {
        return Err(MoveError::OutOfBounds);
    }
    if a == b {
        return Err(MoveError::SamePosition);
    }
    if !a.is_adjacent(b) {
        return Err(MoveError::NotAdjacent);
    }
    Ok(())
}

/// Apply a swap to the session and resolve any resulting cascade.
pub fn apply_move(
    session: &mut SessionState,
    a: Pos,
    b: Pos,
) -> Result<MoveOutcome, MoveError> {
    validate_move(session, a, b)?;

    if !session.begin_swap(a, b) {
        return Ok(MoveOutcome::Rejected);
    }

    let summary = session.run_to_idle();
    Ok(MoveOutcome::Resolved {
        score_gained: summary.score_gained,
        rounds: summary.rounds,
    })
}

/// Reinitialize the session (allowed from any phase).
pub fn reset(session: &mut SessionState) {
    session.reset();
}

/// Find the first swap (right or down neighbor, row-major scan) that would
/// produce a match. Used by headless agents and terminal-state probing.
pub fn find_valid_move(board: &Board) -> Option<(Pos, Pos)> {
    let mut scratch = board.clone();
    for pos in Board::positions() {
        for neighbor in [
            Pos::new(pos.row, pos.col + 1),
            Pos::new(pos.row + 1, pos.col),
        ] {
            if !neighbor.in_bounds() {
                continue;
            }
            scratch.swap(pos, neighbor);
            let matched = !detect(&scratch).is_empty();
            scratch.swap(pos, neighbor);
            if matched {
                return Some((pos, neighbor));
            }
        }
    }
    None
}
