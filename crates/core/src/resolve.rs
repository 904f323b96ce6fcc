//! Resolution engine - detect, clear, collapse, refill
//!
//! The cascade is exposed as granular synchronous primitives so an
//! orchestrator can interleave presentation pauses between stages:
//! [`clear_matches`], [`Board::collapse_columns`], [`refill`]. The composed
//! [`cascade_round`] and [`resolve`] loop produce the same numeric outcome
//! regardless of how much real time passes between stages.
//!
//! Clearing expands the matched set through specials carried by matched
//! tiles: a horizontal beam takes its whole row, a vertical beam its whole
//! column, a blast the clamped 3x3 neighborhood around it. A matched rainbow
//! clears only itself (extension point for a wider effect).

use crate::board::Board;
use crate::matcher::{detect, MatchResult};
use crate::rng::TileSource;
use crate::scoring::{next_multiplier, round_gain};
use prism_match_types::{Pos, SpecialKind, GRID_CELLS, GRID_SIZE};

/// Result of one clear stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    /// Cells emptied, including special area effects
    pub cleared: u32,
    /// Points gained this round
    pub gain: u32,
    /// Special tiles created from spawn requests
    pub spawned: u32,
}

/// Result of one full cascade round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub cleared: u32,
    pub gain: u32,
    pub spawned: u32,
    /// Tiles created by the refill stage
    pub refilled: u32,
}

/// Result of a resolution run to stability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub score_gained: u32,
    pub rounds: u32,
}

#[inline]
fn flat(pos: Pos) -> usize {
    pos.row as usize * GRID_SIZE as usize + pos.col as usize
}

/// Expand matched coordinates through the specials carried by matched tiles.
fn build_clear_set(board: &Board, result: &MatchResult) -> [bool; GRID_CELLS] {
    let size = GRID_SIZE as i8;
    let mut clear = [false; GRID_CELLS];

    for &pos in result.coords() {
        let Some(tile) = board.tile(pos) else {
            continue;
        };
        clear[flat(pos)] = true;

        match tile.special {
            Some(SpecialKind::BeamH) => {
                for col in 0..size {
                    clear[flat(Pos::new(pos.row, col))] = true;
                }
            }
            Some(SpecialKind::BeamV) => {
                for row in 0..size {
                    clear[flat(Pos::new(row, pos.col))] = true;
                }
            }
            Some(SpecialKind::Blast) => {
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        let p = Pos::new(pos.row + dr, pos.col + dc);
                        if p.in_bounds() {
                            clear[flat(p)] = true;
                        }
                    }
                }
            }
            // Rainbow has no area effect beyond its own cell.
            Some(SpecialKind::Rainbow) | None => {}
        }
    }

    clear
}

/// Run one detect + clear + spawn stage.
///
/// Returns None (board untouched) when the board holds no matches; that is
/// the resolution loop's termination signal. Otherwise empties the clear
/// set, places spawn requests first-write-wins into the just-emptied cells,
/// and reports the score gain for this round.
pub fn clear_matches(
    board: &mut Board,
    tiles: &mut TileSource,
    multiplier: u32,
) -> Option<ClearOutcome> {
    let result = detect(board);
    if result.is_empty() {
        return None;
    }

    let clear = build_clear_set(board, &result);
    let mut cleared = 0u32;
    for pos in Board::positions() {
        if clear[flat(pos)] {
            board.set(pos, None);
            cleared += 1;
        }
    }

    // Spawn targets are always matched coordinates, so the cell was emptied
    // above; first request per cell wins, later ones are dropped.
    let mut spawned = 0u32;
    for spawn in result.specials() {
        if board.is_empty_cell(spawn.pos) {
            board.set(spawn.pos, Some(tiles.special(spawn.element, spawn.kind)));
            spawned += 1;
        }
    }

    Some(ClearOutcome {
        cleared,
        gain: round_gain(cleared, multiplier),
        spawned,
    })
}

/// Fill every empty cell with a fresh random plain tile.
/// Returns the number of tiles created.
pub fn refill(board: &mut Board, tiles: &mut TileSource) -> u32 {
    let mut refilled = 0u32;
    for pos in Board::positions() {
        if board.is_empty_cell(pos) {
            board.set(pos, Some(tiles.plain()));
            refilled += 1;
        }
    }
    refilled
}

/// Run one full cascade round: clear, collapse, refill.
pub fn cascade_round(
    board: &mut Board,
    tiles: &mut TileSource,
    multiplier: u32,
) -> Option<RoundOutcome> {
    let outcome = clear_matches(board, tiles, multiplier)?;
    board.collapse_columns();
    let refilled = refill(board, tiles);
    Some(RoundOutcome {
        cleared: outcome.cleared,
        gain: outcome.gain,
        spawned: outcome.spawned,
        refilled,
    })
}

/// Resolve the board to stability, doubling the multiplier each round.
pub fn resolve(board: &mut Board, tiles: &mut TileSource) -> Resolution {
    let mut total = Resolution::default();
    let mut multiplier = 1u32;

    while let Some(round) = cascade_round(board, tiles, multiplier) {
        total.score_gained = total.score_gained.saturating_add(round.gain);
        total.rounds += 1;
        multiplier = next_multiplier(multiplier);
    }

    total
}
