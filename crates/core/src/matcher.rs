//! Match detector - scans a board for runs and special-tile triggers
//!
//! Pure and deterministic: `detect` never mutates the board and allocates
//! nothing. A run is a maximal consecutive sequence of same-element tiles
//! along one row or column; empty cells never start or extend a run.
//!
//! Special requests derived from a scan:
//! - run of exactly 4: beam (horizontal for rows, vertical for columns) at
//!   the run's second-to-last cell
//! - run of 5 or more: rainbow at the cell three-from-the-end, which
//!   overrides the beam for that run
//! - a cell matched by both a row run and a column run: blast, in addition
//!   to any beam/rainbow requests from the runs themselves
//!
//! Requests are just requests; tiles are created during clearing, after the
//! originating cells have been emptied.

use arrayvec::ArrayVec;

use crate::board::Board;
use prism_match_types::{
    Element, Pos, SpecialKind, BEAM_RUN_LEN, GRID_CELLS, GRID_SIZE, MATCH_MIN, RAINBOW_RUN_MIN,
};

/// Upper bound on spawn requests from one detection pass: at most two
/// beam/rainbow requests per line (16 lines), plus one blast per cell.
const MAX_SPECIAL_REQUESTS: usize = 32 + GRID_CELLS;

/// A request to create a special tile during the clearing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialSpawn {
    pub pos: Pos,
    pub kind: SpecialKind,
    pub element: Element,
}

/// Output of a single detection pass
#[derive(Debug, Clone)]
pub struct MatchResult {
    matched: [bool; GRID_CELLS],
    coords: ArrayVec<Pos, GRID_CELLS>,
    specials: ArrayVec<SpecialSpawn, MAX_SPECIAL_REQUESTS>,
}

impl MatchResult {
    /// Matched coordinates, deduplicated, row-major order
    pub fn coords(&self) -> &[Pos] {
        &self.coords
    }

    /// Special spawn requests in detection order (rows, columns, blasts)
    pub fn specials(&self) -> &[SpecialSpawn] {
        &self.specials
    }

    /// Whether the pass found no matches (the resolution-loop exit signal)
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether a coordinate is part of any match
    pub fn contains(&self, pos: Pos) -> bool {
        if !pos.in_bounds() {
            return false;
        }
        self.matched[pos.row as usize * GRID_SIZE as usize + pos.col as usize]
    }
}

#[inline]
fn flat(row: usize, col: usize) -> usize {
    row * GRID_SIZE as usize + col
}

/// Scan the board for matches and derive special-tile spawn requests.
pub fn detect(board: &Board) -> MatchResult {
    let size = GRID_SIZE as usize;
    let mut row_hits = [false; GRID_CELLS];
    let mut col_hits = [false; GRID_CELLS];
    let mut specials: ArrayVec<SpecialSpawn, MAX_SPECIAL_REQUESTS> = ArrayVec::new();

    let element_at = |row: usize, col: usize| -> Option<Element> {
        board
            .tile(Pos::new(row as i8, col as i8))
            .map(|tile| tile.element)
    };

    // Horizontal runs.
    for row in 0..size {
        let mut col = 0;
        while col < size {
            let Some(element) = element_at(row, col) else {
                col += 1;
                continue;
            };
            let start = col;
            let mut end = col + 1;
            while end < size && element_at(row, end) == Some(element) {
                end += 1;
            }
            let len = end - start;
            if len >= MATCH_MIN {
                for c in start..end {
                    row_hits[flat(row, c)] = true;
                }
                if len >= RAINBOW_RUN_MIN {
                    specials.push(SpecialSpawn {
                        pos: Pos::new(row as i8, (end - 3) as i8),
                        kind: SpecialKind::Rainbow,
                        element,
                    });
                } else if len == BEAM_RUN_LEN {
                    specials.push(SpecialSpawn {
                        pos: Pos::new(row as i8, (end - 2) as i8),
                        kind: SpecialKind::BeamH,
                        element,
                    });
                }
            }
            col = end;
        }
    }

    // Vertical runs.
    for col in 0..size {
        let mut row = 0;
        while row < size {
            let Some(element) = element_at(row, col) else {
                row += 1;
                continue;
            };
            let start = row;
            let mut end = row + 1;
            while end < size && element_at(end, col) == Some(element) {
                end += 1;
            }
            let len = end - start;
            if len >= MATCH_MIN {
                for r in start..end {
                    col_hits[flat(r, col)] = true;
                }
                if len >= RAINBOW_RUN_MIN {
                    specials.push(SpecialSpawn {
                        pos: Pos::new((end - 3) as i8, col as i8),
                        kind: SpecialKind::Rainbow,
                        element,
                    });
                } else if len == BEAM_RUN_LEN {
                    specials.push(SpecialSpawn {
                        pos: Pos::new((end - 2) as i8, col as i8),
                        kind: SpecialKind::BeamV,
                        element,
                    });
                }
            }
            row = end;
        }
    }

    // A cell claimed by both scans is a true row/column intersection: it
    // earns a blast request on top of the run specials above.
    let mut matched = [false; GRID_CELLS];
    let mut coords: ArrayVec<Pos, GRID_CELLS> = ArrayVec::new();
    for row in 0..size {
        for col in 0..size {
            let idx = flat(row, col);
            if !row_hits[idx] && !col_hits[idx] {
                continue;
            }
            matched[idx] = true;
            coords.push(Pos::new(row as i8, col as i8));
            if row_hits[idx] && col_hits[idx] {
                if let Some(element) = element_at(row, col) {
                    specials.push(SpecialSpawn {
                        pos: Pos::new(row as i8, col as i8),
                        kind: SpecialKind::Blast,
                        element,
                    });
                }
            }
        }
    }

    MatchResult {
        matched,
        coords,
        specials,
    }
}
