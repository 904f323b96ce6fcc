//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, presentation, observation
//! protocol).
//!
//! # Grid
//!
//! The playfield is a square 8x8 grid. Coordinates are `(row, col)` with row
//! 0 at the top; gravity compacts tiles toward row 7.
//!
//! # Scoring
//!
//! Every cleared cell is worth [`CELL_SCORE`] points, multiplied by the
//! cascade multiplier for the round. The multiplier starts at 1 for each
//! resolution and doubles after every round that cleared something.
//!
//! # Pacing Constants
//!
//! The core never sleeps; these values are carried as data for orchestrators
//! that want presentation-paced cascades:
//!
//! | Constant | Value | Stage |
//! |----------|-------|-------|
//! | `EVALUATE_PAUSE_MS` | 200 | after scoring a round |
//! | `CASCADE_PAUSE_MS` | 150 | after column collapse |
//! | `REFILL_PAUSE_MS` | 150 | after refilling empties |

/// Board edge length in cells (8x8 grid)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the board
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Minimum run length that counts as a match
pub const MATCH_MIN: usize = 3;

/// Exact run length that spawns a beam special
pub const BEAM_RUN_LEN: usize = 4;

/// Minimum run length that spawns a rainbow special (overrides beam)
pub const RAINBOW_RUN_MIN: usize = 5;

/// Points per cleared cell before the cascade multiplier
pub const CELL_SCORE: u32 = 100;

/// Moves granted to a fresh session
pub const INITIAL_MOVES: u32 = 30;

/// Hard cap on board-generation retries during session init.
///
/// A random 8x8 board over five elements is match-free roughly 2% of the
/// time, so the expected retry count is ~45; the cap only matters for a
/// degenerate random source.
pub const INIT_RETRY_LIMIT: u32 = 1024;

/// Pause after a round is scored (milliseconds)
pub const EVALUATE_PAUSE_MS: u64 = 200;

/// Pause after column collapse (milliseconds)
pub const CASCADE_PAUSE_MS: u64 = 150;

/// Pause after refill (milliseconds)
pub const REFILL_PAUSE_MS: u64 = 150;

/// The five tile elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Nature,
    Void,
    Prism,
}

impl Element {
    /// All elements in draw order
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Nature,
        Element::Void,
        Element::Prism,
    ];

    /// Parse element from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "nature" => Some(Element::Nature),
            "void" => Some(Element::Void),
            "prism" => Some(Element::Prism),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Nature => "nature",
            Element::Void => "void",
            Element::Prism => "prism",
        }
    }

    /// Compact numeric code for snapshots (1-5; 0 is reserved for empty)
    pub fn code(&self) -> u8 {
        match self {
            Element::Fire => 1,
            Element::Water => 2,
            Element::Nature => 3,
            Element::Void => 4,
            Element::Prism => 5,
        }
    }
}

/// Area-clearing behaviors a tile can carry
///
/// - **BeamH**: clears its entire row when matched
/// - **BeamV**: clears its entire column when matched
/// - **Blast**: clears the 3x3 neighborhood around it when matched
/// - **Rainbow**: decorative marker; clears only itself when matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    BeamH,
    BeamV,
    Blast,
    Rainbow,
}

impl SpecialKind {
    /// Parse special kind from its wire name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beamh" => Some(SpecialKind::BeamH),
            "beamv" => Some(SpecialKind::BeamV),
            "blast" => Some(SpecialKind::Blast),
            "rainbow" => Some(SpecialKind::Rainbow),
            _ => None,
        }
    }

    /// Convert to camelCase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::BeamH => "beamH",
            SpecialKind::BeamV => "beamV",
            SpecialKind::Blast => "blast",
            SpecialKind::Rainbow => "rainbow",
        }
    }

    /// Compact numeric code for snapshots (1-4; 0 is reserved for plain)
    pub fn code(&self) -> u8 {
        match self {
            SpecialKind::BeamH => 1,
            SpecialKind::BeamV => 2,
            SpecialKind::Blast => 3,
            SpecialKind::Rainbow => 4,
        }
    }
}

/// A single tile on the board.
///
/// `id` is monotonic per session and exists purely for presentation
/// continuity (animating the same tile across moves); logic never compares
/// ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: u32,
    pub element: Element,
    pub special: Option<SpecialKind>,
}

impl Tile {
    pub fn plain(id: u32, element: Element) -> Self {
        Self {
            id,
            element,
            special: None,
        }
    }

    pub fn special(id: u32, element: Element, kind: SpecialKind) -> Self {
        Self {
            id,
            element,
            special: Some(kind),
        }
    }
}

/// A cell on the board (None = empty, Some = holds a tile)
pub type Cell = Option<Tile>;

/// A board coordinate (row 0 at the top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the grid
    pub fn in_bounds(&self) -> bool {
        self.row >= 0
            && self.row < GRID_SIZE as i8
            && self.col >= 0
            && self.col < GRID_SIZE as i8
    }

    /// Whether two coordinates are grid-adjacent (Manhattan distance 1)
    pub fn is_adjacent(&self, other: Pos) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }
}

/// Session phases exposed to observers
///
/// Evaluating/Cascading/Refilling are sub-phases of an in-progress
/// resolution; input is only accepted while Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    Swapping,
    Evaluating,
    Cascading,
    Refilling,
    GameOver,
}

impl GamePhase {
    /// Parse phase from its wire name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(GamePhase::Idle),
            "swapping" => Some(GamePhase::Swapping),
            "evaluating" => Some(GamePhase::Evaluating),
            "cascading" => Some(GamePhase::Cascading),
            "refilling" => Some(GamePhase::Refilling),
            "gameover" => Some(GamePhase::GameOver),
            _ => None,
        }
    }

    /// Convert to camelCase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Swapping => "swapping",
            GamePhase::Evaluating => "evaluating",
            GamePhase::Cascading => "cascading",
            GamePhase::Refilling => "refilling",
            GamePhase::GameOver => "gameOver",
        }
    }

    /// Whether a resolution is in flight
    pub fn is_resolving(&self) -> bool {
        matches!(
            self,
            GamePhase::Evaluating | GamePhase::Cascading | GamePhase::Refilling
        )
    }
}
