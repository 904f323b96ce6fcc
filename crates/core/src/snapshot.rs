//! Compact value snapshots of a session for observers.
//!
//! Grids are encoded as parallel u8/u32 planes (element code, special code,
//! tile id) so a snapshot is `Copy` and hashable. Code 0 means empty/plain.

use crate::session::SessionState;
use prism_match_types::{GamePhase, GRID_SIZE};

const N: usize = GRID_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Element codes per cell (0 = empty, 1-5 = element)
    pub elements: [[u8; N]; N],
    /// Special codes per cell (0 = plain, 1-4 = special kind)
    pub specials: [[u8; N]; N],
    /// Tile ids per cell (0 where empty; presentation continuity only)
    pub ids: [[u32; N]; N],
    pub score: u32,
    pub moves_remaining: u32,
    pub multiplier: u32,
    pub phase: GamePhase,
    pub seed: u32,
    pub rng_state: u32,
    pub tiles_created: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.elements = [[0u8; N]; N];
        self.specials = [[0u8; N]; N];
        self.ids = [[0u32; N]; N];
        self.score = 0;
        self.moves_remaining = 0;
        self.multiplier = 1;
        self.phase = GamePhase::Idle;
        self.seed = 0;
        self.rng_state = 0;
        self.tiles_created = 0;
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == GamePhase::Idle
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            elements: [[0u8; N]; N],
            specials: [[0u8; N]; N],
            ids: [[0u32; N]; N],
            score: 0,
            moves_remaining: 0,
            multiplier: 1,
            phase: GamePhase::Idle,
            seed: 0,
            rng_state: 0,
            tiles_created: 0,
        };
        snapshot.clear();
        snapshot
    }
}

/// Write a session into an existing snapshot without allocating.
pub fn snapshot_into(session: &SessionState, out: &mut SessionSnapshot) {
    out.clear();

    for (idx, cell) in session.board().cells().iter().enumerate() {
        let (row, col) = (idx / N, idx % N);
        if let Some(tile) = cell {
            out.elements[row][col] = tile.element.code();
            out.specials[row][col] = tile.special.map(|s| s.code()).unwrap_or(0);
            out.ids[row][col] = tile.id;
        }
    }

    out.score = session.score();
    out.moves_remaining = session.moves_remaining();
    out.multiplier = session.multiplier();
    out.phase = session.phase();
    out.seed = session.seed();
    out.rng_state = session.rng_state();
    out.tiles_created = session.tiles_created();
}

/// Take a fresh snapshot of a session.
pub fn snapshot(session: &SessionState) -> SessionSnapshot {
    let mut out = SessionSnapshot::default();
    snapshot_into(session, &mut out);
    out
}
