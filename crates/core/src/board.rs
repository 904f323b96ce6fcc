//! Board module - manages the 8x8 tile grid
//!
//! The board is a square grid where each cell is empty or holds one tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..7 (top to bottom) and col
//! ranges 0..7 (left to right). Gravity compacts tiles toward row 7.

use prism_match_types::{Cell, Pos, Tile, GRID_CELLS, GRID_SIZE};

/// The game board - 8x8 grid using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Get edge length of the board
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        Self::index(pos.row, pos.col).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match Self::index(pos.row, pos.col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get the tile at a position, if the cell is in bounds and occupied
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.get(pos).flatten()
    }

    /// Check if position is in bounds and empty
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Check if position is in bounds and occupied
    pub fn is_occupied(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Exchange the contents of two in-bounds cells
    /// Returns false (board untouched) if either is out of bounds
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (Self::index(a.row, a.col), Self::index(b.row, b.col)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Apply gravity: per column, compact occupied cells downward preserving
    /// their relative order, leaving empties at the top.
    /// Returns the number of tiles that moved.
    pub fn collapse_columns(&mut self) -> u32 {
        let size = GRID_SIZE as usize;
        let mut moved = 0u32;

        for col in 0..size {
            // Two-pointer compaction from the bottom up.
            let mut write_row = size;
            for read_row in (0..size).rev() {
                let read_idx = read_row * size + col;
                if self.cells[read_idx].is_some() {
                    write_row -= 1;
                    let write_idx = write_row * size + col;
                    if write_idx != read_idx {
                        self.cells[write_idx] = self.cells[read_idx];
                        self.cells[read_idx] = None;
                        moved += 1;
                    }
                }
            }
        }

        moved
    }

    /// Count empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Count occupied cells
    pub fn tile_count(&self) -> usize {
        GRID_CELLS - self.empty_count()
    }

    /// Iterate all grid coordinates in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_SIZE as i8)
            .flat_map(|row| (0..GRID_SIZE as i8).map(move |col| Pos::new(row, col)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
