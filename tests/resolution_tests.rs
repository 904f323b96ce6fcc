//! Cascade resolution through the facade crate: clears, special effects,
//! spawn placement, and the doubling multiplier.

use prism_match::core::{clear_matches, detect, refill, resolve, Board, TileSource};
use prism_match::types::{Element, Pos, SpecialKind, Tile, CELL_SCORE, GRID_CELLS};

fn checkerboard() -> Board {
    let mut board = Board::new();
    let mut id = 0;
    for pos in Board::positions() {
        let element = if (pos.row + pos.col) % 2 == 0 {
            Element::Nature
        } else {
            Element::Void
        };
        board.set(pos, Some(Tile::plain(id, element)));
        id += 1;
    }
    board
}

#[test]
fn test_stable_board_clears_nothing() {
    let mut board = checkerboard();
    let mut tiles = TileSource::new(1);
    assert!(clear_matches(&mut board, &mut tiles, 1).is_none());
    assert_eq!(board.empty_count(), 0);
}

#[test]
fn test_triple_clears_three_cells_for_base_score() {
    let mut board = checkerboard();
    board.set(Pos::new(3, 3), Some(Tile::plain(100, Element::Fire)));
    board.set(Pos::new(3, 4), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(3, 5), Some(Tile::plain(102, Element::Fire)));

    let mut tiles = TileSource::new(1);
    let outcome = clear_matches(&mut board, &mut tiles, 1).unwrap();
    assert_eq!(outcome.cleared, 3);
    assert_eq!(outcome.gain, 3 * CELL_SCORE);
    assert_eq!(outcome.spawned, 0);
    assert_eq!(board.empty_count(), 3);
}

#[test]
fn test_matched_horizontal_beam_clears_its_row() {
    let mut board = checkerboard();
    board.set(
        Pos::new(2, 2),
        Some(Tile::special(100, Element::Fire, SpecialKind::BeamH)),
    );
    board.set(Pos::new(2, 3), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(2, 4), Some(Tile::plain(102, Element::Fire)));

    let mut tiles = TileSource::new(1);
    let outcome = clear_matches(&mut board, &mut tiles, 1).unwrap();
    assert_eq!(outcome.cleared, 8);
    assert_eq!(outcome.gain, 8 * CELL_SCORE);
    for col in 0..8 {
        assert!(board.is_empty_cell(Pos::new(2, col)));
    }
}

#[test]
fn test_matched_blast_clears_clamped_neighborhood() {
    let mut board = checkerboard();
    // Blast in the corner: its 3x3 neighborhood clamps to four cells.
    board.set(
        Pos::new(0, 0),
        Some(Tile::special(100, Element::Fire, SpecialKind::Blast)),
    );
    board.set(Pos::new(0, 1), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(0, 2), Some(Tile::plain(102, Element::Fire)));

    let mut tiles = TileSource::new(1);
    let outcome = clear_matches(&mut board, &mut tiles, 1).unwrap();
    // Run {(0,0),(0,1),(0,2)} plus neighborhood {(1,0),(1,1)}.
    assert_eq!(outcome.cleared, 5);
    assert!(board.is_empty_cell(Pos::new(1, 0)));
    assert!(board.is_empty_cell(Pos::new(1, 1)));
    assert!(board.is_occupied(Pos::new(1, 2)));
}

#[test]
fn test_rainbow_in_match_clears_only_itself() {
    let mut board = checkerboard();
    board.set(
        Pos::new(5, 1),
        Some(Tile::special(100, Element::Fire, SpecialKind::Rainbow)),
    );
    board.set(Pos::new(5, 2), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(5, 3), Some(Tile::plain(102, Element::Fire)));

    let mut tiles = TileSource::new(1);
    let outcome = clear_matches(&mut board, &mut tiles, 1).unwrap();
    assert_eq!(outcome.cleared, 3);
}

#[test]
fn test_beam_spawn_lands_in_cleared_cell() {
    let mut board = checkerboard();
    for col in 2..6 {
        board.set(Pos::new(0, col), Some(Tile::plain(100 + col as u32, Element::Water)));
    }

    let mut tiles = TileSource::new(1);
    let outcome = clear_matches(&mut board, &mut tiles, 1).unwrap();
    assert_eq!(outcome.spawned, 1);

    let spawned = board.tile(Pos::new(0, 4)).unwrap();
    assert_eq!(spawned.element, Element::Water);
    assert_eq!(spawned.special, Some(SpecialKind::BeamH));
    // The other run cells stay empty until collapse/refill.
    assert!(board.is_empty_cell(Pos::new(0, 2)));
    assert!(board.is_empty_cell(Pos::new(0, 3)));
    assert!(board.is_empty_cell(Pos::new(0, 5)));
}

#[test]
fn test_refill_fills_every_empty_cell() {
    let mut board = Board::new();
    let mut tiles = TileSource::new(9);
    let filled = refill(&mut board, &mut tiles);
    assert_eq!(filled, GRID_CELLS as u32);
    assert_eq!(board.empty_count(), 0);
}

#[test]
fn test_resolve_reaches_stable_board() {
    let mut board = checkerboard();
    board.set(Pos::new(3, 3), Some(Tile::plain(100, Element::Fire)));
    board.set(Pos::new(3, 4), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(3, 5), Some(Tile::plain(102, Element::Fire)));

    let mut tiles = TileSource::new(77);
    let resolution = resolve(&mut board, &mut tiles);
    assert!(resolution.score_gained >= 3 * CELL_SCORE);
    assert!(resolution.rounds >= 1);
    assert!(detect(&board).is_empty());
    assert_eq!(board.empty_count(), 0);
}

#[test]
fn test_second_cascade_round_scores_double() {
    // Vertical Fire run in column 0; the Water tile above it falls into
    // row 7 and completes a second, horizontal Water run.
    let mut board = checkerboard();
    board.set(Pos::new(4, 0), Some(Tile::plain(200, Element::Water)));
    for row in 5..8 {
        board.set(Pos::new(row, 0), Some(Tile::plain(200 + row as u32, Element::Fire)));
    }
    board.set(Pos::new(7, 1), Some(Tile::plain(210, Element::Water)));
    board.set(Pos::new(7, 2), Some(Tile::plain(211, Element::Water)));

    let mut tiles = TileSource::new(1);
    let first = clear_matches(&mut board, &mut tiles, 1).unwrap();
    assert_eq!(first.gain, 3 * CELL_SCORE);
    board.collapse_columns();

    let second = clear_matches(&mut board, &mut tiles, 2).unwrap();
    assert_eq!(second.cleared, 3);
    assert_eq!(second.gain, 6 * CELL_SCORE);
}
